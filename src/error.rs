//! 错误类型定义

use crate::types::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("算法 {0} 要求无向图")]
    UndirectedRequired(&'static str),

    #[error("拓扑排序要求有向图")]
    DirectedRequired,

    #[error("图中存在从起点可达的负权环")]
    NegativeCycle,

    #[error("图中存在环，无法给出拓扑序")]
    CycleDetected,

    #[error("生成参数错误: {0}")]
    InvalidGenerateConfig(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("服务器错误: {0}")]
    ServerError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
