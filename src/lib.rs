//! AlgoLab - 图算法引擎
//!
//! 为交互式可视化前端设计的图算法引擎，提供：
//! - 顶点/边数据模型（一次构建、一次消费）
//! - 八个经典算法：Dijkstra、Bellman-Ford、BFS、DFS、
//!   Prim、Kruskal、Floyd-Warshall、拓扑排序
//! - 面向"步骤解说"的结构化追踪事件
//! - REST API、随机图生成与 JSON 导入导出

pub mod algorithm;
pub mod collections;
pub mod error;
pub mod generate;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod server;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    AllPairs, NullTrace, ShortestPaths, SpanningTree, StepTrace, TraceEvent, TraceObserver,
    Traversal,
};
pub use collections::{DisjointSet, PriorityQueue};
pub use error::{Error, Result};
pub use graph::{Connectivity, Edge, Graph, Neighbor, Vertex};
pub use io::GraphDocument;
pub use types::{VertexData, VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
