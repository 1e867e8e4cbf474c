//! 通用类型定义
//!
//! 顶点 ID、顶点负载数据和权重类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
pub type Weight = f64;

/// 顶点 ID（由调用方提供，图内唯一）
///
/// 引擎不解释其数值，也不会自动分配；对引擎而言它是不透明标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点负载数据（名称、画布坐标）
///
/// 仅用于展示层，算法不读取这些字段。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexData {
    /// 展示名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 画布 X 坐标
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// 画布 Y 坐标
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl VertexData {
    /// 创建带名称的负载
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            x: None,
            y: None,
        }
    }

    /// 创建带名称和坐标的负载
    pub fn with_position(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: Some(name.into()),
            x: Some(x),
            y: Some(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let id = VertexId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(VertexId::from(42), id);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_vertex_data_serde() {
        let data = VertexData::with_position("A", 120.0, 260.0);
        let json = serde_json::to_string(&data).unwrap();
        let restored: VertexData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, restored);

        // 省略字段应当反序列化为 None
        let empty: VertexData = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, VertexData::default());
    }
}
