//! 边定义
//!
//! `(from, to, weight)` 三元组；无向图的方向仅表示存储方向

use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// 边
///
/// 平铺边表中的条目。无向图中每条边在表中仅出现一次，
/// 但两个端点的邻接表各有一条镜像记录。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 源顶点 ID
    pub from: VertexId,
    /// 目标顶点 ID
    pub to: VertexId,
    /// 权重（仅在显式支持的算法中允许为负）
    pub weight: Weight,
}

impl Edge {
    /// 创建新边
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// 给定一个端点，返回另一个端点；
    /// 顶点不在这条边上时返回 None
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.from == vertex {
            Some(self.to)
        } else if self.to == vertex {
            Some(self.from)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_other() {
        let e = Edge::new(VertexId::new(1), VertexId::new(2), 4.0);
        assert_eq!(e.other(VertexId::new(1)), Some(VertexId::new(2)));
        assert_eq!(e.other(VertexId::new(2)), Some(VertexId::new(1)));
        assert_eq!(e.other(VertexId::new(3)), None);
    }
}
