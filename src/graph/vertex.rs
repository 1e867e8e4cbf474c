//! 顶点定义
//!
//! 顶点持有调用方提供的 ID、展示负载和邻接表

use crate::types::{VertexData, VertexId, Weight};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 邻接表条目：相邻顶点 + 到达它的边权
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// 相邻顶点 ID
    pub to: VertexId,
    /// 边权
    pub weight: Weight,
}

/// 顶点
///
/// 归属于创建它的 Graph，不在 Graph 实例间共享。
/// 算法运行期间的距离/访问状态一律放在算法局部 map 中，
/// 不会写回顶点。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 展示负载（名称、坐标），算法不读取
    data: VertexData,
    /// 邻接表（出边；无向图中含镜像条目）
    adjacency: SmallVec<[Neighbor; 4]>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId, data: VertexData) -> Self {
        Self {
            id,
            data,
            adjacency: SmallVec::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取展示负载
    pub fn data(&self) -> &VertexData {
        &self.data
    }

    /// 获取邻接表
    pub fn adjacency(&self) -> &[Neighbor] {
        &self.adjacency
    }

    /// 追加一条邻接条目（仅供 Graph::add_edge 调用）
    pub(super) fn push_neighbor(&mut self, to: VertexId, weight: Weight) {
        self.adjacency.push(Neighbor { to, weight });
    }

    /// 出度（邻接条目数）
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VertexData;

    #[test]
    fn test_vertex_basic() {
        let mut v = Vertex::new(VertexId::new(1), VertexData::named("A"));
        assert_eq!(v.id().as_u64(), 1);
        assert_eq!(v.data().name.as_deref(), Some("A"));
        assert!(v.adjacency().is_empty());

        v.push_neighbor(VertexId::new(2), 3.5);
        assert_eq!(v.degree(), 1);
        assert_eq!(v.adjacency()[0].to, VertexId::new(2));
        assert_eq!(v.adjacency()[0].weight, 3.5);
    }
}
