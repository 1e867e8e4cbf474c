//! 图数据结构
//!
//! 顶点/边容器；所有算法入口都是它的方法（见 algorithm 模块）

use super::edge::Edge;
use super::vertex::{Neighbor, Vertex};
use crate::collections::DisjointSet;
use crate::types::{VertexData, VertexId, Weight};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 连通性概要（忽略边方向的弱连通）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    pub is_empty: bool,
    pub is_connected: bool,
    pub component_count: usize,
}

/// 图容器
///
/// 顶点表使用 IndexMap，迭代顺序固定为插入顺序——
/// 平局裁决（Dijkstra 起始入队、Prim 起点选择、拓扑排序种子顺序）
/// 都依赖这一顺序，测试以此为准。
///
/// 一次构建、一次（或多次相互独立的）算法调用、然后丢弃。
/// 算法调用不会修改图的持久结构。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// 顶点表（插入顺序迭代）
    vertices: IndexMap<VertexId, Vertex>,
    /// 平铺边表（追加顺序）
    edges: Vec<Edge>,
    /// 有向标志，构造时确定，之后不变
    directed: bool,
}

impl Graph {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: Vec::new(),
            directed,
        }
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 构建 ====================

    /// 添加顶点；id 已存在时不做任何事（已有负载保持不变）
    pub fn add_vertex(&mut self, id: VertexId, data: VertexData) {
        self.vertices.entry(id).or_insert_with(|| Vertex::new(id, data));
    }

    /// 添加边，缺失的端点会以默认负载自动补建。
    /// 无条件追加：重复边合法且全部参与算法。
    /// 无向图同时在两端的邻接表写入镜像条目。
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.add_vertex(from, VertexData::default());
        self.add_vertex(to, VertexData::default());

        self.edges.push(Edge::new(from, to, weight));

        if let Some(v) = self.vertices.get_mut(&from) {
            v.push_neighbor(to, weight);
        }
        if !self.directed {
            if let Some(v) = self.vertices.get_mut(&to) {
                v.push_neighbor(from, weight);
            }
        }
    }

    /// 添加默认权重 1 的边
    pub fn add_edge_unweighted(&mut self, from: VertexId, to: VertexId) {
        self.add_edge(from, to, 1.0);
    }

    // ==================== 查询 ====================

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 按插入顺序迭代顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// 按插入顺序迭代顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 第一个插入的顶点 ID（Prim 的起点）
    pub fn first_vertex_id(&self) -> Option<VertexId> {
        self.vertices.keys().next().copied()
    }

    /// 平铺边表（追加顺序）
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 顶点的邻接表；顶点不存在时返回空切片
    pub fn neighbors(&self, id: VertexId) -> &[Neighbor] {
        self.vertices.get(&id).map(|v| v.adjacency()).unwrap_or(&[])
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 边数量（平铺边表长度；无向边计一次）
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 图是否为空（无顶点）
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 校验 ====================

    /// 弱连通性检查：忽略边方向，用并查集统计连通分量
    pub fn connectivity(&self) -> Connectivity {
        if self.is_empty() {
            return Connectivity {
                is_empty: true,
                is_connected: false,
                component_count: 0,
            };
        }

        let mut ds = DisjointSet::new();
        for v in self.vertex_ids() {
            ds.make_set(v);
        }
        for edge in self.edges() {
            ds.union(edge.from, edge.to);
        }

        let component_count = ds.set_count();
        Connectivity {
            is_empty: false,
            is_connected: component_count == 1,
            component_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> VertexId {
        VertexId::new(n)
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = Graph::undirected();
        g.add_vertex(id(1), VertexData::named("A"));
        g.add_vertex(id(1), VertexData::named("B"));

        assert_eq!(g.vertex_count(), 1);
        // 已有负载保持不变
        assert_eq!(g.vertex(id(1)).unwrap().data().name.as_deref(), Some("A"));
    }

    #[test]
    fn test_add_edge_auto_vertex() {
        let mut g = Graph::undirected();
        g.add_edge(id(1), id(2), 5.0);

        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains_vertex(id(1)));
        assert!(g.contains_vertex(id(2)));
    }

    #[test]
    fn test_undirected_mirroring() {
        let mut g = Graph::undirected();
        g.add_edge(id(1), id(2), 5.0);

        // 平铺表一条，两端邻接表各一条镜像
        assert_eq!(g.edges().len(), 1);
        assert_eq!(g.neighbors(id(1)).len(), 1);
        assert_eq!(g.neighbors(id(2)).len(), 1);
        assert_eq!(g.neighbors(id(2))[0].to, id(1));
    }

    #[test]
    fn test_directed_no_mirror() {
        let mut g = Graph::directed();
        g.add_edge(id(1), id(2), 5.0);

        assert_eq!(g.neighbors(id(1)).len(), 1);
        assert!(g.neighbors(id(2)).is_empty());
    }

    #[test]
    fn test_duplicate_edges_kept() {
        let mut g = Graph::undirected();
        g.add_edge(id(1), id(2), 5.0);
        g.add_edge(id(1), id(2), 7.0);

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(id(1)).len(), 2);
    }

    #[test]
    fn test_connectivity() {
        let mut g = Graph::undirected();
        g.add_edge(id(1), id(2), 1.0);
        g.add_edge(id(3), id(4), 1.0);

        let c = g.connectivity();
        assert!(!c.is_empty);
        assert!(!c.is_connected);
        assert_eq!(c.component_count, 2);

        g.add_edge(id(2), id(3), 1.0);
        let c = g.connectivity();
        assert!(c.is_connected);
        assert_eq!(c.component_count, 1);
    }

    #[test]
    fn test_connectivity_empty() {
        let g = Graph::undirected();
        let c = g.connectivity();
        assert!(c.is_empty);
        assert!(!c.is_connected);
        assert_eq!(c.component_count, 0);
    }

    #[test]
    fn test_insertion_order_iteration() {
        let mut g = Graph::directed();
        for n in [30u64, 10, 20] {
            g.add_vertex(id(n), VertexData::default());
        }

        let order: Vec<u64> = g.vertex_ids().map(|v| v.as_u64()).collect();
        assert_eq!(order, vec![30, 10, 20]);
        assert_eq!(g.first_vertex_id(), Some(id(30)));
    }
}
