//! 算法支撑结构
//!
//! 最小优先队列（Dijkstra / Prim）与并查集（Kruskal / 连通性检查）

pub mod disjoint_set;
pub mod priority_queue;

pub use disjoint_set::DisjointSet;
pub use priority_queue::PriorityQueue;
