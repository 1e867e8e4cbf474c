//! 图算法模块
//!
//! 所有算法入口都是 [`crate::graph::Graph`] 的方法，
//! 本模块按算法族拆分文件，并提供步骤追踪设施

mod all_pairs;
mod mst;
mod shortest_path;
mod toposort;
mod trace;
mod traversal;

pub use all_pairs::AllPairs;
pub use mst::SpanningTree;
pub use shortest_path::ShortestPaths;
pub use trace::{NullTrace, StepTrace, TraceEvent, TraceObserver};
pub use traversal::Traversal;
