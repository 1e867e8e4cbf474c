//! 图遍历
//!
//! BFS（层序）与 DFS（深度优先）。无向图沿镜像邻接双向走，
//! 有向图只沿存储方向走。

use super::trace::{NullTrace, TraceEvent, TraceObserver};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// 遍历结果：访问顺序 + 前驱映射（遍历树）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Traversal {
    /// 顶点访问顺序
    pub order: Vec<VertexId>,
    /// 每个已访问顶点在遍历树中的前驱；起点为 None
    pub parent: HashMap<VertexId, Option<VertexId>>,
}

impl Graph {
    /// 广度优先遍历
    ///
    /// 顶点在入队时即标记已访问，避免重复入队。
    /// 未触达顶点不出现在结果中（不可达不是错误）。
    pub fn bfs(&self, start: VertexId) -> Result<Traversal> {
        self.bfs_traced(start, &mut NullTrace)
    }

    /// 带步骤追踪的 BFS，见 [`Graph::bfs`]
    pub fn bfs_traced(
        &self,
        start: VertexId,
        observer: &mut dyn TraceObserver,
    ) -> Result<Traversal> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();
        let mut order = Vec::new();
        let mut parent: HashMap<VertexId, Option<VertexId>> = HashMap::new();

        visited.insert(start);
        parent.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            observer.on_event(TraceEvent::Visit { vertex: current });

            for n in self.neighbors(current) {
                if !visited.contains(&n.to) {
                    visited.insert(n.to);
                    parent.insert(n.to, Some(current));
                    queue.push_back(n.to);
                    observer.on_event(TraceEvent::Discover {
                        vertex: n.to,
                        parent: Some(current),
                    });
                }
            }
        }

        Ok(Traversal { order, parent })
    }

    /// 深度优先遍历
    ///
    /// 显式栈实现，访问顺序与"进入时标记"的递归写法一致
    /// （邻接表逆序压栈），深图不会压爆调用栈。
    pub fn dfs(&self, start: VertexId) -> Result<Traversal> {
        self.dfs_traced(start, &mut NullTrace)
    }

    /// 带步骤追踪的 DFS，见 [`Graph::dfs`]
    pub fn dfs_traced(
        &self,
        start: VertexId,
        observer: &mut dyn TraceObserver,
    ) -> Result<Traversal> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut order = Vec::new();
        let mut parent: HashMap<VertexId, Option<VertexId>> = HashMap::new();
        let mut stack: Vec<(VertexId, Option<VertexId>)> = vec![(start, None)];

        while let Some((current, from)) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.insert(current);
            order.push(current);
            parent.insert(current, from);
            observer.on_event(TraceEvent::Visit { vertex: current });
            if current != start {
                observer.on_event(TraceEvent::Discover {
                    vertex: current,
                    parent: from,
                });
            }

            for n in self.neighbors(current).iter().rev() {
                if !visited.contains(&n.to) {
                    stack.push((n.to, Some(current)));
                }
            }
        }

        Ok(Traversal { order, parent })
    }
}
