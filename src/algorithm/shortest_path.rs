//! 单源最短路径
//!
//! Dijkstra（非负权）与 Bellman-Ford（允许负权，可检出负权环），
//! 以及共享的路径重建工具

use super::trace::{NullTrace, TraceEvent, TraceObserver};
use crate::collections::PriorityQueue;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 单源最短路径结果
///
/// 不可达顶点的距离为 +∞（JSON 序列化为 null），前驱为 None。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// 起点到每个顶点的最短距离
    pub distances: HashMap<VertexId, Weight>,
    /// 前驱映射（最短路径树）
    pub previous: HashMap<VertexId, Option<VertexId>>,
    /// 指定终点时的重建路径；终点不可达或未指定终点为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<VertexId>>,
}

/// 对一条边做松弛，返回是否缩短了距离
fn relax(
    distances: &mut HashMap<VertexId, Weight>,
    previous: &mut HashMap<VertexId, Option<VertexId>>,
    from: VertexId,
    to: VertexId,
    weight: Weight,
) -> bool {
    let alt = distances[&from] + weight;
    if alt < distances[&to] {
        distances.insert(to, alt);
        previous.insert(to, Some(from));
        true
    } else {
        false
    }
}

impl Graph {
    /// Dijkstra 单源最短路径
    ///
    /// 前置条件：所有边权非负。违反时结果未定义（算法不检查，
    /// 负权图请使用 [`Graph::bellman_ford`]）。
    ///
    /// 指定 `end` 时在终点出队后立即提前返回，
    /// 此后未触达顶点的距离保持 +∞。
    pub fn dijkstra(&self, start: VertexId, end: Option<VertexId>) -> Result<ShortestPaths> {
        self.dijkstra_traced(start, end, &mut NullTrace)
    }

    /// 带步骤追踪的 Dijkstra，见 [`Graph::dijkstra`]
    pub fn dijkstra_traced(
        &self,
        start: VertexId,
        end: Option<VertexId>,
        observer: &mut dyn TraceObserver,
    ) -> Result<ShortestPaths> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }
        if let Some(end_id) = end {
            if !self.contains_vertex(end_id) {
                return Err(Error::VertexNotFound(end_id));
            }
        }

        let mut distances: HashMap<VertexId, Weight> = HashMap::new();
        let mut previous: HashMap<VertexId, Option<VertexId>> = HashMap::new();
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut pq = PriorityQueue::new();

        // 按插入顺序全量入队：起点距离 0，其余 +∞
        for id in self.vertex_ids() {
            let d = if id == start { 0.0 } else { Weight::INFINITY };
            distances.insert(id, d);
            previous.insert(id, None);
            pq.enqueue(id, d);
        }

        while let Some(current) = pq.dequeue() {
            // 过期条目在出队时丢弃，不从队列中移除
            if visited.contains(&current) {
                observer.on_event(TraceEvent::SkipStale { vertex: current });
                continue;
            }
            visited.insert(current);
            observer.on_event(TraceEvent::Visit { vertex: current });

            // 终点出队即可提前结束
            if end == Some(current) {
                break;
            }

            let current_dist = distances[&current];
            for n in self.neighbors(current) {
                if visited.contains(&n.to) {
                    continue;
                }
                let alt = current_dist + n.weight;
                if alt < distances[&n.to] {
                    distances.insert(n.to, alt);
                    previous.insert(n.to, Some(current));
                    pq.enqueue(n.to, alt);
                    observer.on_event(TraceEvent::Relax {
                        from: current,
                        to: n.to,
                        distance: alt,
                    });
                    observer.on_event(TraceEvent::Enqueue {
                        vertex: n.to,
                        priority: alt,
                    });
                }
            }
        }

        // 先做显式可达性判断，再重建路径
        let path = match end {
            Some(end_id) if distances[&end_id].is_finite() => {
                self.reconstruct_path(&previous, start, end_id)
            }
            _ => None,
        };

        Ok(ShortestPaths {
            distances,
            previous,
            path,
        })
    }

    /// Bellman-Ford 单源最短路径
    ///
    /// 允许负权边。对平铺边表按固定顺序做恰好 |V|-1 轮全量松弛
    /// （无向图中每条边松弛两个方向），随后再扫一轮：
    /// 仍能松弛即存在从起点可达的负权环，返回
    /// [`Error::NegativeCycle`]，不返回任何距离。
    pub fn bellman_ford(&self, start: VertexId) -> Result<ShortestPaths> {
        self.bellman_ford_traced(start, &mut NullTrace)
    }

    /// 带步骤追踪的 Bellman-Ford，见 [`Graph::bellman_ford`]
    pub fn bellman_ford_traced(
        &self,
        start: VertexId,
        observer: &mut dyn TraceObserver,
    ) -> Result<ShortestPaths> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }

        let mut distances: HashMap<VertexId, Weight> = HashMap::new();
        let mut previous: HashMap<VertexId, Option<VertexId>> = HashMap::new();
        for id in self.vertex_ids() {
            distances.insert(id, if id == start { 0.0 } else { Weight::INFINITY });
            previous.insert(id, None);
        }

        // ∞ + w 仍为 ∞，不会小于 ∞，因此无需原版的有限性判断
        let passes = self.vertex_count().saturating_sub(1);
        for pass in 1..=passes {
            let mut changed = false;
            for edge in self.edges() {
                if relax(&mut distances, &mut previous, edge.from, edge.to, edge.weight) {
                    changed = true;
                    observer.on_event(TraceEvent::Relax {
                        from: edge.from,
                        to: edge.to,
                        distance: distances[&edge.to],
                    });
                }
                if !self.is_directed()
                    && relax(&mut distances, &mut previous, edge.to, edge.from, edge.weight)
                {
                    changed = true;
                    observer.on_event(TraceEvent::Relax {
                        from: edge.to,
                        to: edge.from,
                        distance: distances[&edge.from],
                    });
                }
            }
            observer.on_event(TraceEvent::PassCompleted { pass, changed });
        }

        // 第 |V| 轮检测：仍可松弛说明存在负权环
        for edge in self.edges() {
            if distances[&edge.from] + edge.weight < distances[&edge.to] {
                return Err(Error::NegativeCycle);
            }
            if !self.is_directed() && distances[&edge.to] + edge.weight < distances[&edge.from] {
                return Err(Error::NegativeCycle);
            }
        }

        Ok(ShortestPaths {
            distances,
            previous,
            path: None,
        })
    }

    /// 沿前驱映射从 end 回溯到 start，返回 start→end 的顶点序列。
    ///
    /// 回溯链在非 start 顶点处断开（即 end 不可达）时返回 None。
    /// `previous` 必须来自同一张图上某次算法调用的结果。
    pub fn reconstruct_path(
        &self,
        previous: &HashMap<VertexId, Option<VertexId>>,
        start: VertexId,
        end: VertexId,
    ) -> Option<Vec<VertexId>> {
        let mut path = Vec::new();
        let mut current = Some(end);
        while let Some(v) = current {
            path.push(v);
            current = previous.get(&v).copied().flatten();
        }
        path.reverse();

        if path.first() == Some(&start) {
            Some(path)
        } else {
            None
        }
    }
}
