//! 最小生成树
//!
//! Prim（候选边队列）与 Kruskal（排序 + 并查集）。
//! 两者都要求无向图；非连通图返回可达部分的生成树/森林，
//! 不报错——调用方需要知道这一行为。

use super::trace::{NullTrace, TraceEvent, TraceObserver};
use crate::collections::{DisjointSet, PriorityQueue};
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 生成树结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanningTree {
    /// 入选的边
    pub mst: Vec<Edge>,
    /// 入选边的总权重
    pub total_weight: Weight,
}

impl Graph {
    /// Prim 最小生成树
    ///
    /// 从插入顺序的第一个顶点开始生长；候选边按权重出队，
    /// 指向已入树顶点的过期条目在出队时丢弃。
    /// 队列耗尽而顶点未覆盖完即图不连通，此时只返回起点
    /// 所在分量的生成树。
    pub fn prim(&self) -> Result<SpanningTree> {
        self.prim_traced(&mut NullTrace)
    }

    /// 带步骤追踪的 Prim，见 [`Graph::prim`]
    pub fn prim_traced(&self, observer: &mut dyn TraceObserver) -> Result<SpanningTree> {
        if self.is_directed() {
            return Err(Error::UndirectedRequired("prim"));
        }

        let mut mst = Vec::new();
        let mut total_weight = 0.0;

        let start = match self.first_vertex_id() {
            Some(v) => v,
            None => {
                return Ok(SpanningTree { mst, total_weight });
            }
        };

        let mut visited: HashSet<_> = HashSet::new();
        visited.insert(start);

        let mut pq = PriorityQueue::new();
        for n in self.neighbors(start) {
            pq.enqueue(Edge::new(start, n.to, n.weight), n.weight);
            observer.on_event(TraceEvent::Enqueue {
                vertex: n.to,
                priority: n.weight,
            });
        }

        while visited.len() < self.vertex_count() {
            let edge = match pq.dequeue() {
                Some(e) => e,
                // 队列耗尽：图不连通，覆盖可达分量即止
                None => break,
            };

            if visited.contains(&edge.to) {
                observer.on_event(TraceEvent::EdgeRejected {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
                continue;
            }

            visited.insert(edge.to);
            total_weight += edge.weight;
            observer.on_event(TraceEvent::EdgeAccepted {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            });

            for n in self.neighbors(edge.to) {
                if !visited.contains(&n.to) {
                    pq.enqueue(Edge::new(edge.to, n.to, n.weight), n.weight);
                    observer.on_event(TraceEvent::Enqueue {
                        vertex: n.to,
                        priority: n.weight,
                    });
                }
            }

            mst.push(edge);
        }

        Ok(SpanningTree { mst, total_weight })
    }

    /// Kruskal 最小生成树
    ///
    /// 平铺边表按权重升序稳定排序（权重相同保持边表原顺序），
    /// 并查集判环，凑满 |V|-1 条边提前结束。
    /// 非连通图自然得到生成森林。
    pub fn kruskal(&self) -> Result<SpanningTree> {
        self.kruskal_traced(&mut NullTrace)
    }

    /// 带步骤追踪的 Kruskal，见 [`Graph::kruskal`]
    pub fn kruskal_traced(&self, observer: &mut dyn TraceObserver) -> Result<SpanningTree> {
        if self.is_directed() {
            return Err(Error::UndirectedRequired("kruskal"));
        }

        let mut ds = DisjointSet::new();
        for v in self.vertex_ids() {
            ds.make_set(v);
        }

        let mut sorted = self.edges().to_vec();
        sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut mst = Vec::new();
        let mut total_weight = 0.0;
        let target = self.vertex_count().saturating_sub(1);

        for edge in sorted {
            if ds.union(edge.from, edge.to) {
                total_weight += edge.weight;
                observer.on_event(TraceEvent::EdgeAccepted {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
                mst.push(edge);
                if mst.len() == target {
                    break;
                }
            } else {
                // 两端已连通，这条边会成环
                observer.on_event(TraceEvent::EdgeRejected {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }
        }

        Ok(SpanningTree { mst, total_weight })
    }
}
