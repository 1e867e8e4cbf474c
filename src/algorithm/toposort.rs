//! 拓扑排序
//!
//! Kahn 算法。只接受有向图；存在环时报错，不返回部分排序。

use super::trace::{NullTrace, TraceEvent, TraceObserver};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::VertexId;
use std::collections::{HashMap, VecDeque};

impl Graph {
    /// 拓扑排序
    ///
    /// 扫平铺边表统计入度，零入度顶点按插入顺序作为种子，
    /// 逐个出队并递减邻居入度。输出长度小于顶点数即图中有环，
    /// 返回 [`Error::CycleDetected`]。
    pub fn topological_sort(&self) -> Result<Vec<VertexId>> {
        self.topological_sort_traced(&mut NullTrace)
    }

    /// 带步骤追踪的拓扑排序，见 [`Graph::topological_sort`]
    pub fn topological_sort_traced(
        &self,
        observer: &mut dyn TraceObserver,
    ) -> Result<Vec<VertexId>> {
        if !self.is_directed() {
            return Err(Error::DirectedRequired);
        }

        let mut in_degree: HashMap<VertexId, usize> =
            self.vertex_ids().map(|v| (v, 0)).collect();
        for edge in self.edges() {
            *in_degree.get_mut(&edge.to).expect("边表端点必在顶点表中") += 1;
        }

        let mut queue: VecDeque<VertexId> = self
            .vertex_ids()
            .filter(|v| in_degree[v] == 0)
            .collect();

        let mut result = Vec::with_capacity(self.vertex_count());
        while let Some(current) = queue.pop_front() {
            result.push(current);
            observer.on_event(TraceEvent::Ordered { vertex: current });

            for n in self.neighbors(current) {
                let d = in_degree.get_mut(&n.to).expect("邻接端点必在顶点表中");
                *d -= 1;
                if *d == 0 {
                    queue.push_back(n.to);
                }
            }
        }

        if result.len() != self.vertex_count() {
            return Err(Error::CycleDetected);
        }

        Ok(result)
    }
}
