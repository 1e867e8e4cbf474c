//! 算法步骤追踪
//!
//! 为前端"步骤解说"提供结构化事件流。观察者以参数注入，
//! 事件只是副输出，不参与算法控制流，也没有全局日志状态。

use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// 追踪事件
///
/// 每个算法在关键决策点发出命名事件；事件负载足以让展示层
/// 还原队列内容与松弛决策。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TraceEvent {
    /// 顶点被确定访问（出队 / 进入递归）
    Visit { vertex: VertexId },
    /// 顶点以某优先级入队（Dijkstra / Prim 的候选队列）
    Enqueue { vertex: VertexId, priority: Weight },
    /// 出队时发现顶点已访问，条目作废丢弃
    SkipStale { vertex: VertexId },
    /// 松弛成功：经 from 到 to 的更短距离
    Relax {
        from: VertexId,
        to: VertexId,
        distance: Weight,
    },
    /// BFS/DFS 发现新顶点并记录前驱
    Discover {
        vertex: VertexId,
        parent: Option<VertexId>,
    },
    /// Bellman-Ford 完成一轮全边松弛
    PassCompleted { pass: usize, changed: bool },
    /// MST 采纳一条边
    EdgeAccepted {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },
    /// MST 丢弃一条边（会成环 / 端点已在树中）
    EdgeRejected {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },
    /// 拓扑排序输出一个顶点
    Ordered { vertex: VertexId },
}

/// 追踪观察者
pub trait TraceObserver {
    /// 接收一个事件
    fn on_event(&mut self, event: TraceEvent);
}

/// 空观察者：不追踪时的默认实现
pub struct NullTrace;

impl TraceObserver for NullTrace {
    fn on_event(&mut self, _event: TraceEvent) {}
}

/// 收集全部事件的观察者，服务层用它把步骤随结果返回
#[derive(Debug, Default, Clone, Serialize)]
pub struct StepTrace {
    pub events: Vec<TraceEvent>,
}

impl StepTrace {
    /// 创建空的事件收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 事件数量
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// 是否未收集到事件
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 取出全部事件
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl TraceObserver for StepTrace {
    fn on_event(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_trace_collects() {
        let mut trace = StepTrace::new();
        trace.on_event(TraceEvent::Visit {
            vertex: VertexId::new(1),
        });
        trace.on_event(TraceEvent::Relax {
            from: VertexId::new(1),
            to: VertexId::new(2),
            distance: 3.0,
        });

        assert_eq!(trace.len(), 2);
        assert_eq!(
            trace.events[0],
            TraceEvent::Visit {
                vertex: VertexId::new(1)
            }
        );
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = TraceEvent::EdgeAccepted {
            from: VertexId::new(1),
            to: VertexId::new(2),
            weight: 4.5,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "edgeAccepted");
        assert_eq!(json["weight"], 4.5);
    }
}
