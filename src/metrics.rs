//! 性能指标收集模块
//!
//! 提供算法运行与图构建指标的收集和导出功能

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 算法种类（指标维度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    Dijkstra,
    BellmanFord,
    Bfs,
    Dfs,
    Prim,
    Kruskal,
    FloydWarshall,
    TopologicalSort,
}

impl AlgorithmKind {
    /// 全部种类，导出时按此顺序迭代
    pub const ALL: [AlgorithmKind; 8] = [
        AlgorithmKind::Dijkstra,
        AlgorithmKind::BellmanFord,
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Prim,
        AlgorithmKind::Kruskal,
        AlgorithmKind::FloydWarshall,
        AlgorithmKind::TopologicalSort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::BellmanFord => "bellman-ford",
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Prim => "prim",
            AlgorithmKind::Kruskal => "kruskal",
            AlgorithmKind::FloydWarshall => "floyd-warshall",
            AlgorithmKind::TopologicalSort => "topological-sort",
        }
    }

    fn index(&self) -> usize {
        AlgorithmKind::ALL.iter().position(|k| k == self).unwrap()
    }
}

/// 系统全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 运行统计
    run_stats: RunStats,
    /// 各算法运行次数
    algorithm_runs: [AtomicU64; 8],
    /// 图构建统计
    graph_stats: GraphStats,
    /// 启动时间
    start_time: Instant,
}

/// 运行统计
#[derive(Debug)]
struct RunStats {
    /// 总运行数
    total_runs: AtomicU64,
    /// 成功运行数
    success_runs: AtomicU64,
    /// 失败运行数
    failed_runs: AtomicU64,
    /// 运行总耗时（微秒）
    total_duration_us: AtomicU64,
    /// 慢运行数（>1s）
    slow_runs: AtomicU64,
}

/// 图构建统计
#[derive(Debug)]
struct GraphStats {
    /// 构建的图数量
    graphs_built: AtomicU64,
    /// 累计顶点数
    vertices_added: AtomicU64,
    /// 累计边数
    edges_added: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    // 运行指标
    pub total_runs: u64,
    pub success_runs: u64,
    pub failed_runs: u64,
    pub avg_run_duration_ms: f64,
    pub slow_runs: u64,

    // 各算法运行次数（与 AlgorithmKind::ALL 对应）
    pub runs_by_algorithm: Vec<(String, u64)>,

    // 图构建指标
    pub graphs_built: u64,
    pub vertices_added: u64,
    pub edges_added: u64,

    // 系统指标
    pub uptime_seconds: u64,
}

/// Prometheus 格式指标
#[derive(Debug, Clone)]
pub struct PrometheusMetrics {
    pub content: String,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            run_stats: RunStats {
                total_runs: AtomicU64::new(0),
                success_runs: AtomicU64::new(0),
                failed_runs: AtomicU64::new(0),
                total_duration_us: AtomicU64::new(0),
                slow_runs: AtomicU64::new(0),
            },
            algorithm_runs: std::array::from_fn(|_| AtomicU64::new(0)),
            graph_stats: GraphStats {
                graphs_built: AtomicU64::new(0),
                vertices_added: AtomicU64::new(0),
                edges_added: AtomicU64::new(0),
            },
            start_time: Instant::now(),
        }
    }

    /// 记录算法开始运行
    pub fn record_run_start(&self, kind: AlgorithmKind) -> RunTimer {
        self.run_stats.total_runs.fetch_add(1, Ordering::Relaxed);
        self.algorithm_runs[kind.index()].fetch_add(1, Ordering::Relaxed);
        RunTimer::new()
    }

    /// 记录算法运行结束
    pub fn record_run_complete(&self, timer: RunTimer, success: bool) {
        let duration = timer.elapsed();

        if success {
            self.run_stats.success_runs.fetch_add(1, Ordering::Relaxed);
        } else {
            self.run_stats.failed_runs.fetch_add(1, Ordering::Relaxed);
        }

        self.run_stats
            .total_duration_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);

        // 慢运行：超过 1 秒
        if duration.as_secs() >= 1 {
            self.run_stats.slow_runs.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// 记录一次图构建
    pub fn record_graph_built(&self, vertices: usize, edges: usize) {
        self.graph_stats.graphs_built.fetch_add(1, Ordering::Relaxed);
        self.graph_stats
            .vertices_added
            .fetch_add(vertices as u64, Ordering::Relaxed);
        self.graph_stats
            .edges_added
            .fetch_add(edges as u64, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let total_runs = self.run_stats.total_runs.load(Ordering::Relaxed);
        let total_duration_us = self.run_stats.total_duration_us.load(Ordering::Relaxed);

        let avg_run_duration_ms = if total_runs > 0 {
            (total_duration_us as f64) / (total_runs as f64) / 1000.0
        } else {
            0.0
        };

        let runs_by_algorithm = AlgorithmKind::ALL
            .iter()
            .map(|k| {
                (
                    k.as_str().to_string(),
                    self.algorithm_runs[k.index()].load(Ordering::Relaxed),
                )
            })
            .collect();

        MetricsSnapshot {
            total_runs,
            success_runs: self.run_stats.success_runs.load(Ordering::Relaxed),
            failed_runs: self.run_stats.failed_runs.load(Ordering::Relaxed),
            avg_run_duration_ms,
            slow_runs: self.run_stats.slow_runs.load(Ordering::Relaxed),
            runs_by_algorithm,
            graphs_built: self.graph_stats.graphs_built.load(Ordering::Relaxed),
            vertices_added: self.graph_stats.vertices_added.load(Ordering::Relaxed),
            edges_added: self.graph_stats.edges_added.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 导出为 Prometheus 格式
    pub fn to_prometheus(&self) -> PrometheusMetrics {
        let snapshot = self.snapshot();

        let mut content = String::new();

        content.push_str("# HELP algolab_runs_total Total number of algorithm runs\n");
        content.push_str("# TYPE algolab_runs_total counter\n");
        content.push_str(&format!("algolab_runs_total {}\n", snapshot.total_runs));

        content.push_str("# HELP algolab_runs_success_total Number of successful runs\n");
        content.push_str("# TYPE algolab_runs_success_total counter\n");
        content.push_str(&format!(
            "algolab_runs_success_total {}\n",
            snapshot.success_runs
        ));

        content.push_str("# HELP algolab_runs_failed_total Number of failed runs\n");
        content.push_str("# TYPE algolab_runs_failed_total counter\n");
        content.push_str(&format!(
            "algolab_runs_failed_total {}\n",
            snapshot.failed_runs
        ));

        content.push_str("# HELP algolab_run_duration_avg_ms Average run duration in milliseconds\n");
        content.push_str("# TYPE algolab_run_duration_avg_ms gauge\n");
        content.push_str(&format!(
            "algolab_run_duration_avg_ms {:.2}\n",
            snapshot.avg_run_duration_ms
        ));

        content.push_str("# HELP algolab_slow_runs_total Number of slow runs (>1s)\n");
        content.push_str("# TYPE algolab_slow_runs_total counter\n");
        content.push_str(&format!("algolab_slow_runs_total {}\n", snapshot.slow_runs));

        content.push_str("# HELP algolab_algorithm_runs_total Runs per algorithm\n");
        content.push_str("# TYPE algolab_algorithm_runs_total counter\n");
        for (name, count) in &snapshot.runs_by_algorithm {
            content.push_str(&format!(
                "algolab_algorithm_runs_total{{algorithm=\"{}\"}} {}\n",
                name, count
            ));
        }

        content.push_str("# HELP algolab_graphs_built_total Graphs built from requests\n");
        content.push_str("# TYPE algolab_graphs_built_total counter\n");
        content.push_str(&format!(
            "algolab_graphs_built_total {}\n",
            snapshot.graphs_built
        ));

        content.push_str("# HELP algolab_vertices_added_total Total vertices added\n");
        content.push_str("# TYPE algolab_vertices_added_total counter\n");
        content.push_str(&format!(
            "algolab_vertices_added_total {}\n",
            snapshot.vertices_added
        ));

        content.push_str("# HELP algolab_edges_added_total Total edges added\n");
        content.push_str("# TYPE algolab_edges_added_total counter\n");
        content.push_str(&format!(
            "algolab_edges_added_total {}\n",
            snapshot.edges_added
        ));

        content.push_str("# HELP algolab_uptime_seconds System uptime in seconds\n");
        content.push_str("# TYPE algolab_uptime_seconds counter\n");
        content.push_str(&format!(
            "algolab_uptime_seconds {}\n",
            snapshot.uptime_seconds
        ));

        PrometheusMetrics { content }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.run_stats.total_runs.store(0, Ordering::Relaxed);
        self.run_stats.success_runs.store(0, Ordering::Relaxed);
        self.run_stats.failed_runs.store(0, Ordering::Relaxed);
        self.run_stats.total_duration_us.store(0, Ordering::Relaxed);
        self.run_stats.slow_runs.store(0, Ordering::Relaxed);

        for counter in &self.algorithm_runs {
            counter.store(0, Ordering::Relaxed);
        }

        self.graph_stats.graphs_built.store(0, Ordering::Relaxed);
        self.graph_stats.vertices_added.store(0, Ordering::Relaxed);
        self.graph_stats.edges_added.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 运行计时器
pub struct RunTimer {
    start: Instant,
}

impl RunTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = Metrics::new();

        let timer = metrics.record_run_start(AlgorithmKind::Dijkstra);
        metrics.record_run_complete(timer, true);

        let timer = metrics.record_run_start(AlgorithmKind::Prim);
        metrics.record_run_complete(timer, false);

        metrics.record_graph_built(4, 5);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_runs, 2);
        assert_eq!(snapshot.success_runs, 1);
        assert_eq!(snapshot.failed_runs, 1);
        assert_eq!(snapshot.graphs_built, 1);
        assert_eq!(snapshot.vertices_added, 4);

        let dijkstra = snapshot
            .runs_by_algorithm
            .iter()
            .find(|(name, _)| name == "dijkstra")
            .unwrap();
        assert_eq!(dijkstra.1, 1);
    }

    #[test]
    fn test_prometheus_export() {
        let metrics = Metrics::new();
        let timer = metrics.record_run_start(AlgorithmKind::Bfs);
        metrics.record_run_complete(timer, true);

        let prom = metrics.to_prometheus();
        assert!(prom.content.contains("algolab_runs_total"));
        assert!(prom
            .content
            .contains("algolab_algorithm_runs_total{algorithm=\"bfs\"}"));
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        let timer = metrics.record_run_start(AlgorithmKind::Dfs);
        metrics.record_run_complete(timer, true);

        metrics.reset();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_runs, 0);
        assert!(snapshot.runs_by_algorithm.iter().all(|(_, c)| *c == 0));
    }
}
