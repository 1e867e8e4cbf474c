//! HTTP 服务器模块
//!
//! 面向画布前端的 REST API：每个请求自带完整的节点/边列表，
//! 处理器为其构建一张独立的图、运行一个算法、返回纯数据结果。
//! 进程内没有任何共享可变图。

use crate::algorithm::{StepTrace, TraceEvent};
use crate::error::{Error, Result};
use crate::generate::{self, GenerateConfig};
use crate::graph::Graph;
use crate::io::GraphDocument;
use crate::metrics::{self, AlgorithmKind, RunTimer};
use crate::types::VertexId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// 启动服务器
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let app = router();

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("AlgoLab 服务器启动于 http://{}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::ServerError(format!("绑定地址失败: {}", e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::ServerError(format!("服务器错误: {}", e)))?;

    Ok(())
}

/// 构建路由（独立成函数便于测试）
pub fn router() -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 指标和统计
        .route("/metrics", get(metrics_handler))
        .route("/stats", get(stats_handler))
        // 图算法
        .route("/api/algorithms/dijkstra", post(run_dijkstra))
        .route("/api/algorithms/bellman-ford", post(run_bellman_ford))
        .route("/api/algorithms/bfs", post(run_bfs))
        .route("/api/algorithms/dfs", post(run_dfs))
        .route("/api/algorithms/prim", post(run_prim))
        .route("/api/algorithms/kruskal", post(run_kruskal))
        .route("/api/algorithms/floyd-warshall", post(run_floyd_warshall))
        .route(
            "/api/algorithms/topological-sort",
            post(run_topological_sort),
        )
        // 图操作
        .route("/api/graph/generate", post(generate_graph))
        .route("/api/graph/validate", post(validate_graph))
        // 前端运行在另一个端口上
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

// ==================== 处理器 ====================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Prometheus 格式指标
async fn metrics_handler() -> Response {
    use axum::body::Body;

    let metrics = metrics::global_metrics();
    let prom = metrics.to_prometheus();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/plain; version=0.0.4")
        .body(Body::from(prom.content))
        .unwrap()
        .into_response()
}

/// 详细统计信息
async fn stats_handler() -> impl IntoResponse {
    let metrics = metrics::global_metrics();
    let snapshot = metrics.snapshot();

    Json(serde_json::json!({
        "runs": {
            "total": snapshot.total_runs,
            "success": snapshot.success_runs,
            "failed": snapshot.failed_runs,
            "avg_duration_ms": snapshot.avg_run_duration_ms,
            "slow_runs": snapshot.slow_runs,
            "by_algorithm": snapshot.runs_by_algorithm,
        },
        "graphs": {
            "built": snapshot.graphs_built,
            "vertices_added": snapshot.vertices_added,
            "edges_added": snapshot.edges_added,
        },
        "system": {
            "uptime_seconds": snapshot.uptime_seconds,
            "version": env!("CARGO_PKG_VERSION"),
        }
    }))
}

/// 算法请求：图文档 + 算法参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRequest {
    #[serde(flatten)]
    pub graph: GraphDocument,
    /// 起点（遍历与单源最短路径必填）
    pub start_id: Option<VertexId>,
    /// 可选终点（Dijkstra 提前退出）
    pub end_id: Option<VertexId>,
    /// 是否随结果返回步骤追踪
    #[serde(default)]
    pub trace: bool,
}

/// 携带可选步骤追踪的结果包装
#[derive(Debug, Serialize)]
struct TracedResult<T: Serialize> {
    #[serde(flatten)]
    result: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<TraceEvent>>,
}

/// 按请求文档构建图并记录构建指标
fn build_graph(doc: &GraphDocument) -> Graph {
    let graph = doc.to_graph();
    metrics::global_metrics().record_graph_built(graph.vertex_count(), graph.edge_count());
    graph
}

/// 同上，但强制方向性（MST / 拓扑排序路由）
fn build_graph_forced(doc: &GraphDocument, directed: bool) -> Graph {
    let graph = doc.to_graph_with_direction(directed);
    metrics::global_metrics().record_graph_built(graph.vertex_count(), graph.edge_count());
    graph
}

fn require_start(req: &AlgorithmRequest) -> Result<VertexId> {
    req.start_id
        .ok_or_else(|| Error::ServerError("缺少 startId".to_string()))
}

/// 统一收尾：记录指标、包装响应；引擎错误映射为 400
fn respond<T: Serialize>(timer: RunTimer, result: Result<T>) -> Response {
    let metrics = metrics::global_metrics();
    match result {
        Ok(data) => {
            metrics.record_run_complete(timer, true);
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(e) => {
            metrics.record_run_complete(timer, false);
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(&e.to_string())),
            )
                .into_response()
        }
    }
}

/// Dijkstra
async fn run_dijkstra(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::Dijkstra);
    let graph = build_graph(&req.graph);

    let result = require_start(&req).and_then(|start| {
        if req.trace {
            let mut trace = StepTrace::new();
            graph
                .dijkstra_traced(start, req.end_id, &mut trace)
                .map(|r| TracedResult {
                    result: r,
                    steps: Some(trace.into_events()),
                })
        } else {
            graph.dijkstra(start, req.end_id).map(|r| TracedResult {
                result: r,
                steps: None,
            })
        }
    });

    respond(timer, result)
}

/// Bellman-Ford
async fn run_bellman_ford(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::BellmanFord);
    let graph = build_graph(&req.graph);

    let result = require_start(&req).and_then(|start| {
        if req.trace {
            let mut trace = StepTrace::new();
            graph
                .bellman_ford_traced(start, &mut trace)
                .map(|r| TracedResult {
                    result: r,
                    steps: Some(trace.into_events()),
                })
        } else {
            graph.bellman_ford(start).map(|r| TracedResult {
                result: r,
                steps: None,
            })
        }
    });

    respond(timer, result)
}

/// BFS
async fn run_bfs(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::Bfs);
    let graph = build_graph(&req.graph);

    let result = require_start(&req).and_then(|start| {
        if req.trace {
            let mut trace = StepTrace::new();
            graph.bfs_traced(start, &mut trace).map(|r| TracedResult {
                result: r,
                steps: Some(trace.into_events()),
            })
        } else {
            graph.bfs(start).map(|r| TracedResult {
                result: r,
                steps: None,
            })
        }
    });

    respond(timer, result)
}

/// DFS
async fn run_dfs(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::Dfs);
    let graph = build_graph(&req.graph);

    let result = require_start(&req).and_then(|start| {
        if req.trace {
            let mut trace = StepTrace::new();
            graph.dfs_traced(start, &mut trace).map(|r| TracedResult {
                result: r,
                steps: Some(trace.into_events()),
            })
        } else {
            graph.dfs(start).map(|r| TracedResult {
                result: r,
                steps: None,
            })
        }
    });

    respond(timer, result)
}

/// Prim（MST 路由强制无向，与前端约定一致）
async fn run_prim(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::Prim);
    let graph = build_graph_forced(&req.graph, false);

    let result = if req.trace {
        let mut trace = StepTrace::new();
        graph.prim_traced(&mut trace).map(|r| TracedResult {
            result: r,
            steps: Some(trace.into_events()),
        })
    } else {
        graph.prim().map(|r| TracedResult {
            result: r,
            steps: None,
        })
    };

    respond(timer, result)
}

/// Kruskal（MST 路由强制无向）
async fn run_kruskal(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::Kruskal);
    let graph = build_graph_forced(&req.graph, false);

    let result = if req.trace {
        let mut trace = StepTrace::new();
        graph.kruskal_traced(&mut trace).map(|r| TracedResult {
            result: r,
            steps: Some(trace.into_events()),
        })
    } else {
        graph.kruskal().map(|r| TracedResult {
            result: r,
            steps: None,
        })
    };

    respond(timer, result)
}

/// Floyd-Warshall（事件量 O(V³)，不提供追踪）
async fn run_floyd_warshall(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::FloydWarshall);
    let graph = build_graph(&req.graph);

    respond(timer, Ok(graph.floyd_warshall()))
}

/// 拓扑排序响应体
#[derive(Debug, Serialize)]
struct TopoResult {
    order: Vec<VertexId>,
}

/// 拓扑排序（路由强制有向）
async fn run_topological_sort(Json(req): Json<AlgorithmRequest>) -> Response {
    let timer = metrics::global_metrics().record_run_start(AlgorithmKind::TopologicalSort);
    let graph = build_graph_forced(&req.graph, true);

    let result = if req.trace {
        let mut trace = StepTrace::new();
        graph
            .topological_sort_traced(&mut trace)
            .map(|order| TracedResult {
                result: TopoResult { order },
                steps: Some(trace.into_events()),
            })
    } else {
        graph.topological_sort().map(|order| TracedResult {
            result: TopoResult { order },
            steps: None,
        })
    };

    respond(timer, result)
}

/// 生成随机图
async fn generate_graph(Json(config): Json<GenerateConfig>) -> Response {
    match generate::random_graph(&config) {
        Ok(doc) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({ "graph": doc }))),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(&e.to_string())),
        )
            .into_response(),
    }
}

/// 连通性校验
async fn validate_graph(Json(doc): Json<GraphDocument>) -> impl IntoResponse {
    let graph = build_graph(&doc);
    let validation = graph.connectivity();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            serde_json::json!({ "validation": validation }),
        )),
    )
}

/// API 响应
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
