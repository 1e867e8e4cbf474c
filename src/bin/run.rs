//! AlgoLab 命令行运行器
//!
//! 从 JSON 文件加载图文档，运行一个算法，结果以 JSON 打印到标准输出

use algolab::algorithm::StepTrace;
use algolab::io::GraphDocument;
use algolab::types::VertexId;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "algolab-run")]
#[command(about = "AlgoLab 图算法运行器")]
struct Args {
    /// 图文档 JSON 文件
    #[arg(short, long)]
    input: PathBuf,

    /// 算法名称（dijkstra | bellman-ford | bfs | dfs | prim |
    /// kruskal | floyd-warshall | topological-sort）
    #[arg(short, long)]
    algorithm: String,

    /// 起点 ID（遍历与单源最短路径必填）
    #[arg(short, long)]
    start: Option<u64>,

    /// 终点 ID（仅 dijkstra）
    #[arg(short, long)]
    end: Option<u64>,

    /// 随结果输出步骤追踪
    #[arg(long)]
    trace: bool,
}

fn require_start(args: &Args) -> Result<VertexId> {
    args.start
        .map(VertexId::new)
        .context("该算法需要 --start <顶点ID>")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let doc = GraphDocument::load(&args.input)
        .with_context(|| format!("无法加载图文档 {}", args.input.display()))?;
    let graph = doc.to_graph();

    let mut steps = StepTrace::new();
    let result = match args.algorithm.as_str() {
        "dijkstra" => serde_json::to_value(graph.dijkstra_traced(
            require_start(&args)?,
            args.end.map(VertexId::new),
            &mut steps,
        )?)?,
        "bellman-ford" => {
            serde_json::to_value(graph.bellman_ford_traced(require_start(&args)?, &mut steps)?)?
        }
        "bfs" => serde_json::to_value(graph.bfs_traced(require_start(&args)?, &mut steps)?)?,
        "dfs" => serde_json::to_value(graph.dfs_traced(require_start(&args)?, &mut steps)?)?,
        "prim" => serde_json::to_value(graph.prim_traced(&mut steps)?)?,
        "kruskal" => serde_json::to_value(graph.kruskal_traced(&mut steps)?)?,
        "floyd-warshall" => serde_json::to_value(graph.floyd_warshall())?,
        "topological-sort" => {
            serde_json::json!({ "order": graph.topological_sort_traced(&mut steps)? })
        }
        other => bail!("未知算法: {}", other),
    };

    let output = if args.trace {
        serde_json::json!({ "result": result, "steps": steps.into_events() })
    } else {
        serde_json::json!({ "result": result })
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
