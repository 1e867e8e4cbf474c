//! AlgoLab 服务器入口
//!
//! 启动 HTTP API 服务器

use algolab::server::{start_server, ServerConfig};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "algolab-server")]
#[command(about = "AlgoLab HTTP API 服务器")]
struct Args {
    /// 监听地址
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// 监听端口
    #[arg(short, long, default_value = "3001")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    println!("AlgoLab - 图算法引擎");
    println!("====================");
    println!("版本: {}", algolab::VERSION);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    start_server(config).await?;

    Ok(())
}
