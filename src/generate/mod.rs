//! 随机图生成
//!
//! 为演示生成随机图文档：字母命名、画布坐标、
//! 去重的非自环边、权重 1..=maxWeight

use crate::error::{Error, Result};
use crate::io::{EdgeRecord, EndpointRef, GraphDocument, NodeRecord};
use crate::types::VertexId;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_node_count() -> usize {
    8
}

fn default_edge_count() -> usize {
    12
}

fn default_max_weight() -> u32 {
    10
}

/// 生成参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    #[serde(default = "default_node_count")]
    pub node_count: usize,
    #[serde(default = "default_edge_count")]
    pub edge_count: usize,
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,
    #[serde(default)]
    pub directed: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            node_count: default_node_count(),
            edge_count: default_edge_count(),
            max_weight: default_max_weight(),
            directed: false,
        }
    }
}

/// 节点展示名：A、B、C……（字符码顺延，超出后退化为 N<i>）
fn letter_name(i: usize) -> String {
    match u32::try_from(65 + i).ok().and_then(char::from_u32) {
        Some(c) if c.is_alphanumeric() => c.to_string(),
        _ => format!("N{}", i),
    }
}

/// 生成随机图文档
///
/// 节点 id 为 0..nodeCount，坐标均匀落在画布范围
/// （x ∈ [100, 900)，y ∈ [100, 500)）。
/// 边去重（无向图按对称键判重）且不含自环；
/// 尝试次数上限 edgeCount * 3，达到上限后边数可能不足。
pub fn random_graph(config: &GenerateConfig) -> Result<GraphDocument> {
    if config.node_count == 0 && config.edge_count > 0 {
        return Err(Error::InvalidGenerateConfig(
            "nodeCount 为 0 时无法生成边".to_string(),
        ));
    }
    if config.max_weight == 0 {
        return Err(Error::InvalidGenerateConfig(
            "maxWeight 必须大于 0".to_string(),
        ));
    }

    let mut rng = rand::thread_rng();

    let nodes: Vec<NodeRecord> = (0..config.node_count)
        .map(|i| NodeRecord {
            id: VertexId::new(i as u64),
            name: Some(letter_name(i)),
            x: Some(rng.gen_range(100.0..900.0)),
            y: Some(rng.gen_range(100.0..500.0)),
        })
        .collect();

    let mut edges = Vec::new();
    let mut added: HashSet<(u64, u64)> = HashSet::new();
    let mut attempts = 0;
    let max_attempts = config.edge_count * 3;

    while edges.len() < config.edge_count && attempts < max_attempts {
        attempts += 1;

        let from = rng.gen_range(0..config.node_count) as u64;
        let to = rng.gen_range(0..config.node_count) as u64;
        if from == to {
            continue;
        }

        // 无向图 0-1 与 1-0 视为同一条边
        let key = if config.directed || from < to {
            (from, to)
        } else {
            (to, from)
        };
        if !added.insert(key) {
            continue;
        }

        edges.push(EdgeRecord {
            from: EndpointRef::Id(VertexId::new(from)),
            to: EndpointRef::Id(VertexId::new(to)),
            weight: rng.gen_range(1..=config.max_weight) as f64,
        });
    }

    Ok(GraphDocument {
        directed: config.directed,
        nodes,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_and_names() {
        let config = GenerateConfig {
            node_count: 5,
            edge_count: 4,
            ..Default::default()
        };
        let doc = random_graph(&config).unwrap();

        assert_eq!(doc.nodes.len(), 5);
        assert_eq!(doc.nodes[0].name.as_deref(), Some("A"));
        assert_eq!(doc.nodes[4].name.as_deref(), Some("E"));
        for node in &doc.nodes {
            let x = node.x.unwrap();
            let y = node.y.unwrap();
            assert!((100.0..900.0).contains(&x));
            assert!((100.0..500.0).contains(&y));
        }
    }

    #[test]
    fn test_edges_valid() {
        let config = GenerateConfig {
            node_count: 6,
            edge_count: 8,
            max_weight: 5,
            directed: false,
        };
        let doc = random_graph(&config).unwrap();

        let mut seen = HashSet::new();
        for edge in &doc.edges {
            let from = edge.from.id().as_u64();
            let to = edge.to.id().as_u64();
            // 无自环
            assert_ne!(from, to);
            // 无重复（对称判重）
            let key = if from < to { (from, to) } else { (to, from) };
            assert!(seen.insert(key));
            // 权重范围
            assert!((1.0..=5.0).contains(&edge.weight));
        }
    }

    #[test]
    fn test_generated_graph_runs_algorithms() {
        let doc = random_graph(&GenerateConfig::default()).unwrap();
        let g = doc.to_graph();

        // 生成的文档能直接喂给引擎
        let start = g.first_vertex_id().unwrap();
        assert!(g.bfs(start).is_ok());
        assert!(g.kruskal().is_ok());
    }

    #[test]
    fn test_zero_nodes_with_edges_rejected() {
        let config = GenerateConfig {
            node_count: 0,
            edge_count: 3,
            ..Default::default()
        };
        assert!(matches!(
            random_graph(&config),
            Err(Error::InvalidGenerateConfig(_))
        ));
    }

    #[test]
    fn test_empty_config_ok() {
        let config = GenerateConfig {
            node_count: 0,
            edge_count: 0,
            ..Default::default()
        };
        let doc = random_graph(&config).unwrap();
        assert!(doc.nodes.is_empty());
        assert!(doc.edges.is_empty());
    }
}
