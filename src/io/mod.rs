//! 图文档导入导出
//!
//! 前端交换的 JSON 文档形态：`{ directed, nodes, edges }`。
//! 边端点兼容裸 ID 与内嵌节点对象两种写法（前端两种都会发）。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{VertexData, VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// 节点记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: VertexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// 边端点引用：裸 ID 或内嵌节点对象
///
/// 导出时一律写裸 ID。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointRef {
    Id(VertexId),
    Node { id: VertexId },
}

impl EndpointRef {
    /// 端点的顶点 ID
    pub fn id(&self) -> VertexId {
        match self {
            EndpointRef::Id(id) => *id,
            EndpointRef::Node { id } => *id,
        }
    }
}

fn default_weight() -> Weight {
    1.0
}

/// 边记录；权重缺省为 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: EndpointRef,
    pub to: EndpointRef,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

/// 图文档
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// 按文档内容构建图：先按序加节点，再按序加边
    pub fn to_graph(&self) -> Graph {
        self.to_graph_with_direction(self.directed)
    }

    /// 构建图但强制指定方向性（MST 路由强制无向、
    /// 拓扑排序路由强制有向时使用）
    pub fn to_graph_with_direction(&self, directed: bool) -> Graph {
        let mut graph = Graph::new(directed);
        for node in &self.nodes {
            graph.add_vertex(
                node.id,
                VertexData {
                    name: node.name.clone(),
                    x: node.x,
                    y: node.y,
                },
            );
        }
        for edge in &self.edges {
            graph.add_edge(edge.from.id(), edge.to.id(), edge.weight);
        }
        graph
    }

    /// 从图导出文档
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            nodes: graph
                .vertices()
                .map(|v| NodeRecord {
                    id: v.id(),
                    name: v.data().name.clone(),
                    x: v.data().x,
                    y: v.data().y,
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeRecord {
                    from: EndpointRef::Id(e.from),
                    to: EndpointRef::Id(e.to),
                    weight: e.weight,
                })
                .collect(),
        }
    }

    /// 从 JSON 文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| Error::ImportError(format!("JSON 解析错误: {}", e)))
    }

    /// 保存为 JSON 文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| Error::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn id(n: u64) -> VertexId {
        VertexId::new(n)
    }

    #[test]
    fn test_to_graph() {
        let doc: GraphDocument = serde_json::from_str(
            r#"{
                "directed": false,
                "nodes": [
                    {"id": 0, "name": "A", "x": 120.0, "y": 200.0},
                    {"id": 1, "name": "B"}
                ],
                "edges": [
                    {"from": 0, "to": 1, "weight": 4}
                ]
            }"#,
        )
        .unwrap();

        let g = doc.to_graph();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex(id(0)).unwrap().data().name.as_deref(), Some("A"));
        assert_eq!(g.edges()[0].weight, 4.0);
    }

    #[test]
    fn test_embedded_node_endpoints() {
        // 前端会把整个节点对象塞进边的端点里
        let doc: GraphDocument = serde_json::from_str(
            r#"{
                "nodes": [{"id": 0}, {"id": 1}],
                "edges": [
                    {"from": {"id": 0, "name": "A", "x": 1.0, "y": 2.0},
                     "to": {"id": 1, "name": "B"},
                     "weight": 2}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.edges[0].from.id(), id(0));
        assert_eq!(doc.edges[0].to.id(), id(1));
    }

    #[test]
    fn test_weight_defaults_to_one() {
        let doc: GraphDocument = serde_json::from_str(
            r#"{"nodes": [{"id": 0}, {"id": 1}], "edges": [{"from": 0, "to": 1}]}"#,
        )
        .unwrap();
        assert_eq!(doc.edges[0].weight, 1.0);
    }

    #[test]
    fn test_file_round_trip() {
        let mut g = Graph::directed();
        g.add_vertex(id(1), VertexData::with_position("A", 100.0, 200.0));
        g.add_vertex(id(2), VertexData::named("B"));
        g.add_edge(id(1), id(2), 3.5);

        let doc = GraphDocument::from_graph(&g);
        let file = NamedTempFile::new().unwrap();
        doc.save(file.path()).unwrap();

        let restored = GraphDocument::load(file.path()).unwrap();
        let g2 = restored.to_graph();

        assert!(g2.is_directed());
        assert_eq!(g2.vertex_count(), 2);
        assert_eq!(g2.edge_count(), 1);
        assert_eq!(g2.edges()[0].weight, 3.5);
        assert_eq!(
            g2.vertex(id(1)).unwrap().data(),
            g.vertex(id(1)).unwrap().data()
        );
    }

    #[test]
    fn test_load_invalid_json() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "not json").unwrap();
        assert!(matches!(
            GraphDocument::load(file.path()),
            Err(Error::ImportError(_))
        ));
    }
}
