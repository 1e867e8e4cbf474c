//! 全源最短路径
//!
//! Floyd-Warshall，O(|V|³)。容忍负权边；不检测负权环
//! （负权环下矩阵无意义，需要检测请用 Bellman-Ford）。

use crate::graph::Graph;
use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// 全源最短路径结果
///
/// 矩阵按 `order`（顶点插入顺序）索引；`next[i][j]` 是 i→j
/// 最短路径上 i 的下一跳，而非终点本身。不可达为 +∞ / None。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllPairs {
    /// 矩阵下标对应的顶点 ID（插入顺序）
    pub order: Vec<VertexId>,
    /// 距离矩阵，对角线为 0
    pub dist: Vec<Vec<Weight>>,
    /// 下一跳矩阵，用于路径重建
    pub next: Vec<Vec<Option<VertexId>>>,
}

impl AllPairs {
    fn position(&self, id: VertexId) -> Option<usize> {
        self.order.iter().position(|v| *v == id)
    }

    /// 按顶点 ID 查询距离；顶点不在图中返回 None
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Some(self.dist[i][j])
    }

    /// 沿下一跳矩阵重建 from→to 的路径；不可达返回 None
    pub fn path(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        if from == to {
            return Some(vec![from]);
        }
        self.next[i][j]?;

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            let ci = self.position(current)?;
            current = self.next[ci][j]?;
            path.push(current);
        }
        Some(path)
    }
}

impl Graph {
    /// Floyd-Warshall 全源最短路径
    ///
    /// 边表播种时取重复边的最小权重（与其他算法对重复边的
    /// 处理一致）；无向图双向播种。空图返回空矩阵。
    pub fn floyd_warshall(&self) -> AllPairs {
        let order: Vec<VertexId> = self.vertex_ids().collect();
        let n = order.len();
        let index = |id: VertexId| order.iter().position(|v| *v == id).unwrap();

        let mut dist = vec![vec![Weight::INFINITY; n]; n];
        let mut next: Vec<Vec<Option<VertexId>>> = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }

        for edge in self.edges() {
            let (i, j) = (index(edge.from), index(edge.to));
            if edge.weight < dist[i][j] {
                dist[i][j] = edge.weight;
                next[i][j] = Some(edge.to);
            }
            if !self.is_directed() && edge.weight < dist[j][i] {
                dist[j][i] = edge.weight;
                next[j][i] = Some(edge.from);
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let alt = dist[i][k] + dist[k][j];
                    if alt < dist[i][j] {
                        dist[i][j] = alt;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        AllPairs { order, dist, next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> VertexId {
        VertexId::new(n)
    }

    fn weighted_graph() -> Graph {
        let mut g = Graph::undirected();
        g.add_edge(id(1), id(2), 4.0);
        g.add_edge(id(1), id(3), 1.0);
        g.add_edge(id(3), id(2), 2.0);
        g.add_edge(id(2), id(4), 5.0);
        g.add_edge(id(3), id(4), 8.0);
        g
    }

    #[test]
    fn test_matches_dijkstra_per_pair() {
        // 非负权图上 dist[i][j] 与 Dijkstra 逐对一致
        let g = weighted_graph();
        let ap = g.floyd_warshall();

        for i in g.vertex_ids() {
            let sp = g.dijkstra(i, None).unwrap();
            for j in g.vertex_ids() {
                assert_eq!(
                    ap.distance(i, j).unwrap(),
                    sp.distances[&j],
                    "pair {} -> {}",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_diagonal_zero() {
        let g = weighted_graph();
        let ap = g.floyd_warshall();
        for v in g.vertex_ids() {
            assert_eq!(ap.distance(v, v), Some(0.0));
        }
    }

    #[test]
    fn test_path_reconstruction() {
        let g = weighted_graph();
        let ap = g.floyd_warshall();

        // 1 -> 4 的最短路径经 3、2
        assert_eq!(
            ap.path(id(1), id(4)).unwrap(),
            vec![id(1), id(3), id(2), id(4)]
        );
        assert_eq!(ap.path(id(1), id(1)).unwrap(), vec![id(1)]);
    }

    #[test]
    fn test_directed_asymmetry() {
        let mut g = Graph::directed();
        g.add_edge(id(1), id(2), 3.0);

        let ap = g.floyd_warshall();
        assert_eq!(ap.distance(id(1), id(2)), Some(3.0));
        assert!(ap.distance(id(2), id(1)).unwrap().is_infinite());
        assert_eq!(ap.path(id(2), id(1)), None);
    }

    #[test]
    fn test_negative_edge_tolerated() {
        let mut g = Graph::directed();
        g.add_edge(id(1), id(2), 4.0);
        g.add_edge(id(1), id(3), 1.0);
        g.add_edge(id(3), id(2), -2.0);

        let ap = g.floyd_warshall();
        assert_eq!(ap.distance(id(1), id(2)), Some(-1.0));
    }

    #[test]
    fn test_duplicate_edges_take_min() {
        let mut g = Graph::directed();
        g.add_edge(id(1), id(2), 5.0);
        g.add_edge(id(1), id(2), 2.0);

        let ap = g.floyd_warshall();
        assert_eq!(ap.distance(id(1), id(2)), Some(2.0));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::undirected();
        let ap = g.floyd_warshall();
        assert!(ap.order.is_empty());
        assert!(ap.dist.is_empty());
    }
}
