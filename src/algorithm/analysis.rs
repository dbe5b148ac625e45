//! 连通性分析
//!
//! 边计数、连通分量和环检测。所有统计只针对图的成员顶点。

use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// 图统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// 成员顶点数
    pub vertices: usize,
    /// 边数
    pub edges: usize,
    /// 连通分量数
    pub components: usize,
    /// 是否存在环
    pub has_cycle: bool,
}

/// 连通性分析器
pub struct Connectivity<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> Connectivity<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }

    /// 边数
    ///
    /// 成员邻接集合大小之和除以 2。自环只在自身的邻接集合中出现一次，
    /// 单独计为一条完整的边。
    pub fn edge_count(&self) -> usize {
        let mut relations = 0usize;
        let mut self_loops = 0usize;

        for id in self.graph.vertices() {
            let Some(vertex) = self.graph.vertex(id) else {
                continue;
            };
            if vertex.has_self_loop() {
                self_loops += 1;
                relations += vertex.degree() - 1;
            } else {
                relations += vertex.degree();
            }
        }

        relations / 2 + self_loops
    }

    /// 连通分量数，孤立顶点单独成为一个分量
    pub fn component_count(&self) -> usize {
        self.components().len()
    }

    /// 各连通分量的成员
    ///
    /// 种子按成员加入顺序选取，分量内顶点按发现顺序排列。
    /// 洪泛只经过尚未访问的成员顶点。
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut not_visited: HashSet<VertexId> = self.graph.vertices().collect();
        let mut components = Vec::new();

        for seed in self.graph.vertices() {
            if !not_visited.remove(&seed) {
                continue;
            }

            let mut component = vec![seed];
            let mut stack = vec![seed];
            while let Some(current) = stack.pop() {
                let Some(vertex) = self.graph.vertex(current) else {
                    continue;
                };
                for neighbor in vertex.adjacent() {
                    if not_visited.remove(&neighbor) {
                        component.push(neighbor);
                        stack.push(neighbor);
                    }
                }
            }

            trace!(%seed, size = component.len(), "发现连通分量");
            components.push(component);
        }

        components
    }

    /// 是否存在环
    ///
    /// 森林满足 E == V - C，因此 E > V - C 时必然有环。
    pub fn has_cycle(&self) -> bool {
        Self::exceeds_forest(
            self.edge_count(),
            self.graph.vertex_count(),
            self.component_count(),
        )
    }

    /// 汇总统计，连通分量只计算一次
    pub fn stats(&self) -> GraphStats {
        let vertices = self.graph.vertex_count();
        let edges = self.edge_count();
        let components = self.component_count();

        GraphStats {
            vertices,
            edges,
            components,
            has_cycle: Self::exceeds_forest(edges, vertices, components),
        }
    }

    fn exceeds_forest(edges: usize, vertices: usize, components: usize) -> bool {
        edges > vertices.saturating_sub(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph<&'static str>, [VertexId; 3]) {
        let mut graph = Graph::new();
        let a = graph.insert("a");
        let b = graph.insert("b");
        let c = graph.insert("c");
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph.add_edge(c, a).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn test_triangle() {
        let (graph, _) = triangle();
        let analysis = Connectivity::new(&graph);

        assert_eq!(analysis.edge_count(), 3);
        assert_eq!(analysis.component_count(), 1);
        assert!(analysis.has_cycle());
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<()> = Graph::new();
        let analysis = Connectivity::new(&graph);

        assert_eq!(analysis.edge_count(), 0);
        assert_eq!(analysis.component_count(), 0);
        assert!(!analysis.has_cycle());
    }

    #[test]
    fn test_components_follow_insertion_order() {
        let mut graph = Graph::new();
        let ids: Vec<VertexId> = (0..5).map(|n| graph.insert(n)).collect();
        graph.add_edge(ids[3], ids[1]).unwrap();
        graph.add_edge(ids[0], ids[4]).unwrap();

        let components = Connectivity::new(&graph).components();
        assert_eq!(
            components,
            vec![vec![ids[0], ids[4]], vec![ids[1], ids[3]], vec![ids[2]]]
        );
    }

    #[test]
    fn test_self_loop_counts_as_one_edge() {
        let mut graph = Graph::new();
        let a = graph.insert(1);
        graph.add_edge(a, a).unwrap();

        let analysis = Connectivity::new(&graph);
        assert_eq!(analysis.edge_count(), 1);
        assert_eq!(analysis.component_count(), 1);
        assert!(analysis.has_cycle());
    }

    #[test]
    fn test_non_members_are_not_counted() {
        let mut graph = Graph::new();
        let a = graph.insert(1);
        let b = graph.insert(2);
        let outsider = graph.create_vertex(3);
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, outsider).unwrap();
        graph.add_edge(outsider, a).unwrap();

        let stats = Connectivity::new(&graph).stats();
        // a: {b, outsider}, b: {a, outsider} => 4 / 2
        assert_eq!(stats.edges, 2);
        assert_eq!(stats.vertices, 2);
        assert_eq!(stats.components, 1);
        assert!(stats.has_cycle);
    }

    #[test]
    fn test_stats_matches_individual_queries() {
        let (graph, [a, _, c]) = triangle();
        let mut graph = graph;
        graph.remove_edge(a, c).unwrap();

        let analysis = Connectivity::new(&graph);
        let stats = analysis.stats();
        assert_eq!(stats.edges, analysis.edge_count());
        assert_eq!(stats.components, analysis.component_count());
        assert_eq!(stats.has_cycle, analysis.has_cycle());
        assert!(!stats.has_cycle);
    }
}
