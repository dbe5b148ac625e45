//! 遍历算法
//!
//! 显式栈的深度优先遍历和 FIFO 队列的广度优先遍历。
//! 两者都在入栈/入队时标记已访问，因此每个可达顶点恰好输出一次。

use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId};
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// 遍历器
pub struct Traversal<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> Traversal<'g, T> {
    /// 创建遍历器
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }

    /// 深度优先遍历
    ///
    /// 返回出栈顺序。同一顶点的邻居按邻接插入顺序入栈，
    /// 因此后插入的邻居先被访问。
    pub fn dfs(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.graph.member(start)?;

        let mut stack = vec![start];
        let mut visited = HashSet::from([start]);
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            order.push(current);
            for neighbor in self.adjacent(current) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        trace!(%start, visited = order.len(), "dfs 完成");
        Ok(order)
    }

    /// 广度优先遍历
    ///
    /// 返回出队顺序，距离起点近的顶点总是排在前面。
    pub fn bfs(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.graph.member(start)?;

        let mut queue = VecDeque::from([start]);
        let mut visited = HashSet::from([start]);
        let mut order = Vec::new();

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for neighbor in self.adjacent(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        trace!(%start, visited = order.len(), "bfs 完成");
        Ok(order)
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> Result<bool> {
        self.graph.member(end)?;
        Ok(self.bfs(start)?.contains(&end))
    }

    /// 获取恰好 n 跳的邻居，按发现顺序排列
    pub fn n_hop_neighbors(&self, start: VertexId, n: usize) -> Result<Vec<VertexId>> {
        self.graph.member(start)?;

        let mut current_level = vec![start];
        let mut visited = HashSet::from([start]);

        for _ in 0..n {
            let mut next_level = Vec::new();
            for &vertex in &current_level {
                for neighbor in self.adjacent(vertex) {
                    if visited.insert(neighbor) {
                        next_level.push(neighbor);
                    }
                }
            }
            if next_level.is_empty() {
                return Ok(next_level);
            }
            current_level = next_level;
        }

        Ok(current_level)
    }

    fn adjacent(&self, id: VertexId) -> impl Iterator<Item = VertexId> + 'g {
        self.graph.vertex(id).into_iter().flat_map(Vertex::adjacent)
    }
}
