//! 最短路径
//!
//! 无权图上按边数计算的最短路径，基于 BFS。
//! 前驱表只存在于单次调用中，顶点本身不保存任何搜索状态。

use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::trace;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列，首尾分别为起点和终点
    pub vertices: Vec<VertexId>,
    /// 路径长度（边数）
    pub length: usize,
}

impl PathResult {
    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            length: 0,
        }
    }
}

/// 路径查找器
pub struct PathFinder<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> PathFinder<'g, T> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }

    /// BFS 最短路径查找
    ///
    /// 终点出队时立即返回；队列耗尽仍未出队则返回 `None`。
    /// 起点与终点相同时返回只含起点的路径。
    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Result<Option<PathResult>> {
        self.graph.member(source)?;
        self.graph.member(target)?;

        let mut queue = VecDeque::from([source]);
        let mut visited = HashSet::from([source]);
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();

        while let Some(current) = queue.pop_front() {
            if current == target {
                let path = Self::reconstruct_path(source, target, &parent);
                trace!(%source, %target, length = path.length, "找到最短路径");
                return Ok(Some(path));
            }

            let adjacent = self.graph.vertex(current).into_iter().flat_map(Vertex::adjacent);
            for neighbor in adjacent {
                if visited.insert(neighbor) {
                    parent.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        trace!(%source, %target, "不可达");
        Ok(None)
    }

    /// 从终点沿前驱回溯到起点
    fn reconstruct_path(
        source: VertexId,
        target: VertexId,
        parent: &HashMap<VertexId, VertexId>,
    ) -> PathResult {
        if source == target {
            return PathResult::with_start(source);
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(&prev) = parent.get(&current) {
            vertices.push(prev);
            current = prev;
        }
        vertices.reverse();

        PathResult {
            length: vertices.len() - 1,
            vertices,
        }
    }
}
