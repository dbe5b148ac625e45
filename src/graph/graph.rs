//! 图数据结构
//!
//! 顶点集中存放在图持有的 arena 中，邻接关系只保存顶点 ID。
//! arena 中的顶点不一定是图的成员：`create_vertex` 只分配顶点，
//! `add_vertex` 才把它加入成员集合 `nodes`。

use super::vertex::{Vertex, VertexId};
use crate::algorithm::{Connectivity, GraphStats, PathFinder, Traversal};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 多读单写共享的图
///
/// 图本身不加锁，需要跨线程访问时由调用方通过该别名串行化写操作。
pub type SharedGraph<T> = Arc<RwLock<Graph<T>>>;

/// 无向图
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 图配置
    config: GraphConfig,
    /// 顶点 arena（包含已分配但未加入图的顶点）
    vertices: HashMap<VertexId, Vertex<T>>,
    /// 成员顶点，按加入顺序迭代
    nodes: IndexSet<VertexId>,
    /// 下一个顶点 ID
    next_vertex_id: u64,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 使用指定配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: HashMap::new(),
            nodes: IndexSet::new(),
            next_vertex_id: 1,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// 转换为可跨线程共享的图
    pub fn into_shared(self) -> SharedGraph<T> {
        Arc::new(RwLock::new(self))
    }

    // ==================== 顶点操作 ====================

    /// 分配一个顶点但不加入图
    pub fn create_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex::new(id, value));
        id
    }

    /// 分配顶点并加入图
    pub fn insert(&mut self, value: T) -> VertexId {
        let id = self.create_vertex(value);
        self.nodes.insert(id);
        id
    }

    /// 把顶点加入图，已是成员时无操作
    pub fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        self.vertex_ref(id)?;
        if self.nodes.insert(id) {
            debug!(vertex = %id, "顶点已加入图");
        }
        Ok(())
    }

    /// 批量加入顶点
    ///
    /// 先校验全部 ID，任何一个无效时不做任何修改。
    pub fn add_vertices<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let ids: Vec<VertexId> = ids.into_iter().collect();
        for &id in &ids {
            self.vertex_ref(id)?;
        }
        self.nodes.extend(ids);
        Ok(())
    }

    /// 从图中移除顶点
    ///
    /// 先从所有成员的邻接集合中删除该顶点，再把它移出成员集合。
    /// 被移除顶点自身的邻接集合保持不变，顶点仍留在 arena 中，可以重新加入。
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        self.vertex_ref(id)?;

        let mut scrubbed = 0usize;
        for node in &self.nodes {
            if let Some(vertex) = self.vertices.get_mut(node) {
                if vertex.unlink(id) {
                    scrubbed += 1;
                }
            }
        }
        self.nodes.shift_remove(&id);

        debug!(vertex = %id, scrubbed, "顶点已移出图");
        Ok(())
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(&id)
    }

    /// 获取可变顶点
    ///
    /// 只暴露负载值的修改，邻接关系必须通过边操作维护。
    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut T> {
        self.vertices.get_mut(&id).map(Vertex::value_mut)
    }

    /// 获取顶点负载值
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertices.get(&id).map(Vertex::value)
    }

    /// 顶点是否为图的成员
    pub fn contains(&self, id: VertexId) -> bool {
        self.nodes.contains(&id)
    }

    /// 成员顶点数量
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 按加入顺序迭代成员顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.iter().copied()
    }

    // ==================== 边操作 ====================

    /// 添加无向边，两端不要求已是图成员
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<()> {
        self.vertex_ref(v1)?;
        self.vertex_ref(v2)?;
        if v1 == v2 && !self.config.allows_self_loops() {
            return Err(Error::SelfLoopRejected(v1));
        }

        let added = self.link(v1, v2);
        self.link(v2, v1);

        if added {
            debug!(%v1, %v2, "边已添加");
        }
        Ok(())
    }

    /// 删除无向边，边不存在时无操作
    pub fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<()> {
        self.vertex_ref(v1)?;
        self.vertex_ref(v2)?;

        let removed = self.unlink(v1, v2);
        self.unlink(v2, v1);

        if removed {
            debug!(%v1, %v2, "边已删除");
        }
        Ok(())
    }

    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        self.vertices
            .get(&v1)
            .map(|v| v.is_adjacent(v2))
            .unwrap_or(false)
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居（按邻接插入顺序）
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.vertices
            .get(&id)
            .map(|v| v.adjacent().collect())
            .unwrap_or_default()
    }

    /// 获取顶点的度（邻接集合大小）
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices.get(&id).map(Vertex::degree).unwrap_or(0)
    }

    // ==================== 分析操作 ====================

    /// 边数
    pub fn num_edges(&self) -> usize {
        Connectivity::new(self).edge_count()
    }

    /// 连通分量数
    pub fn num_connected_components(&self) -> usize {
        Connectivity::new(self).component_count()
    }

    /// 各连通分量的成员，分量按种子顶点的加入顺序排列
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        Connectivity::new(self).components()
    }

    /// 是否存在环
    pub fn has_cycle(&self) -> bool {
        Connectivity::new(self).has_cycle()
    }

    /// 汇总统计
    pub fn stats(&self) -> GraphStats {
        Connectivity::new(self).stats()
    }

    // ==================== 内部辅助 ====================

    pub(crate) fn vertex_ref(&self, id: VertexId) -> Result<&Vertex<T>> {
        self.vertices.get(&id).ok_or(Error::VertexNotFound(id))
    }

    /// 获取成员顶点，用于校验算法入口参数
    pub(crate) fn member(&self, id: VertexId) -> Result<&Vertex<T>> {
        let vertex = self.vertex_ref(id)?;
        if !self.nodes.contains(&id) {
            return Err(Error::VertexNotInGraph(id));
        }
        Ok(vertex)
    }

    fn link(&mut self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get_mut(&from)
            .map(|v| v.link(to))
            .unwrap_or(false)
    }

    fn unlink(&mut self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get_mut(&from)
            .map(|v| v.unlink(to))
            .unwrap_or(false)
    }
}

impl<T: Clone> Graph<T> {
    /// 深度优先遍历，返回按出栈顺序排列的负载值
    pub fn depth_first_search(&self, start: VertexId) -> Result<Vec<T>> {
        let order = Traversal::new(self).dfs(start)?;
        Ok(self.values_of(&order))
    }

    /// 广度优先遍历，返回按出队顺序排列的负载值
    pub fn breadth_first_search(&self, start: VertexId) -> Result<Vec<T>> {
        let order = Traversal::new(self).bfs(start)?;
        Ok(self.values_of(&order))
    }

    /// 按边数计算的最短路径
    ///
    /// 不可达时返回 `Ok(None)`；起点或终点无效时返回错误。
    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Result<Option<Vec<T>>> {
        let path = PathFinder::new(self).shortest_path(source, target)?;
        Ok(path.map(|p| self.values_of(&p.vertices)))
    }

    fn values_of(&self, ids: &[VertexId]) -> Vec<T> {
        ids.iter()
            .filter_map(|&id| self.value(id).cloned())
            .collect()
    }
}
