//! 顶点定义
//!
//! 顶点只保存负载值和邻接集合，不包含任何算法逻辑

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一）
///
/// 顶点以 ID 区分身份：两个负载相等的顶点依然是不同的顶点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    /// 顶点 ID
    id: VertexId,
    /// 负载值，图不解释其内容
    value: T,
    /// 邻接顶点，按插入顺序迭代
    adjacent: IndexSet<VertexId>,
}

impl<T> Vertex<T> {
    /// 创建孤立顶点
    pub(crate) fn new(id: VertexId, value: T) -> Self {
        Self {
            id,
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取负载值
    pub fn value(&self) -> &T {
        &self.value
    }

    /// 获取可变负载值
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// 按插入顺序迭代邻接顶点
    pub fn adjacent(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent.iter().copied()
    }

    /// 邻接集合大小（自环计 1）
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    pub fn has_self_loop(&self) -> bool {
        self.adjacent.contains(&self.id)
    }

    pub(crate) fn link(&mut self, other: VertexId) -> bool {
        self.adjacent.insert(other)
    }

    /// 移除邻接关系并保留其余邻居的相对顺序
    pub(crate) fn unlink(&mut self, other: VertexId) -> bool {
        self.adjacent.shift_remove(&other)
    }
}
