//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 句柄不是由该图分配的
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    /// 顶点存在但不属于图的成员集合
    #[error("顶点不在图中: {0}")]
    VertexNotInGraph(VertexId),

    #[error("不允许自环: {0}")]
    SelfLoopRejected(VertexId),

    #[error("无效的命令: {0}")]
    InvalidCommand(String),
}
