//! undigraph - 内存无向图
//!
//! 提供顶点/边的增删以及经典图算法：
//! - 深度优先 / 广度优先遍历
//! - 按边数计算的最短路径
//! - 边计数、连通分量计数与环检测

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{Connectivity, GraphStats, PathFinder, PathResult, Traversal};
pub use config::{GraphConfig, SelfLoopPolicy};
pub use error::{Error, Result};
pub use graph::{Graph, SharedGraph, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
