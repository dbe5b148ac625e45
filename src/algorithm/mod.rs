//! 图算法模块
//!
//! 包含遍历、最短路径和连通性分析

mod analysis;
mod path;
mod traversal;

pub use analysis::{Connectivity, GraphStats};
pub use path::{PathFinder, PathResult};
pub use traversal::Traversal;
