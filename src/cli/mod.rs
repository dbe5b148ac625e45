//! 交互式命令行
//!
//! 以顶点名操作 `Graph<String>`，供 `undigraph-cli` 使用

mod commands;
mod printer;

pub use commands::{help_text, CommandResult, Session};
pub use printer::{OutputFormat, Printer};
