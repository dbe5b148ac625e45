//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use crate::algorithm::GraphStats;
use prettytable::{format, row, Table};
use serde::Serialize;

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 表格模式
    #[default]
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
#[derive(Debug, Default)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 设置输出格式
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 打印统计信息
    pub fn print_stats(&self, stats: &GraphStats) -> String {
        match self.format {
            OutputFormat::Json => Self::to_json(stats),
            OutputFormat::Table => {
                let has_cycle = if stats.has_cycle { "是" } else { "否" };
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["指标", "值"]);
                table.add_row(row!["顶点数", stats.vertices]);
                table.add_row(row!["边数", stats.edges]);
                table.add_row(row!["连通分量", stats.components]);
                table.add_row(row!["存在环", has_cycle]);
                table.to_string()
            }
        }
    }

    /// 打印连通分量
    pub fn print_components(&self, components: &[Vec<String>]) -> String {
        match self.format {
            OutputFormat::Json => Self::to_json(&components),
            OutputFormat::Table => {
                if components.is_empty() {
                    return "Empty set\n".to_string();
                }
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["#", "大小", "顶点"]);
                for (i, members) in components.iter().enumerate() {
                    let index = i + 1;
                    table.add_row(row![index, members.len(), members.join(", ")]);
                }
                format!("{}{} 个连通分量\n", table, components.len())
            }
        }
    }

    /// 打印顶点序列
    pub fn print_sequence(&self, values: &[String]) -> String {
        match self.format {
            OutputFormat::Json => Self::to_json(&values),
            OutputFormat::Table => values.join(" -> "),
        }
    }

    fn to_json<S: Serialize + ?Sized>(value: &S) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("序列化失败: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> GraphStats {
        GraphStats {
            vertices: 3,
            edges: 2,
            components: 1,
            has_cycle: false,
        }
    }

    #[test]
    fn test_print_stats_json() {
        let printer = Printer::new(OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&printer.print_stats(&stats())).unwrap();

        assert_eq!(json["vertices"], 3);
        assert_eq!(json["edges"], 2);
        assert_eq!(json["has_cycle"], false);
    }

    #[test]
    fn test_print_stats_table() {
        let output = Printer::default().print_stats(&stats());
        assert!(output.contains("边数"));
        assert!(output.contains('2'));
    }

    #[test]
    fn test_print_sequence() {
        let values = vec!["a".to_string(), "b".to_string()];

        assert_eq!(Printer::default().print_sequence(&values), "a -> b");
        assert_eq!(
            Printer::new(OutputFormat::Json).print_sequence(&values),
            "[\n  \"a\",\n  \"b\"\n]"
        );
    }

    #[test]
    fn test_print_empty_components() {
        assert_eq!(Printer::default().print_components(&[]), "Empty set\n");
    }
}
