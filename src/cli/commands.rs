//! 控制台命令处理
//!
//! 以名字引用顶点的交互式会话，每个名字对应一个 `Graph<String>` 中的顶点

use std::collections::HashMap;

use super::printer::{OutputFormat, Printer};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台会话
pub struct Session {
    graph: Graph<String>,
    /// 顶点名到顶点 ID 的映射
    names: HashMap<String, VertexId>,
    printer: Printer,
}

impl Session {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
            names: HashMap::new(),
            printer: Printer::default(),
        }
    }

    /// 设置输出格式
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.printer.set_format(format);
        self
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 解析并执行一条命令
    pub fn execute(&mut self, input: &str) -> CommandResult {
        match self.dispatch(input.trim()) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    /// 执行以 `;` 分隔的多条命令，遇到 quit 时停止
    pub fn execute_script(&mut self, script: &str) -> Vec<CommandResult> {
        let mut results = Vec::new();
        for line in script.split(';').map(str::trim).filter(|l| !l.is_empty()) {
            let result = self.execute(line);
            let exit = result == CommandResult::Exit;
            results.push(result);
            if exit {
                break;
            }
        }
        results
    }

    fn dispatch(&mut self, input: &str) -> Result<CommandResult> {
        let mut parts = input.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(CommandResult::Continue);
        };
        let args: Vec<&str> = parts.collect();

        let result = match cmd.to_lowercase().as_str() {
            "quit" | "exit" | "q" => CommandResult::Exit,

            "help" | "h" | "?" => CommandResult::Message(help_text().to_string()),

            "vertex" | "v" => {
                if args.is_empty() {
                    return Err(usage("vertex <名字>..."));
                }
                for name in &args {
                    self.ensure_vertex(name);
                }
                CommandResult::Message(format!("已添加 {} 个顶点", args.len()))
            }

            "edge" | "e" => {
                let [a, b] = two_args(&args, "edge <名字> <名字>")?;
                let v1 = self.ensure_vertex(a);
                let v2 = self.ensure_vertex(b);
                self.graph.add_edge(v1, v2)?;
                CommandResult::Message(format!("{} -- {}", a, b))
            }

            "unlink" => {
                let [a, b] = two_args(&args, "unlink <名字> <名字>")?;
                let (v1, v2) = (self.resolve(a)?, self.resolve(b)?);
                self.graph.remove_edge(v1, v2)?;
                CommandResult::Message(format!("{} -/- {}", a, b))
            }

            "remove" | "rm" => {
                let [name] = one_arg(&args, "remove <名字>")?;
                let id = self.resolve(name)?;
                self.graph.remove_vertex(id)?;
                CommandResult::Message(format!("已移除 {}", name))
            }

            "dfs" => {
                let [name] = one_arg(&args, "dfs <名字>")?;
                let values = self.graph.depth_first_search(self.resolve(name)?)?;
                CommandResult::Message(self.printer.print_sequence(&values))
            }

            "bfs" => {
                let [name] = one_arg(&args, "bfs <名字>")?;
                let values = self.graph.breadth_first_search(self.resolve(name)?)?;
                CommandResult::Message(self.printer.print_sequence(&values))
            }

            "path" | "shortest" => {
                let [a, b] = two_args(&args, "path <起点> <终点>")?;
                match self.graph.shortest_path(self.resolve(a)?, self.resolve(b)?)? {
                    Some(values) => CommandResult::Message(self.printer.print_sequence(&values)),
                    None => CommandResult::Message("未找到路径".to_string()),
                }
            }

            "neighbors" | "n" => {
                let [name] = one_arg(&args, "neighbors <名字>")?;
                let values = self.names_of(&self.graph.neighbors(self.resolve(name)?));
                CommandResult::Message(format!("{} 的邻居: [{}]", name, values.join(", ")))
            }

            "components" | "cc" => {
                let components: Vec<Vec<String>> = self
                    .graph
                    .connected_components()
                    .iter()
                    .map(|members| self.names_of(members))
                    .collect();
                CommandResult::Message(self.printer.print_components(&components))
            }

            "cycle" => {
                let message = if self.graph.has_cycle() { "存在环" } else { "无环" };
                CommandResult::Message(message.to_string())
            }

            "stats" | "info" => CommandResult::Message(self.printer.print_stats(&self.graph.stats())),

            "json" => {
                let format = match self.printer.format() {
                    OutputFormat::Table => OutputFormat::Json,
                    OutputFormat::Json => OutputFormat::Table,
                };
                self.printer.set_format(format);
                CommandResult::Message(format!("输出格式: {:?}", format))
            }

            other => {
                return Err(Error::InvalidCommand(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    other
                )))
            }
        };

        Ok(result)
    }

    /// 获取名字对应的成员顶点
    ///
    /// 名字未使用过或对应的顶点已被移除时，创建一个新顶点。被移除的顶点
    /// 仍保留旧的邻接关系，重新加入会破坏邻接对称性，因此不复用。
    fn ensure_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.names.get(name) {
            if self.graph.contains(id) {
                return id;
            }
        }
        let id = self.graph.insert(name.to_string());
        self.names.insert(name.to_string(), id);
        id
    }

    fn resolve(&self, name: &str) -> Result<VertexId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| Error::InvalidCommand(format!("未知顶点: {}", name)))
    }

    fn names_of(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.graph.value(id).cloned())
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

fn usage(text: &str) -> Error {
    Error::InvalidCommand(format!("用法: {}", text))
}

fn one_arg<'a>(args: &[&'a str], text: &str) -> Result<[&'a str; 1]> {
    match args {
        [a] => Ok([*a]),
        _ => Err(usage(text)),
    }
}

fn two_args<'a>(args: &[&'a str], text: &str) -> Result<[&'a str; 2]> {
    match args {
        [a, b] => Ok([*a, *b]),
        _ => Err(usage(text)),
    }
}

/// 帮助文本
pub fn help_text() -> &'static str {
    "
基础命令:
  help, h, ?              显示帮助
  quit, exit, q           退出程序
  stats, info             显示图统计信息
  json                    切换表格 / JSON 输出

图操作:
  vertex, v <名字>...     添加顶点（已移除的名字会创建新顶点）
  edge, e <a> <b>         添加无向边，顶点不存在时自动创建
  unlink <a> <b>          删除边
  remove, rm <名字>       移除顶点及所有指向它的边

分析:
  dfs <名字>              深度优先遍历
  bfs <名字>              广度优先遍历
  path <起点> <终点>      按边数的最短路径
  neighbors, n <名字>     查看邻居
  components, cc          列出连通分量
  cycle                   检测是否存在环
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelfLoopPolicy;

    fn message(result: CommandResult) -> String {
        match result {
            CommandResult::Message(m) => m,
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_path_graph_session() {
        let mut session = Session::default();
        session.execute_script("edge a b; edge b c");

        assert_eq!(message(session.execute("path a c")), "a -> b -> c");
        assert_eq!(message(session.execute("bfs a")), "a -> b -> c");
        assert_eq!(message(session.execute("cycle")), "无环");
        assert_eq!(session.graph().num_edges(), 2);
    }

    #[test]
    fn test_remove_and_readd() {
        let mut session = Session::default();
        session.execute_script("edge a b; edge b c; edge c a");
        assert_eq!(message(session.execute("cycle")), "存在环");

        session.execute("rm b");
        assert_eq!(session.graph().vertex_count(), 2);
        assert_eq!(session.graph().num_edges(), 1);

        session.execute("v b");
        assert_eq!(session.graph().vertex_count(), 3);
        assert_eq!(message(session.execute("n b")), "b 的邻居: []");
        assert_eq!(message(session.execute("n a")), "a 的邻居: [c]");
        assert_eq!(session.graph().num_edges(), 1);
        assert_eq!(session.graph().num_connected_components(), 2);
    }

    #[test]
    fn test_unreachable_path() {
        let mut session = Session::default();
        session.execute_script("e a b; e c d");

        assert_eq!(message(session.execute("path a d")), "未找到路径");
        assert_eq!(session.graph().num_connected_components(), 2);
    }

    #[test]
    fn test_errors() {
        let mut session = Session::new(GraphConfig::new().with_self_loops(SelfLoopPolicy::Reject));

        assert!(matches!(session.execute("dfs nobody"), CommandResult::Error(_)));
        assert!(matches!(session.execute("edge a"), CommandResult::Error(_)));
        assert!(matches!(session.execute("frobnicate"), CommandResult::Error(_)));
        assert!(matches!(session.execute("edge a a"), CommandResult::Error(_)));
        assert_eq!(session.execute("   "), CommandResult::Continue);
    }

    #[test]
    fn test_script_stops_at_quit() {
        let mut session = Session::default();
        let results = session.execute_script("v a; quit; v b");

        assert_eq!(results.len(), 2);
        assert_eq!(results[1], CommandResult::Exit);
        assert_eq!(session.graph().vertex_count(), 1);
    }

    #[test]
    fn test_json_output() {
        let mut session = Session::default().with_format(OutputFormat::Json);
        session.execute("edge a b");

        let stats: serde_json::Value = serde_json::from_str(&message(session.execute("stats"))).unwrap();
        assert_eq!(stats["edges"], 1);
        assert_eq!(stats["components"], 1);
    }
}
