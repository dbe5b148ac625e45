//! undigraph CLI 工具
//!
//! 交互式命令行界面

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use undigraph::cli::{CommandResult, OutputFormat, Session};
use undigraph::config::{GraphConfig, SelfLoopPolicy};

#[derive(Parser, Debug)]
#[command(name = "undigraph-cli")]
#[command(about = "undigraph 无向图命令行工具")]
struct Args {
    /// 执行以 ';' 分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 拒绝自环
    #[arg(long)]
    reject_self_loops: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let policy = if args.reject_self_loops {
        SelfLoopPolicy::Reject
    } else {
        SelfLoopPolicy::Allow
    };
    let config = GraphConfig::new().with_self_loops(policy);
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    let mut session = Session::new(config).with_format(format);
    info!(?config, "会话已创建");

    // 单次执行模式
    if let Some(script) = args.execute {
        let mut failed = false;
        for result in session.execute_script(&script) {
            failed |= matches!(result, CommandResult::Error(_));
            print_result(result);
        }
        if failed {
            anyhow::bail!("部分命令执行失败");
        }
        return Ok(());
    }

    // 交互模式
    println!("undigraph CLI v{}", undigraph::VERSION);
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("undigraph> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let result = session.execute(&line);
        if result == CommandResult::Exit {
            break;
        }
        print_result(result);
    }

    println!("再见！");
    Ok(())
}

fn print_result(result: CommandResult) {
    match result {
        CommandResult::Message(message) => println!("{}", message),
        CommandResult::Error(error) => eprintln!("{} {}", "错误:".red().bold(), error),
        CommandResult::Continue | CommandResult::Exit => {}
    }
}
