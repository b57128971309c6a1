mod api;
mod app;
mod cli;
mod client;
mod config;
mod error;
mod event;
mod model;
mod store;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::time::Instant;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use client::ApiClient;

/// Auto-refresh interval in seconds
const AUTO_REFRESH_INTERVAL_SECS: u64 = 5;

/// 启动 TUI 界面
fn run_tui(api: Option<String>) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用（启动时拉取一次任务列表）
    let mut app = App::new(ApiClient::new(api));

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Enable backtraces by default so panics show call stacks
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state
        ratatui::restore();
        // Call the original panic hook
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 统一调度，无子命令时默认进入 TUI
    match cli.command.unwrap_or(Commands::Tui { api: None }) {
        Commands::Tui { api } => {
            run_tui(api)?;
        }
        Commands::Serve { port } => {
            tokio::runtime::Runtime::new()?.block_on(async {
                cli::serve::execute(port).await;
            });
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let mut last_refresh = Instant::now();

    loop {
        // 定时自动刷新（每 5 秒）
        if last_refresh.elapsed().as_secs() >= AUTO_REFRESH_INTERVAL_SECS {
            app.refresh();
            last_refresh = Instant::now();
        }

        // 渲染界面
        terminal.draw(|frame| ui::board::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
