mod app;
mod cli;
mod error;
mod event;
mod model;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use model::TaskStore;

/// 打开任务仓库：有数据目录则走持久化，否则退化为内存模式
fn open_store() -> TaskStore {
    match storage::data_dir() {
        Some(root) => TaskStore::load(root),
        None => TaskStore::in_memory(),
    }
}

/// 启动 TUI 界面
fn run_tui() -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let mut app = App::new(open_store());

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 无子命令时进入 TUI
    match cli.command {
        None => run_tui()?,
        Some(Commands::Add { title, description }) => {
            let mut store = open_store();
            cli::add::execute(&mut store, &title, &description);
        }
        Some(Commands::List { filter }) => {
            let store = open_store();
            cli::list::execute(&store, &filter);
        }
        Some(Commands::Toggle { id }) => {
            let mut store = open_store();
            cli::toggle::execute(&mut store, id);
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::tasks::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
