//! # bmp2png - BMP 批量转 PNG 工具
//!
//! 扫描输入目录中的 BMP 图片，解码后编码为 PNG 写入输出目录，
//! 支持限制并发数与转换后删除源文件。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs      (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── convert.rs  (单文件转换任务)
//!   ├── batch/      (文件收集与并发调度)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod convert;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
