//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。工具只有批量转换这一个功能，
//! 因此不设子命令，参数直接挂在顶层。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Parser;

/// bmp2png - 批量 BMP 转 PNG 转换器
#[derive(Parser, Debug)]
#[command(name = "bmp2png")]
#[command(version)]
#[command(about = "Batch-convert BMP images in a directory to PNG", long_about = None)]
pub struct Cli {
    /// Directory to read BMP files from
    #[arg(short, long, default_value = ".")]
    pub input: String,

    /// Directory to write PNG files to
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Don't print anything to stdout
    #[arg(long, default_value_t = false)]
    pub silent: bool,

    /// Delete source BMP files after successful conversion
    #[arg(long, default_value_t = false)]
    pub clean: bool,

    /// Number of concurrent conversions (values below 1 are clamped to 1)
    #[arg(short, long, default_value_t = 5)]
    pub concurrency: usize,
}
