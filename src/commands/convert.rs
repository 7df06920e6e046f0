//! # convert 命令实现
//!
//! 批量将输入目录中的 BMP 文件转换为 PNG。
//!
//! ## 功能
//! - 规整输入/输出路径
//! - 收集目录项并筛选 BMP 文件
//! - 受限并发执行转换，首个错误即终止
//! - 汇总输出处理数量与耗时
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的参数
//! - 使用 `batch/`, `convert.rs`
//! - 使用 `utils/output.rs`, `utils/paths.rs`

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::batch::{BatchRunner, FileCollector};
use crate::cli::Cli;
use crate::convert::{self, ConversionJob};
use crate::error::{ConvertError, Result};
use crate::utils::{output, paths};

/// 一次批量转换的不可变配置
///
/// 由命令行参数一次性派生，任务内部不读取任何全局状态。
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// 输入目录
    pub input_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
    /// 静默模式
    pub silent: bool,
    /// 转换成功后删除源文件
    pub clean: bool,
    /// 并发数上限
    pub concurrency: usize,
}

impl ConvertConfig {
    /// 由命令行参数构造配置，路径在此统一规整
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input_dir: paths::normalize(&cli.input),
            output_dir: paths::normalize(&cli.output),
            silent: cli.silent,
            clean: cli.clean,
            concurrency: cli.concurrency.max(1),
        }
    }
}

/// 执行批量转换
pub fn execute(cli: Cli) -> Result<()> {
    let config = ConvertConfig::from_cli(&cli);
    let start = Instant::now();

    // 验证输入目录
    if !config.input_dir.is_dir() {
        return Err(ConvertError::DirectoryNotFound {
            path: config.input_dir.display().to_string(),
        });
    }

    // 创建输出目录
    fs::create_dir_all(&config.output_dir).map_err(|e| ConvertError::Create {
        path: config.output_dir.display().to_string(),
        source: e,
    })?;

    let scan = FileCollector::new(config.input_dir.clone()).collect()?;

    if scan.eligible.is_empty() {
        if !config.silent {
            output::print_warning(&format!(
                "No BMP files found under {}",
                config.input_dir.display()
            ));
            output::print_summary(scan.scanned, start.elapsed());
        }
        return Ok(());
    }

    if !config.silent {
        output::print_info(&format!(
            "Found {} BMP file(s) to convert",
            scan.eligible.len()
        ));
    }

    let runner = BatchRunner::new(config.concurrency, config.silent);
    runner.run(&scan.eligible, |name, pb| {
        let job = ConversionJob::new(name, &config.input_dir, &config.output_dir);
        if !config.silent {
            pb.suspend(|| println!("Processing \"{}\"", job.file_name));
        }
        convert::convert_file(&job, config.clean)
    })?;

    if !config.silent {
        output::print_summary(scan.scanned, start.elapsed());
    }

    Ok(())
}
