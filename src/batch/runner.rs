//! # 批量执行器
//!
//! 以受限并发度并行执行转换任务。
//!
//! ## 功能
//! - 独立 rayon 线程池，线程数即并发上限
//! - 进度条显示
//! - 首个错误即短路终止，错误向调用方传播
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::Result;
use crate::utils::progress;

use indicatif::ProgressBar;
use rayon::prelude::*;

/// 批量执行器
pub struct BatchRunner {
    /// 并发任务数上限
    concurrency: usize,
    /// 静默模式下隐藏进度条
    silent: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，并发数最低为 1
    pub fn new(concurrency: usize, silent: bool) -> Self {
        Self {
            concurrency: concurrency.max(1),
            silent,
        }
    }

    /// 并行处理文件列表
    ///
    /// 任务完成顺序不作保证，仅保证同时活跃的任务数不超过并发上限。
    /// 任一任务失败即不再启动新任务，并把该错误返回给调用方；
    /// 已在执行中的任务会运行至结束。
    pub fn run<F>(&self, files: &[String], processor: F) -> Result<()>
    where
        F: Fn(&str, &ProgressBar) -> Result<()> + Sync + Send,
    {
        let pb = if self.silent {
            ProgressBar::hidden()
        } else {
            progress::create_progress_bar(files.len() as u64, "Converting")
        };

        // 专用线程池，不污染全局池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency)
            .build()
            .unwrap();

        let result = pool.install(|| {
            files.par_iter().try_for_each(|name| {
                let result = processor(name, &pb);
                pb.inc(1);
                result
            })
        });

        pb.finish_and_clear();
        result
    }
}
