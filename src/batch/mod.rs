//! # 批量处理模块
//!
//! 提供文件收集与受限并发的批量执行能力。
//!
//! ## 功能
//! - 扫描输入目录并筛选 BMP 文件
//! - 并行处理，并发数受上限约束
//! - 首个错误即终止（fail-fast）
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{FileCollector, Scan};
pub use runner::BatchRunner;
