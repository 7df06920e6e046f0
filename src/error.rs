//! # 统一错误处理模块
//!
//! 定义 bmp2png 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// bmp2png 统一错误类型
#[derive(Error, Debug)]
pub enum ConvertError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to list directory: {path}")]
    DirectoryList {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 单文件转换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open input file: {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode BMP file: {path}\nReason: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create output file: {path}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode PNG file: {path}\nReason: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to remove source file: {path}")]
    Cleanup {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ConvertError>;
