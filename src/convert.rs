//! # 单文件转换任务
//!
//! 读取 BMP 文件，解码后编码为 PNG 写入输出目录，可选删除源文件。
//!
//! ## 功能
//! - 读取并解码 BMP
//! - 推导输出文件名（扩展名替换为 `.png`）
//! - 编码 PNG 并完整落盘
//! - `clean` 模式下删除源文件
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `image` crate 进行解码与编码

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::{ConvertError, Result};

/// 单个文件的转换作业
///
/// 由符合条件的目录项派生，归执行它的任务独占，完成后即丢弃。
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// 源文件名（不含目录）
    pub file_name: String,
    /// 输入文件完整路径
    pub input_path: PathBuf,
    /// 输出文件完整路径
    pub output_path: PathBuf,
}

impl ConversionJob {
    /// 由文件名和输入/输出目录构造作业
    pub fn new(file_name: &str, input_dir: &Path, output_dir: &Path) -> Self {
        Self {
            file_name: file_name.to_string(),
            input_path: input_dir.join(file_name),
            output_path: output_dir.join(output_name(file_name)),
        }
    }
}

/// 推导输出文件名：去掉最后一个 `.` 起的扩展名，追加 `.png`
///
/// 无扩展名的文件名整体作为主干，`a.b.bmp` 只在最后一个点处截断。
fn output_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    format!("{}.png", stem)
}

/// 执行转换：读取 -> 解码 -> 编码写出 -> 可选清理源文件
pub fn convert_file(job: &ConversionJob, clean: bool) -> Result<()> {
    let bytes = fs::read(&job.input_path).map_err(|e| ConvertError::Open {
        path: job.input_path.display().to_string(),
        source: e,
    })?;

    let image =
        image::load_from_memory_with_format(&bytes, ImageFormat::Bmp).map_err(|e| {
            ConvertError::Decode {
                path: job.input_path.display().to_string(),
                source: e,
            }
        })?;

    write_png(&image, &job.output_path)?;

    // 源文件仅在输出完整落盘并关闭后删除
    if clean {
        fs::remove_file(&job.input_path).map_err(|e| ConvertError::Cleanup {
            path: job.input_path.display().to_string(),
            source: e,
        })?;
    }

    Ok(())
}

/// 将解码后的图像编码为 PNG 写入目标路径
///
/// 返回时输出句柄已关闭；编码中途失败可能留下截断的输出文件。
fn write_png(image: &DynamicImage, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| ConvertError::Create {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| ConvertError::Encode {
            path: output_path.display().to_string(),
            source: e,
        })?;

    writer.flush().map_err(|e| ConvertError::Encode {
        path: output_path.display().to_string(),
        source: image::ImageError::IoError(e),
    })
}
