//! # 文件收集器
//!
//! 扫描输入目录（不递归），筛选出待转换的 BMP 文件。
//!
//! ## 功能
//! - 非递归枚举目录项
//! - 按扩展名筛选（区分大小写，仅 `.bmp`）
//! - 统计扫描到的目录项总数
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::{ConvertError, Result};

/// 目录扫描结果
#[derive(Debug)]
pub struct Scan {
    /// 符合条件的文件名列表
    pub eligible: Vec<String>,
    /// 扫描到的目录项总数（含子目录与不符合条件的文件）
    pub scanned: usize,
}

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }

    /// 扫描输入目录并收集符合条件的文件名
    ///
    /// 目录不可枚举时返回 `DirectoryList` 错误。
    pub fn collect(&self) -> Result<Scan> {
        let mut eligible = Vec::new();
        let mut scanned = 0usize;

        for entry in WalkDir::new(&self.input).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ConvertError::DirectoryList {
                path: self.input.display().to_string(),
                source: e,
            })?;
            scanned += 1;

            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if Self::is_eligible(name) {
                    eligible.push(name.to_string());
                }
            }
        }

        eligible.sort();
        Ok(Scan { eligible, scanned })
    }

    /// 判断文件名是否为待转换的 BMP 文件
    ///
    /// 后缀匹配区分大小写，`.BMP` 不在转换范围内。
    fn is_eligible(name: &str) -> bool {
        name.ends_with(".bmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_eligible() {
        assert!(FileCollector::is_eligible("photo.bmp"));
        assert!(FileCollector::is_eligible("a.b.bmp"));
        assert!(FileCollector::is_eligible(".bmp"));
        assert!(!FileCollector::is_eligible("photo.BMP"));
        assert!(!FileCollector::is_eligible("photo.png"));
        assert!(!FileCollector::is_eligible("photo.bmp.txt"));
        assert!(!FileCollector::is_eligible("bmp"));
    }

    #[test]
    fn test_collect_filters_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.bmp"), b"x").unwrap();
        fs::write(dir.path().join("a.bmp"), b"x").unwrap();
        fs::write(dir.path().join("note.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub.bmp")).unwrap();

        let scan = FileCollector::new(dir.path().to_path_buf()).collect().unwrap();

        // 子目录与非 BMP 文件计入扫描总数，但不进入转换列表
        assert_eq!(scan.scanned, 4);
        assert_eq!(scan.eligible, vec!["a.bmp".to_string(), "b.bmp".to_string()]);
    }

    #[test]
    fn test_collect_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let scan = FileCollector::new(dir.path().to_path_buf()).collect().unwrap();
        assert_eq!(scan.scanned, 0);
        assert!(scan.eligible.is_empty());
    }

    #[test]
    fn test_collect_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = FileCollector::new(missing).collect();
        assert!(matches!(result, Err(ConvertError::DirectoryList { .. })));
    }
}
