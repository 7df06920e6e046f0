//! # 路径规整工具
//!
//! 清理用户输入的路径字符串：去除首尾空白、成对包裹引号与冗余分隔符。
//!
//! ## 功能
//! - 去除首尾空白
//! - 去除一对匹配的包裹引号（`"…"` 或 `'…'`）
//! - 词法清理：合并冗余分隔符，消解 `.` 与 `..`
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 无外部 crate 依赖

use std::path::{Component, Path, PathBuf};

/// 规整用户输入的路径
///
/// 纯函数，不访问文件系统，总是返回一个非空路径（空输入规整为 `.`）。
pub fn normalize(raw: &str) -> PathBuf {
    // 引号必须先于词法清理去除，否则引号会阻断清理
    let unquoted = strip_quotes(raw.trim());
    clean(Path::new(unquoted))
}

/// 去除一对匹配的包裹引号
fn strip_quotes(s: &str) -> &str {
    if s.len() < 2 {
        return s;
    }
    let bytes = s.as_bytes();
    let (first, last) = (bytes[0], bytes[s.len() - 1]);
    if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// 词法路径清理
///
/// 只做字符串层面的化简，不解析符号链接：`..` 吞掉前一个普通段，
/// 根目录之后的 `..` 被丢弃，开头的 `..` 原样保留。
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  ./in/  "), PathBuf::from("in"));
        assert_eq!(normalize("\tout\n"), PathBuf::from("out"));
    }

    #[test]
    fn test_normalize_strips_matching_quotes() {
        assert_eq!(normalize("\"./in/\""), PathBuf::from("in"));
        assert_eq!(normalize("'./in/'"), PathBuf::from("in"));
        assert_eq!(normalize("  \"./in/\"  "), normalize("./in/"));
    }

    #[test]
    fn test_normalize_keeps_mismatched_quotes() {
        assert_eq!(normalize("\"./in/'"), PathBuf::from("\"./in/'"));
        assert_eq!(normalize("\""), PathBuf::from("\""));
    }

    #[test]
    fn test_normalize_cleans_redundant_components() {
        assert_eq!(normalize("a//b///c"), PathBuf::from("a/b/c"));
        assert_eq!(normalize("./a/./b"), PathBuf::from("a/b"));
        assert_eq!(normalize("a/b/../c"), PathBuf::from("a/c"));
    }

    #[test]
    fn test_normalize_parent_of_root() {
        assert_eq!(normalize("/.."), PathBuf::from("/"));
        assert_eq!(normalize("/../a"), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_leading_parent_preserved() {
        assert_eq!(normalize("../a"), PathBuf::from("../a"));
        assert_eq!(normalize("../../a"), PathBuf::from("../../a"));
    }

    #[test]
    fn test_normalize_empty_becomes_dot() {
        assert_eq!(normalize(""), PathBuf::from("."));
        assert_eq!(normalize("   "), PathBuf::from("."));
        assert_eq!(normalize("''"), PathBuf::from("."));
    }
}
