// Path helpers - 경로 정규화/상위 경로 계산

use std::path::{Path, PathBuf};

/// 사용자 입력을 절대 경로로 정규화
///
/// 앞뒤 공백을 제거하고 `/`로 시작하지 않으면 `/`를 붙인다.
/// 빈 입력은 루트가 된다.
pub fn normalize_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') {
        PathBuf::from(trimmed)
    } else {
        PathBuf::from(format!("/{}", trimmed))
    }
}

/// 상위 디렉토리 경로 계산
///
/// 마지막 `/`에서 잘라낸다. 결과가 비면 루트 (루트의 상위는 루트).
pub fn parent_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match raw.rfind('/') {
        Some(index) if index > 0 => PathBuf::from(&raw[..index]),
        _ => PathBuf::from("/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input_absolute() {
        assert_eq!(normalize_input("/tmp"), PathBuf::from("/tmp"));
        assert_eq!(normalize_input("/"), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_input_relative() {
        assert_eq!(normalize_input("tmp"), PathBuf::from("/tmp"));
        assert_eq!(normalize_input("a/b/c"), PathBuf::from("/a/b/c"));
    }

    /// 공백 제거 후 정규화
    #[test]
    fn test_normalize_input_trims_whitespace() {
        assert_eq!(
            normalize_input("  relative/path  "),
            PathBuf::from("/relative/path")
        );
        assert_eq!(normalize_input(" /tmp\n"), PathBuf::from("/tmp"));
    }

    #[test]
    fn test_normalize_input_empty() {
        assert_eq!(normalize_input(""), PathBuf::from("/"));
        assert_eq!(normalize_input("   "), PathBuf::from("/"));
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path(Path::new("/a/b")), PathBuf::from("/a"));
        assert_eq!(parent_path(Path::new("/a")), PathBuf::from("/"));
    }

    /// 루트의 상위는 루트
    #[test]
    fn test_parent_path_root() {
        assert_eq!(parent_path(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_parent_path_deep() {
        assert_eq!(
            parent_path(Path::new("/usr/local/share")),
            PathBuf::from("/usr/local")
        );
    }
}
