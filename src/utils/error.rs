use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuoPaneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 경로가 존재하지 않음 (패널 에러 상태로 복구)
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// 디렉토리가 아닌 경로를 목록으로 읽으려 함
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// 읽기 권한 없음
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// 디렉토리/파일 판별 중 stat 실패 (호출자에게 전파)
    #[error("Cannot stat {}: {source}", path.display())]
    PathQuery {
        path: PathBuf,
        source: std::io::Error,
    },

    /// rename 실패 (호출자에게 전파, 메모리 상태 변경 없음)
    #[error("Cannot move {} -> {}: {source}", from.display(), to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// 실행 인자 오류 (UI 생성 전에 종료)
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DuoPaneError>;
