use crate::models::file_entry::{FileEntry, FileType};
use crate::utils::error::{DuoPaneError, Result};
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::SystemTime;

/// 파일 시스템 모듈
///
/// 디렉토리 목록, 디렉토리 판별, rename 기반 이동.
/// 모든 호출은 동기/블로킹이다.
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리 읽기
    ///
    /// 주어진 경로의 엔트리 목록을 이름순(바이트 순)으로 반환한다.
    pub fn read_directory(&self, path: &Path) -> Result<Vec<FileEntry>> {
        // 1. 경로 존재 확인
        if !path.exists() {
            return Err(DuoPaneError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        // 2. 디렉토리 여부 확인
        if !path.is_dir() {
            return Err(DuoPaneError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        // 3. 디렉토리 읽기
        let read_dir = fs::read_dir(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                DuoPaneError::PermissionDenied {
                    path: path.to_path_buf(),
                }
            } else {
                DuoPaneError::Io(e)
            }
        })?;

        // 4. 각 엔트리에 대해 메타데이터 파싱
        let mut entries = Vec::new();

        for entry in read_dir {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let entry_path = entry.path();

            let Ok(metadata) = fs::symlink_metadata(&entry_path) else {
                continue;
            };

            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = file_type_of(&metadata);

            // 크기 (디렉토리는 0)
            let size = if metadata.is_dir() { 0 } else { metadata.len() };

            let modified = metadata
                .modified()
                .unwrap_or_else(|_| SystemTime::UNIX_EPOCH);

            entries.push(FileEntry::new(name, entry_path, file_type, size, modified));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    /// 경로가 디렉토리인지 질의
    ///
    /// stat 자체가 실패하면 (권한 등) 에러로 전파한다.
    pub fn query_directory(&self, path: &Path) -> Result<bool> {
        let metadata = fs::metadata(path).map_err(|source| DuoPaneError::PathQuery {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(metadata.is_dir())
    }

    /// rename 기반 이동
    pub fn move_entry(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|source| DuoPaneError::MoveFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }
}

/// 파일 타입 판단
fn file_type_of(metadata: &Metadata) -> FileType {
    if metadata.is_dir() {
        return FileType::Directory;
    }

    if metadata.is_symlink() {
        return FileType::Symlink;
    }

    // 실행 권한이 있는지 확인 (owner, group, other 중 하나라도)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = metadata.permissions().mode();
        if mode & 0o111 != 0 {
            return FileType::Executable;
        }
    }

    FileType::File
}
