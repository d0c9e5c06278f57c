#![allow(dead_code)]

use crate::models::file_entry::FileEntry;
use crate::system::filesystem::FileSystem;
use crate::utils::paths::parent_path;
use std::path::PathBuf;

/// 패널 로드 상태
///
/// `Error`는 빈 디렉토리와 구분된다. 패널은 빈 목록 대신
/// 저장된 메시지를 표시한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneStatus {
    /// 목록 정상 로드됨
    Loaded,
    /// 경로 읽기 실패
    Error(String),
}

/// 패널 상태
///
/// 첫 행은 항상 합성 ".." 엔트리 (루트에서도 표시).
#[derive(Debug, Clone)]
pub struct PaneState {
    /// 현재 경로 (항상 `/`로 시작)
    pub current_path: PathBuf,
    /// 행 목록 (".." 포함)
    pub entries: Vec<FileEntry>,
    /// 커서 행 (".." 포함한 절대 인덱스)
    pub selected_index: usize,
    /// 스크롤 오프셋
    pub scroll_offset: usize,
    /// 로드 상태
    pub status: PaneStatus,
}

impl PaneState {
    /// 새 패널 상태 생성 (목록은 아직 비어 있음)
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_path: path,
            entries: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            status: PaneStatus::Loaded,
        }
    }

    /// 현재 경로의 목록을 다시 읽어온다
    ///
    /// 성공: ".." + 목록으로 교체, 스크롤 초기화, 커서는 범위 내로 유지.
    /// 실패: 경로는 시도한 값 그대로 두고 목록을 비운 채 에러 상태로 전환.
    pub fn load(&mut self, filesystem: &FileSystem) {
        match filesystem.read_directory(&self.current_path) {
            Ok(listing) => {
                let mut entries = Vec::with_capacity(listing.len() + 1);
                entries.push(FileEntry::parent(parent_path(&self.current_path)));
                entries.extend(listing);
                self.entries = entries;
                self.scroll_offset = 0;
                self.status = PaneStatus::Loaded;
                self.clamp_cursor();
            }
            Err(err) => {
                self.entries.clear();
                self.selected_index = 0;
                self.scroll_offset = 0;
                self.status = PaneStatus::Error(err.to_string());
            }
        }
    }

    /// 경로 변경 후 재로드 (커서/스크롤 초기화)
    pub fn change_directory(&mut self, path: PathBuf, filesystem: &FileSystem) {
        self.current_path = path;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.load(filesystem);
    }

    /// 목록이 줄어든 뒤 커서가 범위를 벗어나지 않게 조정
    fn clamp_cursor(&mut self) {
        let max_index = self.entries.len().saturating_sub(1);
        if self.selected_index > max_index {
            self.selected_index = max_index;
        }
        if self.scroll_offset > max_index {
            self.scroll_offset = max_index;
        }
    }

    /// 행 개수 (".." 포함)
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// 커서 위치의 엔트리 반환
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected_index)
    }

    /// 커서 한 칸 아래로
    ///
    /// 마지막 행 가드: 행 수가 커서+2보다 작으면 무시 (끝을 넘는 스크롤 방지).
    pub fn move_down(&mut self) {
        if self.entry_count() < self.selected_index + 2 {
            return;
        }
        self.selected_index += 1;
    }

    /// 커서 한 칸 위로 (맨 위에서는 무시)
    pub fn move_up(&mut self) {
        if self.scroll_offset == 0 && self.selected_index == 0 {
            return;
        }
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// 커서가 뷰포트 안에 보이도록 스크롤 오프셋 조정
    ///
    /// 커서가 마지막 표시 행을 넘으면 스크롤을 내리고,
    /// 화면 위로 벗어나면 스크롤을 올린다.
    pub fn scroll_to_cursor(&mut self, viewport_rows: usize) {
        let rows = viewport_rows.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + rows {
            self.scroll_offset = self.selected_index - rows + 1;
        }
    }

    /// 에러 상태 여부
    pub fn is_error(&self) -> bool {
        matches!(self.status, PaneStatus::Error(_))
    }

    /// 에러 메시지 반환 (정상 상태면 None)
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            PaneStatus::Error(message) => Some(message),
            PaneStatus::Loaded => None,
        }
    }

    /// 파일 개수 반환 (".." 제외)
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    /// 디렉토리 개수 반환 (".." 제외)
    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    /// 전체 크기 반환 (바이트)
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loaded_pane(path: PathBuf) -> PaneState {
        let filesystem = FileSystem::new();
        let mut pane = PaneState::new(path);
        pane.load(&filesystem);
        pane
    }

    #[test]
    fn test_pane_state_creation() {
        let pane = PaneState::new(PathBuf::from("/tmp"));

        assert_eq!(pane.current_path, PathBuf::from("/tmp"));
        assert_eq!(pane.selected_index, 0);
        assert_eq!(pane.scroll_offset, 0);
        assert_eq!(pane.status, PaneStatus::Loaded);
        assert!(pane.entries.is_empty());
    }

    /// 첫 행은 항상 ".."
    #[test]
    fn test_load_prepends_parent_row() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();

        let pane = loaded_pane(temp.path().to_path_buf());

        assert_eq!(pane.entries[0].name, "..");
        assert!(pane.entries[0].is_parent());
        assert_eq!(pane.entry_count(), 2);
    }

    /// 같은 디렉토리를 두 번 로드하면 같은 목록
    #[test]
    fn test_load_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let filesystem = FileSystem::new();
        let mut pane = PaneState::new(temp.path().to_path_buf());
        pane.load(&filesystem);
        let first: Vec<String> = pane.entries.iter().map(|e| e.name.clone()).collect();
        pane.load(&filesystem);
        let second: Vec<String> = pane.entries.iter().map(|e| e.name.clone()).collect();

        assert_eq!(first, second);
    }

    /// 없는 경로 로드 시 에러 상태 + 빈 목록
    #[test]
    fn test_load_missing_path_enters_error_state() {
        let pane = loaded_pane(PathBuf::from("/no/such/directory"));

        assert!(pane.is_error());
        assert!(pane.entries.is_empty());
        assert!(pane.error_message().unwrap().contains("not found"));
        // 경로는 시도한 값 그대로
        assert_eq!(pane.current_path, PathBuf::from("/no/such/directory"));
    }

    /// 에러 상태는 다음 성공 로드에서 해제
    #[test]
    fn test_error_state_recovers_on_successful_load() {
        let temp = TempDir::new().unwrap();
        let filesystem = FileSystem::new();

        let mut pane = PaneState::new(PathBuf::from("/no/such/directory"));
        pane.load(&filesystem);
        assert!(pane.is_error());

        pane.change_directory(temp.path().to_path_buf(), &filesystem);
        assert!(!pane.is_error());
        assert_eq!(pane.entries[0].name, "..");
    }

    /// 마지막 행에서 move_down은 무시
    #[test]
    fn test_move_down_stops_at_last_row() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.txt"), "1").unwrap();
        fs::write(temp.path().join("two.txt"), "2").unwrap();

        let mut pane = loaded_pane(temp.path().to_path_buf());
        assert_eq!(pane.entry_count(), 3);

        for _ in 0..10 {
            pane.move_down();
        }
        assert_eq!(pane.selected_index, 2);

        // 가드 이후에는 커서/스크롤 변화 없음
        pane.move_down();
        assert_eq!(pane.selected_index, 2);
        assert_eq!(pane.scroll_offset, 0);
    }

    /// 맨 위에서 move_up은 무시
    #[test]
    fn test_move_up_stops_at_top() {
        let temp = TempDir::new().unwrap();
        let mut pane = loaded_pane(temp.path().to_path_buf());

        pane.move_up();
        assert_eq!(pane.selected_index, 0);
        assert_eq!(pane.scroll_offset, 0);
    }

    /// 커서가 뷰포트 아래를 벗어나면 스크롤이 따라간다
    #[test]
    fn test_scroll_follows_cursor() {
        let temp = TempDir::new().unwrap();
        for i in 0..20 {
            fs::write(temp.path().join(format!("file{:02}.txt", i)), "x").unwrap();
        }

        let mut pane = loaded_pane(temp.path().to_path_buf());
        assert_eq!(pane.entry_count(), 21);

        // 뷰포트 5행: 커서를 10까지 내리면 스크롤은 6
        for _ in 0..10 {
            pane.move_down();
            pane.scroll_to_cursor(5);
        }
        assert_eq!(pane.selected_index, 10);
        assert_eq!(pane.scroll_offset, 6);

        // 다시 위로 올리면 스크롤도 따라 올라온다
        for _ in 0..10 {
            pane.move_up();
            pane.scroll_to_cursor(5);
        }
        assert_eq!(pane.selected_index, 0);
        assert_eq!(pane.scroll_offset, 0);
    }

    /// 목록 축소 후 커서는 마지막 행으로 클램프
    #[test]
    fn test_reload_clamps_cursor_after_shrink() {
        let temp = TempDir::new().unwrap();
        for i in 0..5 {
            fs::write(temp.path().join(format!("f{}.txt", i)), "x").unwrap();
        }

        let filesystem = FileSystem::new();
        let mut pane = PaneState::new(temp.path().to_path_buf());
        pane.load(&filesystem);
        pane.selected_index = 5; // 마지막 행

        for i in 1..5 {
            fs::remove_file(temp.path().join(format!("f{}.txt", i))).unwrap();
        }
        pane.load(&filesystem);

        assert_eq!(pane.entry_count(), 2);
        assert_eq!(pane.selected_index, 1);
    }

    #[test]
    fn test_counts_exclude_parent_row() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "aaaa").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let pane = loaded_pane(temp.path().to_path_buf());

        assert_eq!(pane.file_count(), 1);
        assert_eq!(pane.dir_count(), 1);
        assert_eq!(pane.total_size(), 4);
    }
}
