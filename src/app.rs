use crate::core::actions::Action;
use crate::models::PaneState;
use crate::system::FileSystem;
use crate::ui::{ActivePanel, DialogKind, LayoutManager, Theme};
use crate::utils::error::{DuoPaneError, Result};
use crate::utils::paths::{normalize_input, parent_path};
use std::path::PathBuf;

mod dialogs;
mod navigation;
mod text_edit;


/// 앱 상태 (탐색 세션)
///
/// 두 패널과 포커스, 파일 시스템 협력자를 소유한다.
/// 키 이벤트는 순차적으로만 처리되므로 잠금이 필요 없다.
pub struct App {
    /// 종료 플래그
    should_quit: bool,
    /// 레이아웃 매니저 (활성 패널 포함)
    pub layout: LayoutManager,
    /// 좌측 패널 상태
    pub left_pane: PaneState,
    /// 우측 패널 상태
    pub right_pane: PaneState,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 색상 테마
    pub theme: Theme,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
}

impl App {
    /// 두 시작 경로로 세션 생성
    ///
    /// 읽기 실패는 치명적이지 않다. 해당 패널이 에러 상태로 남는다.
    pub fn new(left_path: PathBuf, right_path: PathBuf) -> Self {
        let filesystem = FileSystem::new();

        let mut left_pane = PaneState::new(left_path);
        left_pane.load(&filesystem);

        let mut right_pane = PaneState::new(right_path);
        right_pane.load(&filesystem);

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            left_pane,
            right_pane,
            filesystem,
            theme: Theme::default(),
            dialog: None,
        }
    }

    /// 활성 패널 반환
    pub fn active_panel(&self) -> ActivePanel {
        self.layout.active_panel()
    }

    /// 패널 상태 참조
    pub fn pane_state(&self, panel: ActivePanel) -> &PaneState {
        match panel {
            ActivePanel::Left => &self.left_pane,
            ActivePanel::Right => &self.right_pane,
        }
    }

    /// 패널 상태 가변 참조
    pub fn pane_state_mut(&mut self, panel: ActivePanel) -> &mut PaneState {
        match panel {
            ActivePanel::Left => &mut self.left_pane,
            ActivePanel::Right => &mut self.right_pane,
        }
    }

    /// 활성 패널 상태 참조
    pub fn active_pane_state(&self) -> &PaneState {
        self.pane_state(self.active_panel())
    }

    /// 다이얼로그 활성화 상태 확인
    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 종료 여부
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 종료 요청
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 패널 목록에 표시 가능한 행 수
    ///
    /// 터미널 높이에서 상태바/커맨드바(2), 패널 테두리(2),
    /// 헤더와 구분선(2)을 제외한다.
    pub fn visible_rows(&self) -> usize {
        let (_, terminal_height) = self.layout.terminal_size();
        (terminal_height.saturating_sub(6) as usize).max(1)
    }
}
