use super::*;

impl App {
    /// 액션 실행 (단일 진실 원천)
    ///
    /// 이동 방향키는 활성 패널이 맞는 쪽일 때만 동작한다.
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::TogglePane => self.toggle_pane(),
            Action::MoveUp => self.move_selection_up(self.active_panel()),
            Action::MoveDown => self.move_selection_down(self.active_panel()),
            Action::GoToParent => self.go_to_parent(self.active_panel()),
            Action::EnterSelected => {
                if let Err(err) = self.enter_selected(self.active_panel()) {
                    self.show_error("Open failed", &err);
                }
            }
            Action::PromptPath => self.open_path_prompt(),
            Action::MoveSelectedRight => {
                if self.active_panel() == ActivePanel::Left {
                    if let Err(err) = self.move_selected(ActivePanel::Left) {
                        self.show_error("Move failed", &err);
                    }
                }
            }
            Action::MoveSelectedLeft => {
                if self.active_panel() == ActivePanel::Right {
                    if let Err(err) = self.move_selected(ActivePanel::Right) {
                        self.show_error("Move failed", &err);
                    }
                }
            }
        }
    }

    /// 패널 포커스 전환 (Tab)
    pub fn toggle_pane(&mut self) {
        self.layout.toggle_panel();
    }

    /// 커서를 위로 이동
    pub fn move_selection_up(&mut self, panel: ActivePanel) {
        let rows = self.visible_rows();
        let pane = self.pane_state_mut(panel);
        pane.move_up();
        pane.scroll_to_cursor(rows);
    }

    /// 커서를 아래로 이동
    pub fn move_selection_down(&mut self, panel: ActivePanel) {
        let rows = self.visible_rows();
        let pane = self.pane_state_mut(panel);
        pane.move_down();
        pane.scroll_to_cursor(rows);
    }

    /// Enter 키 처리: ".."은 상위로, 디렉토리는 진입, 파일은 무시
    ///
    /// 디렉토리 판별 중 stat이 실패하면 에러를 전파한다.
    pub fn enter_selected(&mut self, panel: ActivePanel) -> Result<()> {
        let target = {
            let pane = self.pane_state(panel);
            pane.selected_entry().map(|e| (e.is_parent(), e.name.clone()))
        };
        let Some((is_parent, name)) = target else {
            return Ok(());
        };

        if is_parent {
            self.go_to_parent(panel);
            return Ok(());
        }

        let child = self.pane_state(panel).current_path.join(&name);
        if self.filesystem.query_directory(&child)? {
            self.change_pane_dir(panel, child);
        }
        Ok(())
    }

    /// 상위 디렉토리로 이동 (루트의 상위는 루트)
    pub fn go_to_parent(&mut self, panel: ActivePanel) {
        let parent = parent_path(&self.pane_state(panel).current_path);
        self.change_pane_dir(panel, parent);
    }

    /// 입력 경로로 이동 (모달 입력 확정 시 호출)
    ///
    /// 공백 제거 후 `/` 접두어를 보장한다.
    pub fn jump_to_path(&mut self, panel: ActivePanel, raw: &str) {
        let path = normalize_input(raw);
        self.change_pane_dir(panel, path);
    }

    /// 패널 경로 변경 공통 처리
    fn change_pane_dir(&mut self, panel: ActivePanel, path: PathBuf) {
        match panel {
            ActivePanel::Left => self.left_pane.change_directory(path, &self.filesystem),
            ActivePanel::Right => self.right_pane.change_directory(path, &self.filesystem),
        }
    }

    /// 선택 항목을 반대편 패널 디렉토리로 이동
    ///
    /// 두 패널이 같은 디렉토리를 보고 있으면 자기 자신 위로의
    /// 이동이 되므로 무시한다. ".." 행도 무시.
    /// rename이 실패하면 메모리 상태를 바꾸지 않고 에러를 전파한다.
    pub fn move_selected(&mut self, source: ActivePanel) -> Result<()> {
        if self.left_pane.current_path == self.right_pane.current_path {
            return Ok(());
        }

        let entry = {
            let pane = self.pane_state(source);
            pane.selected_entry().map(|e| (e.is_parent(), e.name.clone()))
        };
        let Some((is_parent, name)) = entry else {
            return Ok(());
        };
        if is_parent {
            return Ok(());
        }

        let source_file = self.pane_state(source).current_path.join(&name);
        let dest_file = self.pane_state(source.other()).current_path.join(&name);
        self.filesystem.move_entry(&source_file, &dest_file)?;

        // rename 성공 후에만 양쪽 목록 갱신
        self.reload_panes();
        Ok(())
    }

    /// 양쪽 패널 목록 새로고침 (커서는 범위 내로 유지)
    pub fn reload_panes(&mut self) {
        let rows = self.visible_rows();
        self.left_pane.load(&self.filesystem);
        self.left_pane.scroll_to_cursor(rows);
        self.right_pane.load(&self.filesystem);
        self.right_pane.scroll_to_cursor(rows);
    }
}
