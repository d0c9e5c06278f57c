use super::text_edit::TextBufferEdit;
use super::*;

impl App {
    // === 다이얼로그 관련 메서드 ===

    /// 경로 입력 다이얼로그 열기 (Space)
    pub fn open_path_prompt(&mut self) {
        self.dialog = Some(DialogKind::PathInput {
            value: String::new(),
            cursor_pos: 0,
        });
    }

    /// 에러 다이얼로그 표시
    pub fn show_error(&mut self, title: &str, error: &DuoPaneError) {
        self.dialog = Some(DialogKind::Error {
            title: title.to_string(),
            message: error.to_string(),
        });
    }

    /// 다이얼로그 닫기
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 입력 확정: 활성 패널을 입력 경로로 이동
    pub fn confirm_path_input(&mut self) {
        let value = match &self.dialog {
            Some(DialogKind::PathInput { value, .. }) => value.clone(),
            _ => return,
        };
        self.dialog = None;
        self.jump_to_path(self.active_panel(), &value);
    }

    /// 문자 입력
    pub fn dialog_input_char(&mut self, c: char) {
        if let Some(DialogKind::PathInput { value, cursor_pos }) = &mut self.dialog {
            TextBufferEdit::insert_char(value, cursor_pos, c);
        }
    }

    /// 백스페이스
    pub fn dialog_input_backspace(&mut self) {
        if let Some(DialogKind::PathInput { value, cursor_pos }) = &mut self.dialog {
            TextBufferEdit::backspace(value, cursor_pos);
        }
    }

    /// Delete
    pub fn dialog_input_delete(&mut self) {
        if let Some(DialogKind::PathInput { value, cursor_pos }) = &mut self.dialog {
            TextBufferEdit::delete(value, cursor_pos);
        }
    }

    /// 커서 왼쪽으로
    pub fn dialog_input_left(&mut self) {
        if let Some(DialogKind::PathInput { value, cursor_pos }) = &mut self.dialog {
            TextBufferEdit::left(value, cursor_pos);
        }
    }

    /// 커서 오른쪽으로
    pub fn dialog_input_right(&mut self) {
        if let Some(DialogKind::PathInput { value, cursor_pos }) = &mut self.dialog {
            TextBufferEdit::right(value, cursor_pos);
        }
    }

    /// 커서 맨 앞으로
    pub fn dialog_input_home(&mut self) {
        if let Some(DialogKind::PathInput { cursor_pos, .. }) = &mut self.dialog {
            TextBufferEdit::home(cursor_pos);
        }
    }

    /// 커서 맨 뒤로
    pub fn dialog_input_end(&mut self) {
        if let Some(DialogKind::PathInput { value, cursor_pos }) = &mut self.dialog {
            TextBufferEdit::end(value, cursor_pos);
        }
    }
}
