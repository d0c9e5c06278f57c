// Status bar component - 상태바 컴포넌트
//
// 활성 패널의 파일/디렉토리 개수, 총 크기, 활성 패널 표시

use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 파일 개수
    file_count: usize,
    /// 디렉토리 개수
    dir_count: usize,
    /// 총 크기 (포맷된 문자열)
    total_size: &'a str,
    /// 활성 패널 표시 (LEFT/RIGHT)
    active_pane: &'a str,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 강조색 (활성 패널 표시)
    accent_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            file_count: 0,
            dir_count: 0,
            total_size: "0 B",
            active_pane: "LEFT",
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            accent_color: Color::Rgb(0, 120, 212),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일 개수 설정
    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    /// 디렉토리 개수 설정
    pub fn dir_count(mut self, count: usize) -> Self {
        self.dir_count = count;
        self
    }

    /// 총 크기 설정
    pub fn total_size(mut self, size: &'a str) -> Self {
        self.total_size = size;
        self
    }

    /// 활성 패널 표시 설정
    pub fn active_pane(mut self, pane: &'a str) -> Self {
        self.active_pane = pane;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg;
        self.fg_color = theme.status_bar_fg;
        self.accent_color = theme.accent;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        // 왼쪽 정보: 파일/디렉토리 개수, 크기
        let left_info = format!(
            " {}, {} | {}",
            pluralize(self.file_count, "file", "files"),
            pluralize(self.dir_count, "dir", "dirs"),
            self.total_size
        );

        // 오른쪽 정보: 활성 패널
        let right_info = format!("[{}] ", self.active_pane);

        // 가용 공간 계산
        let padding_len = (area.width as usize)
            .saturating_sub(left_info.len())
            .saturating_sub(right_info.len());
        let padding = " ".repeat(padding_len);

        let spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::raw(padding),
            Span::styled(right_info, Style::default().fg(self.accent_color)),
        ];

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_creation() {
        let status_bar = StatusBar::new()
            .file_count(10)
            .dir_count(5)
            .total_size("1.2 GB")
            .active_pane("RIGHT");

        assert_eq!(status_bar.file_count, 10);
        assert_eq!(status_bar.dir_count, 5);
        assert_eq!(status_bar.total_size, "1.2 GB");
        assert_eq!(status_bar.active_pane, "RIGHT");
    }
}
