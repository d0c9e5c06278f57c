// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 표시되는 경고 화면

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    /// 경고 색상
    warning_color: Color,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning;
        self.bg_color = theme.panel_bg;
        self.fg_color = theme.file_normal;
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (width, height) = self.current_size;
        let lines = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Current: {}x{}", width, height),
                Style::default().fg(self.fg_color),
            )),
            Line::from(Span::styled(
                format!("Required: {}x{}", MIN_WIDTH, MIN_HEIGHT),
                Style::default().fg(self.fg_color),
            )),
        ];

        let vertical_offset = area.height.saturating_sub(lines.len() as u16) / 2;
        let centered = Rect::new(
            area.x,
            area.y + vertical_offset,
            area.width,
            (lines.len() as u16).min(area.height),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered, buf);
    }
}
