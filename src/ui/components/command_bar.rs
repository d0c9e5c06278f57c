// Command bar component - 하단 커맨드 바 컴포넌트
//
// 키 바인딩 힌트 표시. 항목은 액션 레지스트리에서 생성된다.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// 단축키 (Tab, Sp, ...)
    pub key: String,
    /// 레이블 (Switch, GoTo, ...)
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    /// 커맨드 항목들
    commands: Vec<CommandItem>,
    /// 배경색
    bg_color: Color,
    /// 전경색 (키)
    key_fg_color: Color,
    /// 전경색 (레이블)
    label_fg_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 커맨드 목록 설정
    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg;
        self.key_fg_color = theme.command_bar_key_fg;
        self.label_fg_color = theme.command_bar_label_fg;
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let mut spans = vec![Span::raw(" ")];
        for item in &self.commands {
            spans.push(Span::styled(item.key.clone(), key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(item.label.clone(), label_style));
            spans.push(Span::raw("  "));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("Tab", "Switch");
        assert_eq!(item.key, "Tab");
        assert_eq!(item.label, "Switch");
    }

    #[test]
    fn test_command_bar_commands() {
        let bar = CommandBar::new().commands(vec![
            CommandItem::new("Tab", "Switch"),
            CommandItem::new("^C", "Quit"),
        ]);
        assert_eq!(bar.commands.len(), 2);
    }
}
