// Dialog component - 모달 다이얼로그 컴포넌트
//
// 경로 입력 다이얼로그와 에러 다이얼로그 렌더링

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// 다이얼로그 종류
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// 경로 입력 다이얼로그 (Space)
    PathInput {
        value: String,
        /// 바이트 단위 커서 위치
        cursor_pos: usize,
    },
    /// 에러 다이얼로그
    Error { title: String, message: String },
}

/// 다이얼로그 컴포넌트
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 테두리 색상
    border_color: Color,
    /// 에러 테두리 색상
    error_color: Color,
    /// 힌트 색상
    hint_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            error_color: Color::Rgb(224, 108, 117),
            hint_color: Color::Rgb(150, 150, 150),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg;
        self.fg_color = theme.file_normal;
        self.border_color = theme.accent;
        self.error_color = theme.error;
        self
    }

    /// 화면 중앙 사각형 계산
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }

    /// 입력 값을 커서 강조 포함 스팬으로 분해
    fn input_spans(&self, value: &str, cursor_pos: usize) -> Line<'static> {
        let base = Style::default().fg(self.fg_color);
        let cursor_style = Style::default()
            .fg(self.bg_color)
            .bg(self.fg_color)
            .add_modifier(Modifier::BOLD);

        let before = value[..cursor_pos].to_string();
        let cursor_char = value[cursor_pos..].chars().next();

        let mut spans = vec![Span::styled(before, base)];
        match cursor_char {
            Some(ch) => {
                let after_start = cursor_pos + ch.len_utf8();
                spans.push(Span::styled(ch.to_string(), cursor_style));
                spans.push(Span::styled(value[after_start..].to_string(), base));
            }
            // 커서가 끝에 있으면 빈 칸을 강조
            None => spans.push(Span::styled(" ".to_string(), cursor_style)),
        }

        Line::from(spans)
    }

    /// 경로 입력 다이얼로그 렌더링
    fn render_input(&self, area: Rect, buf: &mut Buffer, value: &str, cursor_pos: usize) {
        let dialog_area = Self::centered_rect(46, 4, area);
        Clear.render(dialog_area, buf);
        buf.set_style(dialog_area, Style::default().bg(self.bg_color));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .title(Span::styled(
                " Go to path ",
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.width < 2 || inner.height < 1 {
            return;
        }

        let line = self.input_spans(value, cursor_pos);
        buf.set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(1));

        if inner.height >= 2 {
            let hint = Line::from(Span::styled(
                "Enter: Go  Esc: Cancel",
                Style::default().fg(self.hint_color),
            ));
            buf.set_line(inner.x + 1, inner.y + 1, &hint, inner.width.saturating_sub(1));
        }
    }

    /// 에러 다이얼로그 렌더링
    fn render_error(&self, area: Rect, buf: &mut Buffer, title: &str, message: &str) {
        let dialog_area = Self::centered_rect(56, 6, area);
        Clear.render(dialog_area, buf);
        buf.set_style(dialog_area, Style::default().bg(self.bg_color));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.error_color))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.error_color)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.width < 2 || inner.height < 2 {
            return;
        }

        let body = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        );
        Paragraph::new(message.to_string())
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(self.hint_color),
        )))
        .alignment(Alignment::Center);
        hint.render(
            Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1),
            buf,
        );
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.kind {
            DialogKind::PathInput { value, cursor_pos } => {
                self.render_input(area, buf, value, *cursor_pos);
            }
            DialogKind::Error { title, message } => {
                self.render_error(area, buf, title, message);
            }
        }
    }
}
