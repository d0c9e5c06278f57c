// Panel component - 파일 패널 컴포넌트
//
// 파일 리스트 표시, 커서 행, 테두리, 에러 상태 렌더링

use crate::models::file_entry::{FileEntry, FileType};
use crate::ui::Theme;
use crate::utils::formatter::{format_date, format_file_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 패널 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Inactive,
    Active,
}

/// 패널 컴포넌트
pub struct Panel<'a> {
    /// 패널 제목 (경로)
    title: &'a str,
    /// 패널 상태
    status: PanelStatus,
    /// 행 목록 (".." 포함)
    entries: &'a [FileEntry],
    /// 커서 위치
    selected_index: usize,
    /// 스크롤 오프셋
    scroll_offset: usize,
    /// 에러 메시지 (설정 시 목록 대신 표시)
    error: Option<&'a str>,
    /// 활성 테두리 색상
    active_border_color: Color,
    /// 비활성 테두리 색상
    inactive_border_color: Color,
    /// 패널 배경색
    bg_color: Color,
    /// 파일 일반 색상
    file_normal_color: Color,
    /// 커서 행 색상
    file_selected_color: Color,
    /// 커서 행 배경색
    file_selected_bg_color: Color,
    /// 디렉토리 색상
    directory_color: Color,
    /// 실행 파일 색상
    executable_color: Color,
    /// 심볼릭 링크 색상
    symlink_color: Color,
    /// 에러 표시 색상
    error_color: Color,
}

impl<'a> Default for Panel<'a> {
    fn default() -> Self {
        Self {
            title: "",
            status: PanelStatus::default(),
            entries: &[],
            selected_index: 0,
            scroll_offset: 0,
            error: None,
            active_border_color: Color::Rgb(0, 120, 212),
            inactive_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            file_normal_color: Color::Rgb(212, 212, 212),
            file_selected_color: Color::Rgb(255, 255, 255),
            file_selected_bg_color: Color::Rgb(0, 120, 212),
            directory_color: Color::Rgb(86, 156, 214),
            executable_color: Color::Rgb(78, 201, 176),
            symlink_color: Color::Rgb(206, 145, 120),
            error_color: Color::Rgb(224, 108, 117),
        }
    }
}

impl<'a> Panel<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 제목 설정
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// 패널 상태 설정
    pub fn status(mut self, status: PanelStatus) -> Self {
        self.status = status;
        self
    }

    /// 행 목록 설정
    pub fn entries(mut self, entries: &'a [FileEntry]) -> Self {
        self.entries = entries;
        self
    }

    /// 커서 인덱스 설정
    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    /// 스크롤 오프셋 설정
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// 에러 메시지 설정 (목록 대신 표시)
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_border_color = theme.panel_active_border;
        self.inactive_border_color = theme.panel_inactive_border;
        self.bg_color = theme.panel_bg;
        self.file_normal_color = theme.file_normal;
        self.file_selected_color = theme.file_selected;
        self.file_selected_bg_color = theme.file_selected_bg;
        self.directory_color = theme.directory;
        self.executable_color = theme.executable;
        self.symlink_color = theme.symlink;
        self.error_color = theme.error;
        self
    }

    /// 테두리 색상 반환
    fn border_color(&self) -> Color {
        match self.status {
            PanelStatus::Active => self.active_border_color,
            PanelStatus::Inactive => self.inactive_border_color,
        }
    }

    /// 제목 스타일 반환
    fn title_style(&self) -> Style {
        let base = Style::default().fg(self.file_normal_color);
        match self.status {
            PanelStatus::Active => base.add_modifier(Modifier::BOLD),
            PanelStatus::Inactive => base,
        }
    }

    /// 파일 타입에 따른 아이콘 반환 (표시 전용)
    fn file_icon(file_type: &FileType) -> &'static str {
        match file_type {
            FileType::ParentDir => "  ",
            FileType::Directory => "📁",
            FileType::File => "📄",
            FileType::Executable => "🔧",
            FileType::Symlink => "🔗",
        }
    }

    /// 파일 타입에 따른 색상 반환 (커서 행 제외)
    fn file_color(&self, file_type: &FileType) -> Color {
        match file_type {
            FileType::ParentDir | FileType::Directory => self.directory_color,
            FileType::Executable => self.executable_color,
            FileType::Symlink => self.symlink_color,
            FileType::File => self.file_normal_color,
        }
    }

    /// 경로를 앞에서부터 잘라 최대 너비에 맞춤
    fn truncate_path(path: &str, max_width: usize) -> String {
        if path.width() <= max_width {
            return path.to_string();
        }

        let ellipsis = "...";
        let available_width = max_width.saturating_sub(ellipsis.width());

        let mut result = String::new();
        let mut current_width = 0;

        for ch in path.chars().rev() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width > available_width {
                break;
            }
            result.insert(0, ch);
            current_width += ch_width;
        }

        format!("{}{}", ellipsis, result)
    }

    /// 이름을 컬럼 너비에 맞게 자르고 패딩
    fn fit_name(name: &str, width: usize) -> String {
        let mut result = String::new();
        let mut current_width = 0;

        for ch in name.chars() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width > width {
                break;
            }
            result.push(ch);
            current_width += ch_width;
        }

        result.push_str(&" ".repeat(width.saturating_sub(current_width)));
        result
    }
}

/// 컬럼 레이아웃 정보
struct ColumnLayout {
    show_size: bool,
    show_date: bool,
    name_width: usize,
}

impl ColumnLayout {
    const SIZE_WIDTH: usize = 9;
    const DATE_WIDTH: usize = 16;
    const MARGINS: usize = 5; // 아이콘 + 컬럼 간격

    /// 패널 너비 기반 컬럼 표시 여부/크기 결정
    fn calculate(width: usize) -> Self {
        let (show_size, show_date) = match width {
            w if w >= 56 => (true, true),
            w if w >= 34 => (true, false),
            _ => (false, false),
        };

        let size_width = if show_size { Self::SIZE_WIDTH } else { 0 };
        let date_width = if show_date { Self::DATE_WIDTH } else { 0 };
        let name_width = width
            .saturating_sub(size_width)
            .saturating_sub(date_width)
            .saturating_sub(Self::MARGINS);

        Self {
            show_size,
            show_date,
            name_width,
        }
    }
}

impl Panel<'_> {
    /// 헤더 행 + 구분선 렌더링. y를 2 증가시킨다.
    fn render_header(&self, layout: &ColumnLayout, inner: Rect, buf: &mut Buffer, y: &mut u16) {
        let header_style = Style::default()
            .fg(Color::Rgb(150, 150, 150))
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::raw("    ")];
        spans.push(Span::styled(
            format!("{:<width$}", "Name", width = layout.name_width),
            header_style,
        ));
        if layout.show_size {
            spans.push(Span::styled(
                format!("{:>width$}", "Size", width = ColumnLayout::SIZE_WIDTH),
                header_style,
            ));
        }
        if layout.show_date {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{:<width$}", "Modified", width = ColumnLayout::DATE_WIDTH),
                header_style,
            ));
        }
        buf.set_line(inner.x, *y, &Line::from(spans), inner.width);
        *y += 1;

        let separator = "─".repeat(inner.width as usize);
        buf.set_line(
            inner.x,
            *y,
            &Line::from(Span::styled(
                separator,
                Style::default().fg(self.inactive_border_color),
            )),
            inner.width,
        );
        *y += 1;
    }

    /// 엔트리 한 행의 스팬 구성
    fn entry_line(&self, entry: &FileEntry, layout: &ColumnLayout, selected: bool) -> Line<'_> {
        let fg = if selected {
            self.file_selected_color
        } else {
            self.file_color(&entry.file_type)
        };
        let mut style = Style::default().fg(fg);
        if selected {
            style = style.bg(self.file_selected_bg_color);
        }

        // ".." 행은 이름만 표시
        if entry.is_parent() {
            return Line::from(Span::styled("    ..".to_string(), style));
        }

        let mut text = format!(
            " {} {}",
            Self::file_icon(&entry.file_type),
            Self::fit_name(&entry.name, layout.name_width),
        );
        if layout.show_size {
            let size = if entry.is_directory() {
                "<DIR>".to_string()
            } else {
                format_file_size(entry.size)
            };
            text.push_str(&format!("{:>width$}", size, width = ColumnLayout::SIZE_WIDTH));
        }
        if layout.show_date {
            text.push(' ');
            text.push_str(&format_date(entry.modified));
        }

        Line::from(Span::styled(text, style))
    }
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let title = Self::truncate_path(self.title, area.width.saturating_sub(4) as usize);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(title, self.title_style()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // 에러 상태: 목록 대신 메시지 표시
        if let Some(message) = self.error {
            let line = Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(self.error_color),
            ));
            buf.set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(1));
            return;
        }

        let layout = ColumnLayout::calculate(inner.width as usize);
        let mut y = inner.y;
        self.render_header(&layout, inner, buf, &mut y);

        let visible_rows = inner.bottom().saturating_sub(y) as usize;
        for (row, entry) in self
            .entries
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_rows)
        {
            let selected = row == self.selected_index;
            let line = self.entry_line(entry, &layout, selected);
            buf.set_line(inner.x, y, &line, inner.width);
            if selected {
                // 커서 행은 전체 너비 배경 강조
                buf.set_style(
                    Rect::new(inner.x, y, inner.width, 1),
                    Style::default().bg(self.file_selected_bg_color),
                );
            }
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_path_short() {
        assert_eq!(Panel::truncate_path("/tmp", 20), "/tmp");
    }

    #[test]
    fn test_truncate_path_long() {
        let truncated = Panel::truncate_path("/very/long/path/to/somewhere/deep", 15);
        assert!(truncated.starts_with("..."));
        assert!(truncated.width() <= 15);
    }

    #[test]
    fn test_fit_name_pads_and_cuts() {
        assert_eq!(Panel::fit_name("ab", 4), "ab  ");
        assert_eq!(Panel::fit_name("abcdef", 4), "abcd");
    }

    #[test]
    fn test_column_layout_hides_columns_when_narrow() {
        let wide = ColumnLayout::calculate(60);
        assert!(wide.show_size);
        assert!(wide.show_date);

        let medium = ColumnLayout::calculate(40);
        assert!(medium.show_size);
        assert!(!medium.show_date);

        let narrow = ColumnLayout::calculate(20);
        assert!(!narrow.show_size);
        assert!(!narrow.show_date);
    }
}
