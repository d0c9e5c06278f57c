// Theme - 색상 테마
//
// 내장 다크 테마 하나만 제공한다. 설정 파일 로딩 없음.

use ratatui::style::Color;

/// 색상 테마
///
/// 모든 위젯은 `.theme(&Theme)` 빌더 메서드로 색상을 받는다.
#[derive(Debug, Clone)]
pub struct Theme {
    // 패널
    pub panel_active_border: Color,
    pub panel_inactive_border: Color,
    pub panel_bg: Color,

    // 파일 리스트
    pub file_normal: Color,
    pub file_selected: Color,
    pub file_selected_bg: Color,
    pub directory: Color,
    pub executable: Color,
    pub symlink: Color,

    // UI 컴포넌트
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub command_bar_bg: Color,
    pub command_bar_key_fg: Color,
    pub command_bar_label_fg: Color,

    // 강조
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_active_border: Color::Rgb(0, 120, 212),
            panel_inactive_border: Color::Rgb(60, 60, 60),
            panel_bg: Color::Rgb(30, 30, 30),

            file_normal: Color::Rgb(212, 212, 212),
            file_selected: Color::Rgb(255, 255, 255),
            file_selected_bg: Color::Rgb(0, 120, 212),
            directory: Color::Rgb(86, 156, 214),
            executable: Color::Rgb(78, 201, 176),
            symlink: Color::Rgb(206, 145, 120),

            status_bar_bg: Color::Rgb(30, 30, 30),
            status_bar_fg: Color::Rgb(212, 212, 212),
            command_bar_bg: Color::Rgb(30, 30, 30),
            command_bar_key_fg: Color::Rgb(0, 120, 212),
            command_bar_label_fg: Color::Rgb(212, 212, 212),

            accent: Color::Rgb(0, 120, 212),
            warning: Color::Yellow,
            error: Color::Rgb(224, 108, 117),
        }
    }
}
