mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use crate::core::actions::{find_action, generate_command_bar_items};
use anyhow::Context;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::PaneState;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use ui::{
    ActivePanel, CommandBar, Dialog, DialogKind, LayoutMode, Panel, PanelStatus, StatusBar, Theme,
    WarningScreen,
};
use utils::error::DuoPaneError;
use utils::formatter::format_file_size;
use utils::paths::normalize_input;

fn main() -> anyhow::Result<()> {
    // 지원하지 않는 플랫폼은 UI를 만들기 전에 정상 종료
    if cfg!(windows) {
        println!("Sorry, this program is not supported on Windows");
        return Ok(());
    }

    let (left_path, right_path) = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(paths) => paths,
        Err(DuoPaneError::Config(message)) => {
            println!("{}", message);
            std::process::exit(1);
        }
        Err(err) => {
            println!("{}", err);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(left_path, right_path);

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// 인자 파싱: 시작 디렉토리 2개 (모자라거나 넘치면 사용법 에러)
fn parse_args(args: &[String]) -> utils::error::Result<(PathBuf, PathBuf)> {
    if args.len() != 3 {
        let program = args
            .first()
            .map(String::as_str)
            .unwrap_or(env!("CARGO_PKG_NAME"));
        return Err(DuoPaneError::Config(format!(
            "Usage: {} <dir1> <dir2>",
            program
        )));
    }

    Ok((normalize_input(&args[1]), normalize_input(&args[2])))
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(&app.theme);
                    f.render_widget(warning, size);
                }
                LayoutMode::DualPanel => {
                    render_main_ui(f, app);
                }
            }
        })?;

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.is_dialog_active() {
                    handle_dialog_keys(app, key.modifiers, key.code);
                } else {
                    handle_normal_keys(app, key.modifiers, key.code);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match &app.dialog {
        Some(DialogKind::PathInput { .. }) => handle_input_dialog_keys(app, modifiers, code),
        Some(DialogKind::Error { .. }) => handle_message_dialog_keys(app, modifiers, code),
        None => {}
    }
}

/// 경로 입력 다이얼로그 키 처리
fn handle_input_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        // 종료 단축키는 다이얼로그에서도 동작
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        // 확정
        (_, KeyCode::Enter) => app.confirm_path_input(),
        // 취소
        (_, KeyCode::Esc) => app.close_dialog(),
        // 문자 입력
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.dialog_input_char(c),
        // 편집
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        // 커서 이동
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}

/// 에러 다이얼로그 키 처리
fn handle_message_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        (_, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) => app.close_dialog(),
        _ => {}
    }
}

/// 패널 위젯 생성 + 렌더링 (좌/우 공통)
fn render_panel(
    f: &mut ratatui::Frame<'_>,
    pane: &PaneState,
    is_active: bool,
    theme: &Theme,
    area: Rect,
) {
    let path = pane.current_path.to_string_lossy();
    let panel = Panel::new()
        .title(&path)
        .status(if is_active {
            PanelStatus::Active
        } else {
            PanelStatus::Inactive
        })
        .entries(&pane.entries)
        .selected_index(pane.selected_index)
        .scroll_offset(pane.scroll_offset)
        .error(pane.error_message())
        .theme(theme);
    f.render_widget(panel, area);
}

/// 상태바 데이터 수집 + 렌더링
fn render_status_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let pane = app.active_pane_state();
    let total_size = format_file_size(pane.total_size());
    let active_pane = match app.active_panel() {
        ActivePanel::Left => "LEFT",
        ActivePanel::Right => "RIGHT",
    };

    let status_bar = StatusBar::new()
        .file_count(pane.file_count())
        .dir_count(pane.dir_count())
        .total_size(&total_size)
        .active_pane(active_pane)
        .theme(theme);
    f.render_widget(status_bar, area);
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas().clone();
    let active_panel = app.active_panel();
    let theme = &app.theme;

    render_panel(
        f,
        &app.left_pane,
        active_panel == ActivePanel::Left,
        theme,
        areas.left_panel,
    );
    render_panel(
        f,
        &app.right_pane,
        active_panel == ActivePanel::Right,
        theme,
        areas.right_panel,
    );

    render_status_bar(f, app, theme, areas.status_bar);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items())
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_two_directories() {
        let parsed = parse_args(&args(&["duopane", "/tmp", "/var"])).unwrap();
        assert_eq!(parsed.0, PathBuf::from("/tmp"));
        assert_eq!(parsed.1, PathBuf::from("/var"));
    }

    /// 인자도 입력 경로처럼 정규화된다
    #[test]
    fn test_parse_args_normalizes() {
        let parsed = parse_args(&args(&["duopane", "tmp", " /var "])).unwrap();
        assert_eq!(parsed.0, PathBuf::from("/tmp"));
        assert_eq!(parsed.1, PathBuf::from("/var"));
    }

    #[test]
    fn test_parse_args_wrong_count() {
        let too_few = parse_args(&args(&["duopane", "/tmp"]));
        assert!(matches!(too_few, Err(DuoPaneError::Config(_))));
        let message = too_few.unwrap_err().to_string();
        assert!(message.contains("Usage"));

        let too_many = parse_args(&args(&["duopane", "/a", "/b", "/c"]));
        assert!(matches!(too_many, Err(DuoPaneError::Config(_))));
    }
}
