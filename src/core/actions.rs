//! 액션 시스템 — 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToParent,
    EnterSelected,
    TogglePane,
    PromptPath,
    // File Operations
    /// 왼쪽 패널 선택 항목을 오른쪽으로 이동 (왼쪽 패널 활성 시에만)
    MoveSelectedRight,
    /// 오른쪽 패널 선택 항목을 왼쪽으로 이동 (오른쪽 패널 활성 시에만)
    MoveSelectedLeft,
    // System
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::TogglePane,
        id: "toggle_pane",
        label: "Switch pane",
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Switch",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::PromptPath,
        id: "prompt_path",
        label: "Go to path",
        command_bar: Some(CommandBarEntry {
            key: "Sp",
            label: "GoTo",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up",
        command_bar: Some(CommandBarEntry {
            key: "↑/↓",
            label: "Cursor",
            priority: 12,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        command_bar: None,
    },
    ActionDef {
        action: Action::EnterSelected,
        id: "enter",
        label: "Enter dir",
        command_bar: Some(CommandBarEntry {
            key: "Ent",
            label: "Open",
            priority: 13,
        }),
    },
    ActionDef {
        action: Action::GoToParent,
        id: "go_parent",
        label: "Parent dir",
        command_bar: Some(CommandBarEntry {
            key: "Bks",
            label: "Up",
            priority: 14,
        }),
    },
    // File Operations
    ActionDef {
        action: Action::MoveSelectedRight,
        id: "move_right",
        label: "Move file to right pane",
        command_bar: Some(CommandBarEntry {
            key: "←/→",
            label: "Move",
            priority: 15,
        }),
    },
    ActionDef {
        action: Action::MoveSelectedLeft,
        id: "move_left",
        label: "Move file to left pane",
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        command_bar: Some(CommandBarEntry {
            key: "^C",
            label: "Quit",
            priority: 20,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 패널 전환
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::TogglePane,
        },
        // 경로 입력
        KeyBinding {
            code: KeyCode::Char(' '),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::PromptPath,
        },
        // 탐색
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Backspace,
            modifiers: None,
            action: Action::GoToParent,
        },
        // 파일 이동 (방향키는 활성 패널에 따라 컨트롤러가 걸러낸다)
        KeyBinding {
            code: KeyCode::Right,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveSelectedRight,
        },
        KeyBinding {
            code: KeyCode::Left,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveSelectedLeft,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action_basic_bindings() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Tab),
            Some(Action::TogglePane)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char(' ')),
            Some(Action::PromptPath)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Up),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Down),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::EnterSelected)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Backspace),
            Some(Action::GoToParent)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Right),
            Some(Action::MoveSelectedRight)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Left),
            Some(Action::MoveSelectedLeft)
        );
    }

    #[test]
    fn test_find_action_quit() {
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        // 수정자 없는 'c'는 액션 아님
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('c')), None);
    }

    #[test]
    fn test_find_action_unknown_key() {
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('z')), None);
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::F(5)), None);
    }

    /// 수정자가 붙은 방향키는 이동 액션으로 처리하지 않는다
    #[test]
    fn test_arrow_with_modifier_ignored() {
        assert_eq!(find_action(KeyModifiers::ALT, KeyCode::Right), None);
        assert_eq!(find_action(KeyModifiers::ALT, KeyCode::Left), None);
    }

    /// 레지스트리 일관성: 바인딩된 모든 액션은 정의가 있고 id는 유일
    #[test]
    fn test_registry_consistency() {
        for binding in key_bindings() {
            assert!(
                ACTION_DEFS.iter().any(|def| def.action == binding.action),
                "binding without ActionDef: {:?}",
                binding.action
            );
        }

        for (i, def) in ACTION_DEFS.iter().enumerate() {
            assert!(!def.label.is_empty());
            for other in &ACTION_DEFS[i + 1..] {
                assert_ne!(def.id, other.id, "duplicate action id: {}", def.id);
            }
        }
    }

    #[test]
    fn test_command_bar_items_sorted() {
        let items = generate_command_bar_items();

        assert!(!items.is_empty());
        assert_eq!(items[0].key, "Tab");
        assert_eq!(items.last().unwrap().key, "^C");
    }
}
