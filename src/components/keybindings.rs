//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current screen.
//! The event loop resolves keys to actions here; the nav bar and help overlay
//! read the same registry, so hints never drift from behavior.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PreviousOption,
    NextOption,
    /// Pick the highlighted answer
    Select,
    /// Pick an answer by its Likert value
    Answer(u8),
    /// Start the survey / go to the next question
    Next,
    Back,
    Restart,
    Quit,
    Help,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        // Shift is implied by characters like '?' on most layouts
        let shifted_plain = self.modifiers.is_empty() && modifiers == KeyModifiers::SHIFT;
        self.key == key && (self.modifiers == modifiers || shifted_plain)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Welcome,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous status"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next status"),
                Keybinding::new(KeyCode::Left, KeyAction::NavigateUp, "Left", "Previous status"),
                Keybinding::new(KeyCode::Right, KeyAction::NavigateDown, "Right", "Next status"),
                Keybinding::new(KeyCode::Enter, KeyAction::Next, "Enter", "Start survey"),
            ],
        );

        let mut question_bindings = vec![
            Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Previous answer"),
            Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Next answer"),
            Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", "Choose answer"),
        ];
        for value in 1..=5u8 {
            let digit = char::from(b'0' + value);
            question_bindings.push(Keybinding::new(
                KeyCode::Char(digit),
                KeyAction::Answer(value),
                "1-5",
                "Choose answer by number",
            ));
        }
        question_bindings.extend([
            Keybinding::new(KeyCode::Enter, KeyAction::Next, "Enter", "Next question"),
            Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Previous question"),
            Keybinding::new(KeyCode::Backspace, KeyAction::Back, "Bksp", "Previous question"),
        ]);
        self.mode_bindings.insert(AppMode::Question, question_bindings);

        self.mode_bindings.insert(
            AppMode::Results,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Review answers"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Restart, "R", "New survey"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press in `mode` to an action
    pub fn resolve(&self, mode: &AppMode, key: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Welcome => vec![
                KeyAction::NavigateUp,
                KeyAction::Next,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Question => vec![
                KeyAction::PreviousOption,
                KeyAction::Answer(1),
                KeyAction::Next,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Results => vec![
                KeyAction::NavigateUp,
                KeyAction::Restart,
                KeyAction::Back,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            let Some(binding) = bindings.iter().find(|b| b.action == action) else {
                continue;
            };
            // Paired directions collapse into one hint
            let item = match action {
                KeyAction::NavigateUp => NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: if *mode == AppMode::Results { "Scroll" } else { "Status" }.to_string(),
                },
                KeyAction::PreviousOption => NavBarItem {
                    key_display: "Left/Right".to_string(),
                    action_label: "Answer".to_string(),
                },
                _ => NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                },
            };
            items.push(item);
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousOption
                        | KeyAction::NextOption
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select | KeyAction::Answer(_) | KeyAction::Next | KeyAction::Restart
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(mode);
        let mut sections = Vec::new();
        for (title, belongs) in groups {
            let mut items: Vec<(String, String)> = Vec::new();
            for b in bindings.iter().filter(|b| belongs(&b.action)) {
                let entry = (b.display.clone(), b.description.clone());
                // The five digit keys share one row
                if !items.contains(&entry) {
                    items.push(entry);
                }
            }
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }
        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
