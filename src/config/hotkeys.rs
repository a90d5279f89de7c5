//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per input context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Global actions
    OpenDrawer,
    Quit,
    CycleTheme,
    ToggleLog,

    // Drawer actions
    CloseDrawer,
    Select,

    // Screen actions
    Next,
    Previous,
    Increase,
    Decrease,
    Activate,
    Submit,
    Delete,
    SwitchFocus,

    // Dialog actions
    Confirm,
    Cancel,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Plain key without modifiers.
    ///
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => {
                if let Some(c) = helper.char {
                    KeyCode::Char(c)
                } else {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ));
                }
            }
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Represents the input contexts that have their own hotkey configurations.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyContext {
    Global,
    Drawer,
    Screen,
    Dialog,
}

/// Maps hotkey actions to their key bindings for each input context.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHotkeys {
    #[serde(default)]
    pub global: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub drawer: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub screen: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub dialog: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ContextHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ContextHotkeys {
    /// Return the bindings of one context.
    ///
    pub fn for_context(&self, context: HotkeyContext) -> &HashMap<HotkeyAction, Hotkey> {
        match context {
            HotkeyContext::Global => &self.global,
            HotkeyContext::Drawer => &self.drawer,
            HotkeyContext::Screen => &self.screen,
            HotkeyContext::Dialog => &self.dialog,
        }
    }

    /// Return these bindings with `overrides` replacing matching actions.
    ///
    pub fn merged(mut self, overrides: ContextHotkeys) -> Self {
        self.global.extend(overrides.global);
        self.drawer.extend(overrides.drawer);
        self.screen.extend(overrides.screen);
        self.dialog.extend(overrides.dialog);
        self
    }
}

/// Returns default hotkey mappings for all contexts.
///
pub fn default_hotkeys() -> ContextHotkeys {
    let global = HashMap::from([
        (HotkeyAction::OpenDrawer, Hotkey::plain(KeyCode::Char('m'))),
        (HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q'))),
        (HotkeyAction::CycleTheme, Hotkey::plain(KeyCode::Char('t'))),
        (
            HotkeyAction::ToggleLog,
            Hotkey {
                code: KeyCode::Char('L'),
                modifiers: KeyModifiers::SHIFT,
            },
        ),
    ]);

    let drawer = HashMap::from([
        (HotkeyAction::Next, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::Previous, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::Select, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::CloseDrawer, Hotkey::plain(KeyCode::Esc)),
    ]);

    let screen = HashMap::from([
        (HotkeyAction::Next, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::Previous, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::Increase, Hotkey::plain(KeyCode::Char('l'))),
        (HotkeyAction::Decrease, Hotkey::plain(KeyCode::Char('h'))),
        (HotkeyAction::Activate, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::Submit, Hotkey::plain(KeyCode::Char('s'))),
        (HotkeyAction::Delete, Hotkey::plain(KeyCode::Char('d'))),
        (HotkeyAction::SwitchFocus, Hotkey::plain(KeyCode::Tab)),
    ]);

    let dialog = HashMap::from([
        (HotkeyAction::Confirm, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::Cancel, Hotkey::plain(KeyCode::Esc)),
    ]);

    ContextHotkeys {
        global,
        drawer,
        screen,
        dialog,
    }
}

/// Keys that always map to an action regardless of configuration.
///
fn builtin_action(event: &KeyEvent, context: HotkeyContext) -> Option<HotkeyAction> {
    match (context, event.code) {
        (HotkeyContext::Drawer | HotkeyContext::Screen, KeyCode::Down) => Some(HotkeyAction::Next),
        (HotkeyContext::Drawer | HotkeyContext::Screen, KeyCode::Up) => {
            Some(HotkeyAction::Previous)
        }
        (HotkeyContext::Screen, KeyCode::Right | KeyCode::Char('+')) => {
            Some(HotkeyAction::Increase)
        }
        (HotkeyContext::Screen, KeyCode::Left | KeyCode::Char('-')) => {
            Some(HotkeyAction::Decrease)
        }
        (HotkeyContext::Screen, KeyCode::Char(' ')) => Some(HotkeyAction::Activate),
        _ => None,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action for a KeyEvent in a specific context.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    context: HotkeyContext,
    hotkeys: &ContextHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_context(context)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| action.clone())
        .or_else(|| builtin_action(event, context))
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let paired = paired_action.as_ref().and_then(|p| hotkeys.get(p));
            Some(match paired {
                Some(paired_hotkey) => format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                ),
                None => format!(" {}: {}", format_hotkey_display(hotkey), description),
            })
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::plain(KeyCode::Char('j'));
        assert!(matches_hotkey(&key(KeyCode::Char('j')), &hotkey));
        assert!(!matches_hotkey(&key(KeyCode::Char('k')), &hotkey));
    }

    #[test]
    fn test_get_action_for_event() {
        let hotkeys = default_hotkeys();
        let event = key(KeyCode::Char('m'));
        assert_eq!(
            get_action_for_event(&event, HotkeyContext::Global, &hotkeys),
            Some(HotkeyAction::OpenDrawer)
        );
        assert_eq!(
            get_action_for_event(&key(KeyCode::Esc), HotkeyContext::Drawer, &hotkeys),
            Some(HotkeyAction::CloseDrawer)
        );
        assert_eq!(
            get_action_for_event(&key(KeyCode::Esc), HotkeyContext::Dialog, &hotkeys),
            Some(HotkeyAction::Cancel)
        );
    }

    #[test]
    fn test_builtin_arrows() {
        let hotkeys = default_hotkeys();
        assert_eq!(
            get_action_for_event(&key(KeyCode::Down), HotkeyContext::Drawer, &hotkeys),
            Some(HotkeyAction::Next)
        );
        assert_eq!(
            get_action_for_event(&key(KeyCode::Char('+')), HotkeyContext::Screen, &hotkeys),
            Some(HotkeyAction::Increase)
        );
        assert_eq!(
            get_action_for_event(&key(KeyCode::Char('+')), HotkeyContext::Global, &hotkeys),
            None
        );
    }

    #[test]
    fn test_shift_binding() {
        let hotkeys = default_hotkeys();
        let event = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert_eq!(
            get_action_for_event(&event, HotkeyContext::Global, &hotkeys),
            Some(HotkeyAction::ToggleLog)
        );
    }

    #[test]
    fn test_merged_overrides_single_action() {
        let overrides = ContextHotkeys {
            global: HashMap::from([(HotkeyAction::OpenDrawer, Hotkey::plain(KeyCode::Tab))]),
            drawer: HashMap::new(),
            screen: HashMap::new(),
            dialog: HashMap::new(),
        };
        let hotkeys = default_hotkeys().merged(overrides);
        assert_eq!(
            hotkeys.global.get(&HotkeyAction::OpenDrawer),
            Some(&Hotkey::plain(KeyCode::Tab))
        );
        assert_eq!(
            hotkeys.global.get(&HotkeyAction::Quit),
            Some(&Hotkey::plain(KeyCode::Char('q')))
        );
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys.screen,
            &[
                (HotkeyAction::Next, "move", Some(HotkeyAction::Previous)),
                (HotkeyAction::Submit, "check", None),
                (HotkeyAction::CycleTheme, "absent", None),
            ],
        );
        assert_eq!(text, " j/k: move, s: check");
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::Char(' '))), "Space");
        let hotkey = Hotkey {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(format_hotkey_display(&hotkey), "Ctrl+c");
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::plain(KeyCode::Char('j'));
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("j"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);
    }

    #[test]
    fn test_char_code_requires_char_field() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }
}
