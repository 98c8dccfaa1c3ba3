//! Prompt keybindings: key ids to prompt actions.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::input::KeyPress;

/// Control actions a text prompt understands. Printable characters map to `Insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptAction {
    Insert(char),
    Delete,
    Left,
    Right,
    First,
    Last,
    Next,
    Reset,
    Submit,
    Abort,
}

pub type KeyId = String;

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(|item| item.to_string()).collect())
    }
}

pub static DEFAULT_PROMPT_KEYBINDINGS: LazyLock<Vec<(PromptAction, Vec<KeyId>)>> =
    LazyLock::new(|| {
        use PromptAction::*;

        fn keys(ids: &[&str]) -> Vec<KeyId> {
            ids.iter().map(|id| id.to_string()).collect()
        }

        vec![
            (First, keys(&["home", "ctrl+a"])),
            (Last, keys(&["end", "ctrl+e"])),
            (Abort, keys(&["escape", "ctrl+c", "ctrl+d"])),
            (Reset, keys(&["ctrl+g"])),
            (Submit, keys(&["enter"])),
            (Delete, keys(&["backspace", "delete"])),
            (Next, keys(&["tab"])),
            (Left, keys(&["left"])),
            (Right, keys(&["right"])),
        ]
    });

/// Key id lookup table with per-action overrides on top of the defaults.
#[derive(Debug, Clone)]
pub struct PromptKeybindings {
    key_to_action: HashMap<KeyId, PromptAction>,
}

impl Default for PromptKeybindings {
    fn default() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
        };
        for (action, keys) in DEFAULT_PROMPT_KEYBINDINGS.iter() {
            for key in keys {
                bindings.key_to_action.insert(key.clone(), *action);
            }
        }
        bindings
    }
}

impl PromptKeybindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind `action`: its previous keys are dropped and `keys` now trigger it.
    pub fn set<K: Into<KeyBinding>>(&mut self, action: PromptAction, keys: K) {
        self.key_to_action.retain(|_, bound| *bound != action);
        let key_list = match keys.into() {
            KeyBinding::Single(key) => vec![key],
            KeyBinding::Multiple(keys) => keys,
        };
        for key in key_list {
            self.key_to_action.insert(key, action);
        }
    }

    pub fn action_for(&self, key: &KeyPress) -> Option<PromptAction> {
        match key {
            KeyPress::Text(ch) => Some(PromptAction::Insert(*ch)),
            KeyPress::Key(id) => self.key_to_action.get(*id).copied(),
            KeyPress::Unknown(_) => None,
        }
    }

    pub fn get_keys(&self, action: PromptAction) -> Vec<KeyId> {
        let mut keys: Vec<KeyId> = self
            .key_to_action
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }
}
