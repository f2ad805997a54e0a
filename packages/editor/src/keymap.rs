//! Platform-independent key handling for the editor view.

use serde::{Deserialize, Serialize};

use crate::actions;
use crate::behavior::Behavior;
use crate::errors::EditorError;
use crate::session::EditSession;

/// Platform-independent key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Escape,
    Tab,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyEvent {
    pub fn char(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: false,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
        }
    }
}

/// What the host should do after the editor has seen a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The editor consumed the key; the host must suppress its default
    /// handling.
    Handled,
    /// Not an editor shortcut; default handling proceeds.
    Ignored,
}

/// The editor's shortcut table. Ctrl+R toggles the selected blocks between
/// code and paragraph; everything else passes through.
pub fn handle_key_event<B: Behavior>(
    session: &mut EditSession<B>,
    event: &KeyEvent,
) -> Result<KeyDisposition, EditorError> {
    match event {
        KeyEvent {
            key: Key::Char('r'),
            ctrl: true,
        } => {
            actions::toggle_code_block(session)?;
            Ok(KeyDisposition::Handled)
        }
        _ => Ok(KeyDisposition::Ignored),
    }
}
