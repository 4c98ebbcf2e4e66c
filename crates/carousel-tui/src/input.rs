use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    DragNext,  // Push the content one step toward the next page
    DragPrev,
    Release,   // Lift the simulated pointer
    SnapTo(usize),
    ToggleAutoplay,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Uppercase letters may arrive without the SHIFT modifier
    if let KeyCode::Char(c) = key.code {
        if c.is_ascii_uppercase() {
            if let Some(action) = keymap.get(&KeyBinding::shift(key.code)) {
                return *action;
            }
        }
    }

    match (key.code, key.modifiers) {
        // 1-9 jump straight to a page
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::SnapTo(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}
