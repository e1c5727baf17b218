//! Keyboard chords recognised by the chat input.

use egui::Modifiers;

/// Enter on its own sends; Enter with any modifier (Shift, Ctrl, Alt, Cmd) does not.
pub fn is_submit_chord(enter_pressed: bool, modifiers: Modifiers) -> bool {
    enter_pressed && modifiers.is_none()
}
