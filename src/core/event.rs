//! # Events
//!
//! Everything the launcher reacts to arrives as an `Event`: a translated
//! keypress, a terminal resize, or the resolution of a previously issued
//! action. Events are consumed one at a time, in arrival order, and each
//! one is fully folded into the state before the next is looked at.
//!
//! The keybinding surface lives here too, so every screen agrees on what
//! quit/activate/back/help mean. Screens are free to claim additional keys
//! (the create screen uses 'c' to confirm), but never these four.

use crate::core::action::ActionResult;

/// A single key input, already translated from the terminal backend.
///
/// The `tui` adapter maps crossterm key and mouse-scroll events onto this
/// enum; the core never sees backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    CtrlC,
}

impl Key {
    /// Quit keys terminate the whole program from any state.
    pub fn is_quit(self) -> bool {
        matches!(self, Key::CtrlC | Key::Char('q'))
    }

    /// Enter activates the current menu selection.
    pub fn is_activate(self) -> bool {
        matches!(self, Key::Enter)
    }

    /// Esc steps back: out of a help pager, or out of the active screen.
    pub fn is_back(self) -> bool {
        matches!(self, Key::Esc)
    }

    /// '?' shows the help pager on screens that carry one.
    pub fn is_help_toggle(self) -> bool {
        matches!(self, Key::Char('?'))
    }
}

/// One unit of input for the launcher state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    /// New terminal dimensions (width, height). The launcher subtracts the
    /// layout margins before forwarding to menus and screens, so components
    /// below the launcher always see content-area sizes.
    Resize(u16, u16),
    /// Resolution of an action, delivered through the same serialized
    /// channel as user input.
    ActionResult(ActionResult),
}
