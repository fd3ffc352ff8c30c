//! # Menu
//!
//! An ordered list of selectable entries with a cursor. Every screen that
//! needs a pick-one UI owns one of these: the launcher for the command
//! menu, the create screen for its language/template pair. Entry identity
//! is positional; the menu never reorders what it was given.
//!
//! The rendered view is plain text: a title, then each entry as a
//! title/description pair with a cursor marker, windowed to the configured
//! height so the selection stays visible.

use crate::core::event::{Event, Key};
use crate::core::screen::Screen;

/// Number of rendered rows per entry (title + description).
const ENTRY_ROWS: usize = 2;
/// Rows consumed by the menu title and the blank line under it.
const HEADER_ROWS: usize = 2;

/// One selectable row: a label, a description, and (for command menus) the
/// screen that owns the interaction once the entry is activated. Choice
/// entries inside sub-menus carry no screen.
pub struct MenuEntry {
    pub title: String,
    pub description: String,
    pub screen: Option<Screen>,
}

impl MenuEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            screen: None,
        }
    }

    pub fn with_screen(
        title: impl Into<String>,
        description: impl Into<String>,
        screen: Screen,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            screen: Some(screen),
        }
    }
}

pub struct Menu {
    title: String,
    entries: Vec<MenuEntry>,
    cursor: usize,
    width: u16,
    height: u16,
}

impl Menu {
    pub fn new(title: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
            cursor: 0,
            width: 0,
            height: 0,
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Fold one event into the cursor. Keys that don't move the selection
    /// are ignored here; interpreting Enter is the owner's business.
    pub fn update(&mut self, event: &Event) {
        let Event::Key(key) = event else { return };
        match key {
            Key::Up | Key::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            Key::Down | Key::Char('j') => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                }
            }
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.entries.len().saturating_sub(1),
            _ => {}
        }
    }

    pub fn selected(&self) -> Option<&MenuEntry> {
        self.entries.get(self.cursor)
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.cursor)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut MenuEntry> {
        self.entries.get_mut(index)
    }

    pub fn view(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        let (start, end) = self.visible_range();
        for (i, entry) in self.entries[start..end].iter().enumerate() {
            let marker = if start + i == self.cursor { "❯ " } else { "  " };
            out.push('\n');
            out.push_str(&self.fit(format!("{marker}{}", entry.title)));
            out.push('\n');
            out.push_str(&self.fit(format!("    {}", entry.description)));
        }
        out
    }

    fn fit(&self, row: String) -> String {
        if self.width == 0 {
            row
        } else {
            truncate_str(&row, self.width as usize)
        }
    }

    /// Window of entries that fits the configured height, shifted so the
    /// cursor is always inside it. A zero height (size never set) shows
    /// everything.
    fn visible_range(&self) -> (usize, usize) {
        let total = self.entries.len();
        if self.height == 0 {
            return (0, total);
        }
        let rows = (self.height as usize).saturating_sub(HEADER_ROWS);
        let fit = (rows / ENTRY_ROWS).max(1).min(total.max(1));
        let start = (self.cursor + 1).saturating_sub(fit).min(total.saturating_sub(fit));
        (start, (start + fit).min(total))
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}
