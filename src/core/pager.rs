//! # Help Pager
//!
//! Read-only scrollable text viewer: a title rule on top, a body windowed
//! through its own [`Viewport`], and a bottom rule carrying the scroll
//! percentage. Screens embed one and feed it the events they don't want.
//!
//! The pager cannot size itself: it waits for the first `Resize` before
//! building its viewport, and until then renders a placeholder and ignores
//! keys. Later resizes only re-measure; the content survives unless
//! explicitly replaced.

use unicode_width::UnicodeWidthStr;

use crate::core::event::{Event, Key};
use crate::core::viewport::Viewport;

/// Rows taken by the header and footer rules.
const CHROME_ROWS: u16 = 2;

const PLACEHOLDER: &str = "\n  Initializing...";

pub struct HelpPager {
    title: String,
    content: String,
    viewport: Viewport,
    ready: bool,
}

impl HelpPager {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            viewport: Viewport::new(0, 0),
            ready: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Replace the displayed text and jump back to the top.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        if self.ready {
            self.reflow();
            self.viewport.scroll_to_top();
        }
    }

    pub fn handle(&mut self, event: &Event) {
        match event {
            Event::Resize(width, height) => {
                let body = height.saturating_sub(CHROME_ROWS);
                self.viewport.resize(*width, body);
                self.reflow();
                self.ready = true;
            }
            Event::Key(key) if self.ready => self.scroll(*key),
            // Keys before the first resize are inert.
            _ => {}
        }
    }

    pub fn view(&self) -> String {
        if !self.ready {
            return PLACEHOLDER.to_string();
        }
        format!("{}\n{}\n{}", self.header(), self.viewport.view(), self.footer())
    }

    fn scroll(&mut self, key: Key) {
        let page = self.viewport.height() as usize;
        match key {
            Key::Up => self.viewport.scroll_up(1),
            Key::Down => self.viewport.scroll_down(1),
            Key::PageUp => self.viewport.scroll_up(page),
            Key::PageDown => self.viewport.scroll_down(page),
            Key::Home => self.viewport.scroll_to_top(),
            Key::End => self.viewport.scroll_to_bottom(),
            _ => {}
        }
    }

    fn reflow(&mut self) {
        let width = (self.viewport.width() as usize).max(1);
        let wrapped = textwrap::fill(&self.content, width);
        self.viewport.set_content(&wrapped);
    }

    fn header(&self) -> String {
        let label = format!("┤ {} ├", self.title);
        rule_after(&label, self.viewport.width())
    }

    fn footer(&self) -> String {
        let pct = self.viewport.scroll_percent() * 100.0;
        let label = format!("┤{:3.0}%├", pct);
        rule_before(&label, self.viewport.width())
    }
}

/// `label` followed by a horizontal rule out to `width` cells.
fn rule_after(label: &str, width: u16) -> String {
    let fill = (width as usize).saturating_sub(label.width());
    format!("{label}{}", "─".repeat(fill))
}

/// A horizontal rule out to `width` cells, ending in `label`.
fn rule_before(label: &str, width: u16) -> String {
    let fill = (width as usize).saturating_sub(label.width());
    format!("{}{label}", "─".repeat(fill))
}
