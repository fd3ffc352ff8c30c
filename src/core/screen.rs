//! # Screens
//!
//! A `Screen` is one unit of interactive state: it consumes events and
//! renders itself to a string. The launcher owns exactly one authoritative
//! screen at a time and treats them all uniformly through a closed enum;
//! commands without a real implementation get a [`PlaceholderScreen`], so
//! there is never a "does this entry have a screen?" probe at runtime.
//!
//! Dispatch is a plain `match`. Adding a screen variant means the compiler
//! walks you through every site that must learn about it.
//!
//! ## Event outcome
//!
//! `handle` reports whether the screen absorbed the event. The launcher
//! only cares for the back key: a screen showing its help pager consumes
//! Esc to close it, and only an ignored Esc deactivates the screen.

use log::debug;

use crate::core::action::{Action, ActionKind, ActionToken};
use crate::core::event::{Event, Key};
use crate::core::menu::{Menu, MenuEntry};
use crate::core::pager::HelpPager;

/// Whether a screen absorbed an event or left it for the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

/// Language runtimes offered by the create screen, in cycle order.
const LANGUAGES: &[&str] = &["node", "go", "python"];
/// Invocation templates offered by the create screen, in cycle order.
const TEMPLATES: &[&str] = &["http", "cloudevents"];

/// The create screen's confirm key.
const CONFIRM_KEY: char = 'c';

const CREATE_HELP: &str = "\
NAME
    funcpad create - Create a function project.

SYNOPSIS
    funcpad create [-l|--language] [-t|--template] [path]

DESCRIPTION
    Creates a new function project.

        $ funcpad create -l node -t http

    Creates a function in the current directory '.' which is written in the
    language runtime 'node' and handles HTTP events.

    If [path] is provided, the function is initialized at that path, creating
    the path if necessary.

    Inside the launcher, select Language or Template and press Enter to cycle
    through the available values, then press 'c' to create the project.

    Available language runtimes: node, go, python.
    Available templates: http, cloudevents.

EXAMPLES
    o Create a Node.js function (the default language runtime) in the current
      directory (the default path) which handles http events (the default
      template).
        $ funcpad create

    o Create a Node.js function in the directory 'myfunc'.
        $ funcpad create myfunc

    o Create a Go function which handles CloudEvents in ./myfunc.
        $ funcpad create -l go -t cloudevents myfunc";

const TEMPLATES_HELP: &str = "\
NAME
    funcpad templates - Browse reusable function templates.

DESCRIPTION
    Lists the templates available from the built-in repository. Each
    template pairs a language runtime with an invocation signature; 'http'
    handles plain HTTP requests, 'cloudevents' handles CloudEvents.

    Installing additional template repositories is done from the command
    line and is not part of this browser.";

/// One interactive state, dispatched by match everywhere.
pub enum Screen {
    Menu(MenuScreen),
    Create(CreateScreen),
    Placeholder(PlaceholderScreen),
}

impl Screen {
    /// One-time startup work, invoked lazily on first activation.
    pub fn initialize(&mut self) {
        match self {
            Screen::Menu(_) | Screen::Placeholder(_) => {}
            Screen::Create(s) => s.initialize(),
        }
    }

    /// Fold one event in, possibly originating a deferred action.
    pub fn handle(&mut self, event: &Event) -> (EventOutcome, Option<Action>) {
        match self {
            Screen::Menu(s) => (s.handle(event), None),
            Screen::Create(s) => s.handle(event),
            Screen::Placeholder(_) => (EventOutcome::Ignored, None),
        }
    }

    pub fn view(&self) -> String {
        match self {
            Screen::Menu(s) => s.view(),
            Screen::Create(s) => s.view(),
            Screen::Placeholder(s) => s.view(),
        }
    }
}

// ============================================================================
// MenuScreen
// ============================================================================

/// A screen that is just a menu, optionally with a help pager behind the
/// help-toggle key. The `display_help` flag is screen-local and persists
/// until toggled again or the screen is replaced.
pub struct MenuScreen {
    menu: Menu,
    help: Option<HelpPager>,
    display_help: bool,
}

impl MenuScreen {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            help: None,
            display_help: false,
        }
    }

    pub fn with_help(menu: Menu, help: HelpPager) -> Self {
        Self {
            menu,
            help: Some(help),
            display_help: false,
        }
    }

    /// The template browser reached from the root menu.
    pub fn templates() -> Self {
        let menu = Menu::new(
            "✦ Function templates ✦",
            vec![
                MenuEntry::new("http", "Handle plain HTTP requests"),
                MenuEntry::new("cloudevents", "Handle CloudEvents invocations"),
            ],
        );
        Self::with_help(menu, HelpPager::new("Templates", TEMPLATES_HELP))
    }

    fn handle(&mut self, event: &Event) -> EventOutcome {
        match event {
            // Both sub-components track every resize so whichever is hidden
            // is already sized when it gets revealed.
            Event::Resize(w, h) => {
                self.menu.set_size(*w, *h);
                if let Some(help) = &mut self.help {
                    help.handle(event);
                }
                EventOutcome::Consumed
            }
            Event::Key(key) if key.is_help_toggle() && self.help.is_some() => {
                self.display_help = !self.display_help;
                EventOutcome::Consumed
            }
            Event::Key(key) if key.is_back() => {
                if self.display_help {
                    self.display_help = false;
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            Event::Key(_) => {
                match (&mut self.help, self.display_help) {
                    (Some(help), true) => help.handle(event),
                    _ => self.menu.update(event),
                }
                EventOutcome::Consumed
            }
            Event::ActionResult(_) => EventOutcome::Ignored,
        }
    }

    fn view(&self) -> String {
        match (&self.help, self.display_help) {
            (Some(help), true) => help.view(),
            _ => self.menu.view(),
        }
    }
}

// ============================================================================
// CreateScreen
// ============================================================================

/// The interactive `create` subcommand: a two-entry menu over the project
/// parameters plus a help pager with the usage text. Confirming originates
/// a [`ActionKind::CreateProject`] action; the single pending token keeps
/// at most one create in flight and makes stale results inert.
pub struct CreateScreen {
    menu: Menu,
    help: HelpPager,
    display_help: bool,
    language: String,
    template: String,
    pending: Option<ActionToken>,
    status: Option<String>,
}

impl CreateScreen {
    pub fn new(language: impl Into<String>, template: impl Into<String>) -> Self {
        let language = language.into();
        let template = template.into();
        let menu = Menu::new(
            "✦ Create a new function project ✦",
            vec![
                MenuEntry::new("Language", language_description(&language)),
                MenuEntry::new("Template", template_description(&template)),
            ],
        );
        Self {
            menu,
            help: HelpPager::new("Help", CREATE_HELP),
            display_help: false,
            language,
            template,
            pending: None,
            status: None,
        }
    }

    fn initialize(&mut self) {
        if self.status.is_none() {
            self.status = Some(String::from(
                "enter cycles a value · c creates the project · ? shows help",
            ));
        }
    }

    fn handle(&mut self, event: &Event) -> (EventOutcome, Option<Action>) {
        match event {
            Event::Resize(w, h) => {
                // Same content area to both; the hidden component must stay
                // correctly sized for the moment it is revealed.
                self.menu.set_size(*w, *h);
                self.help.handle(event);
                (EventOutcome::Consumed, None)
            }
            Event::Key(key) if key.is_help_toggle() => {
                self.display_help = true;
                (EventOutcome::Consumed, None)
            }
            Event::Key(key) if key.is_back() => {
                if self.display_help {
                    self.display_help = false;
                    (EventOutcome::Consumed, None)
                } else {
                    (EventOutcome::Ignored, None)
                }
            }
            Event::Key(_) if self.display_help => {
                self.help.handle(event);
                (EventOutcome::Consumed, None)
            }
            Event::Key(key) if key.is_activate() => {
                self.cycle_selected();
                (EventOutcome::Consumed, None)
            }
            Event::Key(Key::Char(CONFIRM_KEY)) => (EventOutcome::Consumed, self.confirm()),
            Event::Key(_) => {
                self.menu.update(event);
                (EventOutcome::Consumed, None)
            }
            Event::ActionResult(result) => {
                self.fold_result(&result.token, &result.outcome);
                (EventOutcome::Consumed, None)
            }
        }
    }

    /// Enter on a parameter entry steps it to its next value.
    fn cycle_selected(&mut self) {
        match self.menu.selected_index() {
            Some(0) => {
                self.language = cycle(LANGUAGES, &self.language);
                let description = language_description(&self.language);
                if let Some(entry) = self.menu.entry_mut(0) {
                    entry.description = description;
                }
            }
            Some(1) => {
                self.template = cycle(TEMPLATES, &self.template);
                let description = template_description(&self.template);
                if let Some(entry) = self.menu.entry_mut(1) {
                    entry.description = description;
                }
            }
            _ => {}
        }
    }

    fn confirm(&mut self) -> Option<Action> {
        if self.pending.is_some() {
            // Single pending slot: a second confirm is rejected, not queued.
            self.status = Some(String::from("Still working on the last request..."));
            return None;
        }
        let action = Action::new(ActionKind::CreateProject {
            language: self.language.clone(),
            template: self.template.clone(),
        });
        self.pending = Some(action.token);
        self.status = Some(format!(
            "Creating a {} project ({} template)...",
            self.language, self.template
        ));
        Some(action)
    }

    fn fold_result(&mut self, token: &ActionToken, outcome: &Result<String, String>) {
        if self.pending != Some(*token) {
            debug!("Dropping stale action result (token mismatch)");
            return;
        }
        self.pending = None;
        self.status = Some(match outcome {
            Ok(message) => message.clone(),
            Err(message) => format!("Create failed: {message}"),
        });
    }

    fn view(&self) -> String {
        if self.display_help {
            return self.help.view();
        }
        match &self.status {
            Some(status) => format!("{}\n\n{}", self.menu.view(), status),
            None => self.menu.view(),
        }
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> Option<ActionToken> {
        self.pending
    }
}

fn language_description(language: &str) -> String {
    format!("Runtime for the new function (currently {language})")
}

fn template_description(template: &str) -> String {
    format!("Invocation style for the new function (currently {template})")
}

/// Next value after `current`, wrapping; falls back to the first entry when
/// `current` is not in the list (e.g. a config override we don't know).
fn cycle(values: &[&str], current: &str) -> String {
    match values.iter().position(|v| *v == current) {
        Some(i) => values[(i + 1) % values.len()].to_string(),
        None => values[0].to_string(),
    }
}

// ============================================================================
// PlaceholderScreen
// ============================================================================

/// Stand-in for a command whose interactive screen isn't built yet. Keeps
/// the launcher uniform: every root entry owns a screen, this one just
/// ignores everything.
pub struct PlaceholderScreen {
    name: String,
}

impl PlaceholderScreen {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn view(&self) -> String {
        format!("{}: Not implemented", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::ActionResult;

    fn key(k: Key) -> Event {
        Event::Key(k)
    }

    fn sized_create() -> CreateScreen {
        let mut screen = CreateScreen::new("node", "http");
        screen.initialize();
        screen.handle(&Event::Resize(76, 22));
        screen
    }

    #[test]
    fn test_placeholder_ignores_everything() {
        let mut screen = Screen::Placeholder(PlaceholderScreen::new("Build"));
        assert_eq!(screen.view(), "Build: Not implemented");

        let (outcome, action) = screen.handle(&key(Key::Enter));
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(action.is_none());
        assert_eq!(screen.view(), "Build: Not implemented");
    }

    #[test]
    fn test_create_shows_two_entry_menu() {
        let screen = sized_create();
        let view = screen.view();
        assert!(view.contains("❯ Language"));
        assert!(view.contains("  Template"));
        assert!(view.contains("currently node"));
        assert!(view.contains("currently http"));
    }

    #[test]
    fn test_create_help_toggle_and_back() {
        let mut screen = sized_create();

        let (outcome, _) = screen.handle(&key(Key::Char('?')));
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(screen.view().contains("funcpad create"));
        assert!(screen.view().contains("┤  0%├"));

        // First Esc closes the pager, second one is left for the launcher.
        let (outcome, _) = screen.handle(&key(Key::Esc));
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(screen.view().contains("❯ Language"));

        let (outcome, _) = screen.handle(&key(Key::Esc));
        assert_eq!(outcome, EventOutcome::Ignored);
    }

    #[test]
    fn test_create_enter_cycles_values() {
        let mut screen = sized_create();

        screen.handle(&key(Key::Enter));
        assert!(screen.view().contains("currently go"));

        screen.handle(&key(Key::Down));
        screen.handle(&key(Key::Enter));
        assert!(screen.view().contains("currently cloudevents"));
    }

    #[test]
    fn test_create_confirm_round_trip() {
        let mut screen = sized_create();

        let (_, action) = screen.handle(&key(Key::Char('c')));
        let action = action.expect("confirm should originate an action");
        assert_eq!(
            action.kind,
            ActionKind::CreateProject {
                language: "node".into(),
                template: "http".into(),
            }
        );
        assert!(screen.view().contains("Creating a node project"));

        let result = ActionResult {
            token: action.token,
            outcome: Ok("Created!".into()),
        };
        screen.handle(&Event::ActionResult(result));
        assert!(screen.pending().is_none());
        assert!(screen.view().contains("Created!"));
    }

    #[test]
    fn test_create_failure_is_rendered_not_retried() {
        let mut screen = sized_create();
        let (_, action) = screen.handle(&key(Key::Char('c')));
        let token = action.expect("confirm should originate an action").token;

        screen.handle(&Event::ActionResult(ActionResult {
            token,
            outcome: Err("template repository unreachable".into()),
        }));
        assert!(screen.view().contains("Create failed: template repository unreachable"));
        assert!(screen.pending().is_none());
    }

    #[test]
    fn test_create_rejects_second_confirm_while_pending() {
        let mut screen = sized_create();
        let (_, first) = screen.handle(&key(Key::Char('c')));
        assert!(first.is_some());

        let (_, second) = screen.handle(&key(Key::Char('c')));
        assert!(second.is_none());
        assert!(screen.view().contains("Still working"));
        assert_eq!(screen.pending(), first.map(|a| a.token));
    }

    #[test]
    fn test_create_ignores_stale_result() {
        let mut screen = sized_create();
        let (_, action) = screen.handle(&key(Key::Char('c')));
        let live = action.expect("confirm should originate an action").token;

        screen.handle(&Event::ActionResult(ActionResult {
            token: ActionToken::new(),
            outcome: Ok("from someone else".into()),
        }));
        assert_eq!(screen.pending(), Some(live));
        assert!(!screen.view().contains("from someone else"));
    }

    #[test]
    fn test_stray_result_with_nothing_pending_is_inert() {
        let mut screen = sized_create();
        let before = screen.view();
        screen.handle(&Event::ActionResult(ActionResult {
            token: ActionToken::new(),
            outcome: Ok("stray".into()),
        }));
        assert_eq!(screen.view(), before);
    }

    #[test]
    fn test_menu_screen_toggles_help_both_ways() {
        let mut screen = MenuScreen::templates();
        screen.handle(&Event::Resize(76, 22));
        assert!(screen.view().contains("❯ http"));

        screen.handle(&key(Key::Char('?')));
        assert!(screen.view().contains("funcpad templates"));

        // The toggle flips rather than latches.
        screen.handle(&key(Key::Char('?')));
        assert!(screen.view().contains("❯ http"));
    }

    #[test]
    fn test_menu_screen_back_closes_help_first() {
        let mut screen = MenuScreen::templates();
        screen.handle(&Event::Resize(76, 22));
        screen.handle(&key(Key::Char('?')));

        assert_eq!(screen.handle(&key(Key::Esc)), EventOutcome::Consumed);
        assert!(screen.view().contains("❯ http"));
        assert_eq!(screen.handle(&key(Key::Esc)), EventOutcome::Ignored);
    }

    #[test]
    fn test_hidden_pager_is_sized_by_resize() {
        let mut screen = sized_create();
        // The pager was initialized by the resize even though it was hidden.
        screen.handle(&key(Key::Char('?')));
        assert!(!screen.view().contains("Initializing"));
    }
}
