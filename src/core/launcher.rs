//! # Launcher
//!
//! The top-level orchestrator: a root menu of commands, at most one active
//! screen, and the shared viewport everything renders through. This is the
//! whole state machine:
//!
//! ```text
//!            Enter (with selection)
//!    Idle ────────────────────────────▶ Running
//!     ▲                                   │
//!     └────────── Esc (unconsumed) ───────┘
//!
//!    any state ── Ctrl+C / 'q' ──▶ Quitting (terminal)
//! ```
//!
//! Exactly one of {root menu, active screen} owns input at any instant,
//! decided solely by `active`. Screens stay owned by their menu entry; the
//! launcher holds an index, so deactivating retains screen state and
//! re-entering the same command resumes where the user left off.
//!
//! Every input is a total function over the state space: an Enter without a
//! selection, an Esc while idle, and a key before the first resize are all
//! silent no-ops. Nothing here fails; the only terminal state is the quit key.

use log::{debug, info};

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::event::Event;
use crate::core::layout::Layout;
use crate::core::menu::{Menu, MenuEntry};
use crate::core::screen::{CreateScreen, EventOutcome, MenuScreen, PlaceholderScreen, Screen};
use crate::core::viewport::Viewport;

/// Rendered once the quit key is seen, forever.
pub const FAREWELL: &str = "\n👋 Bye!";

const PLACEHOLDER: &str = "\n  Initializing...";

pub struct Launcher {
    menu: Menu,
    /// Index of the root entry whose screen owns input; `None` = Idle.
    active: Option<usize>,
    quitting: bool,
    layout: Layout,
    viewport: Viewport,
    /// Set by the first resize; renders are placeholders until then.
    viewport_ready: bool,
    /// Current content area, forwarded to lazily-activated screens.
    content_area: (u16, u16),
    /// Entries whose screen has had `initialize` run.
    initialized: Vec<bool>,
}

impl Launcher {
    pub fn new(layout: Layout, config: &ResolvedConfig) -> Self {
        let menu = root_menu(config);
        let initialized = vec![false; menu.entries().len()];
        Self {
            menu,
            active: None,
            quitting: false,
            layout,
            viewport: Viewport::new(0, 0),
            viewport_ready: false,
            content_area: (0, 0),
            initialized,
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Fold one event into the state machine. Any action a screen
    /// originates is handed back for the caller to execute.
    pub fn handle(&mut self, event: Event) -> Option<Action> {
        if self.quitting {
            return None;
        }
        match event {
            Event::Resize(width, height) => {
                self.resize(width, height);
                None
            }
            Event::Key(key) if key.is_quit() => {
                info!("Quit requested");
                self.quitting = true;
                self.active = None;
                None
            }
            Event::Key(key) => {
                if let Some(index) = self.active {
                    let (outcome, action) = self.forward(index, &event);
                    if outcome == EventOutcome::Ignored && key.is_back() {
                        info!("Deactivating screen #{index}");
                        self.active = None;
                    }
                    action
                } else if key.is_activate() {
                    self.activate();
                    None
                } else if key.is_back() {
                    // Back outside Running is a no-op.
                    None
                } else {
                    self.menu.update(&event);
                    None
                }
            }
            Event::ActionResult(_) => {
                match self.active {
                    Some(index) => self.forward(index, &event).1,
                    None => {
                        // The owning screen keeps its pending state; a
                        // result landing while idle is safely droppable.
                        debug!("Dropping action result delivered while idle");
                        None
                    }
                }
            }
        }
    }

    /// The composed frame for the current state. Precedence:
    /// Quitting > Running > Idle.
    pub fn render(&mut self) -> String {
        if self.quitting {
            return FAREWELL.to_string();
        }
        if !self.viewport_ready {
            return PLACEHOLDER.to_string();
        }
        let content = match self.active.and_then(|i| self.screen(i)) {
            Some(screen) => screen.view(),
            None => self.menu.view(),
        };
        self.viewport.set_content(&content);
        self.layout.frame(&self.viewport.view())
    }

    fn resize(&mut self, width: u16, height: u16) {
        let (w, h) = self.layout.content_area(width, height);
        self.content_area = (w, h);
        self.viewport.resize(w, h);
        self.viewport_ready = true;
        // The root menu is always kept in sync; the active screen too.
        self.menu.set_size(w, h);
        if let Some(index) = self.active {
            self.forward(index, &Event::Resize(w, h));
        }
    }

    /// Idle → Running on the current selection. Screens initialize lazily,
    /// on first activation, and are immediately sized to the current
    /// content area so they never wait for a real terminal resize.
    fn activate(&mut self) {
        let Some(index) = self.menu.selected_index() else {
            return;
        };
        if self.screen(index).is_none() {
            return;
        }
        info!("Activating screen #{index}");
        self.active = Some(index);
        if let Some(first_time) = self.initialized.get_mut(index)
            && !*first_time
        {
            *first_time = true;
            if let Some(screen) = self.screen_mut(index) {
                screen.initialize();
            }
        }
        if self.viewport_ready {
            let (w, h) = self.content_area;
            self.forward(index, &Event::Resize(w, h));
        }
    }

    fn forward(&mut self, index: usize, event: &Event) -> (EventOutcome, Option<Action>) {
        match self.screen_mut(index) {
            Some(screen) => screen.handle(event),
            None => (EventOutcome::Ignored, None),
        }
    }

    fn screen(&self, index: usize) -> Option<&Screen> {
        self.menu.entries().get(index).and_then(|e| e.screen.as_ref())
    }

    fn screen_mut(&mut self, index: usize) -> Option<&mut Screen> {
        self.menu.entry_mut(index).and_then(|e| e.screen.as_mut())
    }
}

/// The full command menu. Every entry owns a screen; commands without an
/// interactive implementation get a placeholder, so activation never has
/// to ask whether a screen exists.
fn root_menu(config: &ResolvedConfig) -> Menu {
    let placeholder =
        |title: &str, desc: &str| MenuEntry::with_screen(title, desc, Screen::Placeholder(PlaceholderScreen::new(title)));
    Menu::new(
        "⚡ Functions ⚡",
        vec![
            MenuEntry::with_screen(
                "Create",
                "Create a new function project from a template",
                Screen::Create(CreateScreen::new(config.language.clone(), config.template.clone())),
            ),
            placeholder("Build", "Turn an existing function project into a runnable container"),
            placeholder("Configure", "View and update options for an existing function project"),
            placeholder("Deploy", "Run an existing function project on a cluster"),
            placeholder("Undeploy", "Remove an existing function from a cluster"),
            placeholder("Info", "See information about an existing function"),
            placeholder("List", "Get a list of all functions deployed on the cluster"),
            placeholder("Run", "Run an existing function in a local container"),
            placeholder("Invoke", "Invoke a running function, either locally or on a cluster"),
            MenuEntry::with_screen(
                "Templates",
                "Install and update reusable function templates",
                Screen::Menu(MenuScreen::templates()),
            ),
        ],
    )
}
