//! # Core Navigation Logic
//!
//! The launcher's state machine, with no terminal I/O anywhere in it.
//! Everything renders to plain strings and consumes [`event::Event`]
//! values; how events are produced and strings are painted is the `tui`
//! adapter's business.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │                              │
//!                 │  Launcher ── routes ──▶ Screen
//!                 │     │                    │   │
//!                 │   Menu            Menu/Pager │
//!                 │     └──── Viewport ─────┘    │
//!                 │                              │
//!                 │   Strings in, strings out.   │
//!                 └───────────────┬──────────────┘
//!                                 │
//!                        ┌────────┴────────┐
//!                        ▼                 ▼
//!                 ┌────────────┐    ┌────────────┐
//!                 │    TUI     │    │  executor  │
//!                 │  adapter   │    │  (actions) │
//!                 └────────────┘    └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`launcher`]: the top-level Idle/Running/Quitting machine
//! - [`screen`]: the closed set of interactive screens
//! - [`menu`], [`pager`], [`viewport`], [`layout`]: the building blocks
//! - [`event`], [`action`]: what flows in and out
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod event;
pub mod launcher;
pub mod layout;
pub mod menu;
pub mod pager;
pub mod screen;
pub mod viewport;
