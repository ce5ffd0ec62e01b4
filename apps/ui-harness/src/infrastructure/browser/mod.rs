//! Browser adapters.
//!
//! The real driver binding lives outside this crate; [`ScriptedBrowser`]
//! replays scripted page state for tests and offline runs.

mod scripted;

pub use scripted::{BrowserAction, ScriptedBrowser};
