//! ClipTools - clipboard manager and text processing tools.
//!
//! The core of the app is a windowed content navigation model: bounded,
//! scrollable, focus-tracking lists ([`windowed::WindowedList`]) organized in
//! a two-level tree ([`collections::CollectionTree`]), driven by a four-state
//! navigation machine ([`controller::Controller`]) that walks
//! text groups -> text -> action groups -> action and writes the transformed
//! result back to the clipboard. Everything with a screen, a socket or an OS
//! clipboard behind it stays outside and talks to the core through the
//! collaborator traits in [`controller`] and plain event calls.

pub mod actions;
pub mod clipboard;
pub mod collections;
pub mod commands;
pub mod config;
pub mod controller;
pub mod data_loader;
pub mod error;
pub mod logging;
pub mod sanitize;
pub mod utils;
pub mod windowed;
