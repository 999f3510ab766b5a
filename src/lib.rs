//! Flappy - Terminal Flappy Bird
//!
//! The `game` module holds the UI-free, serializable model and its update
//! logic; `ui` renders that state with ratatui. The binary wires them to a
//! real terminal.

pub mod build_info;
pub mod game;
pub mod ui;
