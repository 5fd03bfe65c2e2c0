//! Conway's Game of Life engine.
//!
//! Boards come from a file ([`BoardStore`], [`BoardCodec`]), from the
//! random generator ([`BoardGenerator`]), from a built-in [`Pattern`] or
//! from manual entry ([`editor`]). [`sim::run`] then steps them with
//! [`engine::step`] until they die out, settle, or the user stops them.
//! Drawing, key input and terminal size are supplied by the caller.

pub mod codec;
pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod sim;
pub mod store;

pub use codec::BoardCodec;
pub use config::LifeConfig;
pub use editor::{Key, KeyReader};
pub use error::{FormatError, LifeError, Result};
pub use grid::{Board, Row};
pub use patterns::{BoardGenerator, PATTERNS, Pattern, find_pattern};
pub use sim::{CancelSignal, Outcome, RenderSink, SimState, Simulation, StopReason};
pub use store::{BoardStore, StoredBoard};
