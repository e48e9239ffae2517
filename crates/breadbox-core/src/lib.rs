//! # Breadbox Core Library
//!
//! Core business logic for Breadbox, a gamified focus timer: run a
//! countdown, earn a bread on completion, accumulate experience, unlock
//! more breads. All operations are available to any front end; the
//! bundled CLI is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a wall-clock-based state machine. The caller drives
//!   it by invoking `tick()` periodically; remaining time is recomputed
//!   from an absolute deadline every tick, so delayed ticks never drift.
//! - **Progression**: pure functions mapping focus minutes to experience
//!   and experience to a derived level.
//! - **Bakery**: the static bread catalog and the baker's ledger of
//!   counts, experience, and the focus log.
//! - **Storage**: an async key/value JSON gateway with SQLite and
//!   in-memory implementations.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`Baker`]: reward ledger
//! - [`Settings`]: persisted user settings
//! - [`StorageGateway`]: persistence trait consumed by the core

pub mod bakery;
pub mod error;
pub mod events;
pub mod progression;
pub mod settings;
pub mod storage;
pub mod timer;

pub use bakery::{AwardOutcome, Baker, Bread, FocusLog, BREADS};
pub use error::{CoreError, StorageError};
pub use events::Event;
pub use settings::Settings;
pub use storage::{MemoryStore, SqliteStore, StorageGateway};
pub use timer::{Countdown, TimerEngine, TimerMode, TimerStatus};
