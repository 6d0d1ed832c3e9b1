//! # Quitstreak Core Library
//!
//! This library provides the core business logic for Quitstreak, a tracker
//! for habits a person is trying to quit. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Habit Registry**: Owns the ordered collection of tracked habits and
//!   the create/rename operations over it
//! - **Streak Engine**: Pure date-driven computation -- elapsed-day math,
//!   the idempotent daily rollover pass, and the relapse transition that
//!   archives a streak into history
//! - **Storage**: JSON blob persistence of the registry; the host loads it
//!   once at startup and writes it back after every mutation
//!
//! The engine never touches the clock or the disk on its own: "today" is
//! threaded in explicitly and persistence happens in the host, which keeps
//! every operation deterministic and testable.
//!
//! ## Key Components
//!
//! - [`HabitRegistry`]: Ordered habit collection with create/rename
//! - [`engine`]: Rollover, relapse, and streak display normalization
//! - [`HabitStore`]: Registry blob persistence
//! - [`CoreError`]: Error taxonomy for the whole crate

pub mod engine;
pub mod error;
pub mod habit;
pub mod registry;
pub mod storage;

pub use engine::{display_streak, elapsed_days, relapse, rollover_all, StreakDisplay};
pub use error::{CoreError, Result};
pub use habit::{Habit, StreakRecord};
pub use registry::HabitRegistry;
pub use storage::HabitStore;
