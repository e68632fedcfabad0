//! Panic-driven map growth for Derelict.
//!
//! The expansion engine throws dice to grow the deck plan outward from a
//! room, and [`Session`] wraps it, together with the stress counter and
//! the display commands, in a line-oriented processor the CLI can drive.

/// Session configuration.
pub mod config;
/// Injectable dice for reproducible rolls.
pub mod dice;
/// Error types for the engine and session.
pub mod error;
/// The panic roll and its recursion.
pub mod expansion;
/// The interactive command processor.
pub mod session;

/// Re-export the session configuration.
pub use config::SimConfig;
/// Re-export the dice trait.
pub use dice::Dice;
/// Re-export the error types.
pub use error::{SimError, SimResult};
/// Re-export the growth entry point.
pub use expansion::{Expansion, expand};
/// Re-export the session.
pub use session::Session;
