//! Deck-plan model for Derelict: rooms, corridors, and the grid they
//! render on.
//!
//! This crate is the dice-free half of the tool. It owns the room graph,
//! the coordinate store that lays a deck out on a grid, the ASCII
//! renderer, and the JSON ship plan format. Growth and the interactive
//! session live in `derelict-sim`.

/// Compass directions and their grid geometry.
pub mod direction;
/// Error types for deck-plan operations.
pub mod error;
/// The room arena and its corridor table.
pub mod graph;
/// Ship plan documents and loading.
pub mod plan;
/// Grid layout and ASCII rendering.
pub mod render;
/// Rooms and junctions.
pub mod room;
/// The coordinate-indexed map store.
pub mod store;

/// Re-export the compass type.
pub use direction::Direction;
/// Re-export the error types.
pub use error::{MapError, MapResult};
/// Re-export the room arena.
pub use graph::RoomGraph;
/// Re-export plan loading.
pub use plan::{ShipPlan, load_plan};
/// Re-export the node types.
pub use room::{Room, RoomKind};
/// Re-export the grid types.
pub use store::{Cell, Coord, MapStore};
