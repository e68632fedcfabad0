use std::collections::HashMap;

use colored::Color;

use crate::direction::Direction;
use crate::error::{MapError, MapResult};
use crate::room::Room;

/// The deck plan: an arena of rooms keyed by name, with corridors stored
/// as a per-room adjacency row of neighbor names.
///
/// Edges are mutual. Connecting `a` east of `b` also records `b` west of
/// `a`, and removing a room scrubs every row that still points at it.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: HashMap<String, Room>,
    adjacency: HashMap<String, [Option<String>; 4]>,
    order: Vec<String>,
}

impl RoomGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room. The name must be non-empty and unused.
    pub fn add(&mut self, room: Room) -> MapResult<()> {
        if room.name.is_empty() {
            return Err(MapError::EmptyRoomName);
        }
        if self.rooms.contains_key(&room.name) {
            return Err(MapError::DuplicateRoom(room.name));
        }
        self.adjacency
            .insert(room.name.clone(), [None, None, None, None]);
        self.order.push(room.name.clone());
        self.rooms.insert(room.name.clone(), room);
        Ok(())
    }

    /// Whether a room with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Look up a room by name.
    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Look up a room mutably by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    /// Remove a room, scrubbing every adjacency slot that referenced it.
    /// Returns the removed room.
    pub fn remove(&mut self, name: &str) -> MapResult<Room> {
        let room = self
            .rooms
            .remove(name)
            .ok_or_else(|| MapError::RoomNotFound(name.to_string()))?;
        self.adjacency.remove(name);
        for row in self.adjacency.values_mut() {
            for slot in row.iter_mut() {
                if slot.as_deref() == Some(name) {
                    *slot = None;
                }
            }
        }
        self.order.retain(|n| n != name);
        Ok(room)
    }

    /// Room names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // -----------------------------------------------------------------------
    // Corridors
    // -----------------------------------------------------------------------

    /// Connect `b` to lie in `direction` from `a`, installing both halves
    /// of the edge. Existing edges in the affected slots are overwritten;
    /// the rooms they pointed at keep their own half until reconnected.
    pub fn connect(&mut self, a: &str, b: &str, direction: Direction) -> MapResult<()> {
        if !self.rooms.contains_key(a) {
            return Err(MapError::RoomNotFound(a.to_string()));
        }
        if !self.rooms.contains_key(b) {
            return Err(MapError::RoomNotFound(b.to_string()));
        }
        if let Some(row) = self.adjacency.get_mut(a) {
            row[direction.index()] = Some(b.to_string());
        }
        if let Some(row) = self.adjacency.get_mut(b) {
            row[direction.opposite().index()] = Some(a.to_string());
        }
        Ok(())
    }

    /// The neighbor lying in `direction` from `name`, if any.
    pub fn neighbor(&self, name: &str, direction: Direction) -> Option<&str> {
        self.adjacency.get(name)?[direction.index()].as_deref()
    }

    // -----------------------------------------------------------------------
    // Highlights
    // -----------------------------------------------------------------------

    /// Tint a room for the next render.
    pub fn set_highlight(&mut self, name: &str, color: Color) -> MapResult<()> {
        let room = self
            .rooms
            .get_mut(name)
            .ok_or_else(|| MapError::RoomNotFound(name.to_string()))?;
        room.highlight = Some(color);
        Ok(())
    }

    /// Clear every room's highlight.
    pub fn clear_highlights(&mut self) {
        for room in self.rooms.values_mut() {
            room.highlight = None;
        }
    }

    // -----------------------------------------------------------------------
    // Name helpers
    // -----------------------------------------------------------------------

    /// The smallest non-negative integer, as a string, not yet used as a
    /// room name. Junctions grown during a panic are named this way.
    pub fn next_junction_name(&self) -> String {
        let mut i: u32 = 0;
        while self.rooms.contains_key(&i.to_string()) {
            i += 1;
        }
        i.to_string()
    }

    /// `base` if free, otherwise `base_2`, `base_3`, ... whichever comes
    /// first.
    pub fn unique_room_name(&self, base: &str) -> String {
        if !self.rooms.contains_key(base) {
            return base.to_string();
        }
        let mut i: u32 = 2;
        loop {
            let candidate = format!("{base}_{i}");
            if !self.rooms.contains_key(&candidate) {
                return candidate;
            }
            i += 1;
        }
    }
}
