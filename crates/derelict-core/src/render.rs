//! Grid layout and ASCII rendering.
//!
//! Layout is a depth-first walk over the corridors: each room claims a
//! cell, drops a connector glyph one step toward every neighbor, and
//! recurses two steps out. Connectors are drawn before the visited check
//! so that corridors closing a loop still appear. Because every room's
//! neighbors sit at fixed offsets, the rendered text is identical no
//! matter which room the walk starts from.

use crate::direction::Direction;
use crate::error::{MapError, MapResult};
use crate::store::{Cell, Coord, MapStore};

impl MapStore {
    /// Lay the connected component of `start` out on a fresh grid, with
    /// `start` at the origin.
    pub fn place_from(&mut self, start: &str) -> MapResult<()> {
        if !self.graph.contains(start) {
            return Err(MapError::RoomNotFound(start.to_string()));
        }
        self.cells.clear();
        self.placed.clear();
        self.rendered.clear();
        self.place_room(start, (0, 0));
        Ok(())
    }

    fn place_room(&mut self, name: &str, coord: Coord) {
        if self.rendered.contains(name) {
            return;
        }
        self.cells.insert(coord, Cell::Room(name.to_string()));
        self.placed.insert(name.to_string(), coord);
        self.rendered.insert(name.to_string());
        for direction in Direction::ALL {
            let Some(next) = self.graph.neighbor(name, direction).map(str::to_string) else {
                continue;
            };
            let (dx, dy) = direction.delta();
            self.cells.insert(
                (coord.0 + dx, coord.1 + dy),
                Cell::Connector(direction.connector()),
            );
            self.place_room(&next, (coord.0 + 2 * dx, coord.1 + 2 * dy));
        }
    }

    /// The current grid as text. Rows run top to bottom, trailing spaces
    /// trimmed; the bounding box always includes the origin, so an empty
    /// grid renders as an empty string.
    pub fn render(&self) -> String {
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, 0, 0);
        for (x, y) in self.cells.keys() {
            min_x = min_x.min(*x);
            min_y = min_y.min(*y);
            max_x = max_x.max(*x);
            max_y = max_y.max(*y);
        }
        let mut lines = Vec::new();
        for y in min_y..=max_y {
            let mut line = String::new();
            for x in min_x..=max_x {
                match self.cells.get(&(x, y)) {
                    Some(Cell::Connector(c)) => line.push(*c),
                    Some(Cell::Room(name)) => line.push_str(&self.room_glyph(name)),
                    None => line.push(' '),
                }
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    /// Re-lay the map out from `start`, then render it.
    pub fn render_from(&mut self, start: &str) -> MapResult<String> {
        self.place_from(start)?;
        Ok(self.render())
    }

    fn room_glyph(&self, name: &str) -> String {
        self.graph
            .get(name)
            .map(|room| room.glyph())
            .unwrap_or_else(|| " ".to_string())
    }
}
