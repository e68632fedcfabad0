use std::collections::{HashMap, HashSet};

use crate::direction::Direction;
use crate::error::{MapError, MapResult};
use crate::graph::RoomGraph;

/// Integer grid coordinate. x grows east, y grows south.
pub type Coord = (i32, i32);

/// What occupies a single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A corridor glyph, `|` or `-`.
    Connector(char),
    /// A room or junction, referenced by name.
    Room(String),
}

/// The coordinate-indexed face of the deck plan.
///
/// Owns the room graph plus the cell grid and the name-to-coordinate
/// index that [`place_from`](MapStore::place_from) derives from it. Rooms
/// grown mid-panic land here through [`insert`](MapStore::insert), which
/// keeps the one-coordinate-per-room invariant even when a new room
/// collides with an occupied cell.
#[derive(Debug, Clone)]
pub struct MapStore {
    pub(crate) graph: RoomGraph,
    pub(crate) cells: HashMap<Coord, Cell>,
    pub(crate) placed: HashMap<String, Coord>,
    pub(crate) rendered: HashSet<String>,
}

impl MapStore {
    /// Wrap a room graph in an empty grid. Nothing is placed until
    /// [`place_from`](MapStore::place_from) runs.
    pub fn new(graph: RoomGraph) -> Self {
        Self {
            graph,
            cells: HashMap::new(),
            placed: HashMap::new(),
            rendered: HashSet::new(),
        }
    }

    /// The underlying room graph.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// The underlying room graph, mutably.
    pub fn graph_mut(&mut self) -> &mut RoomGraph {
        &mut self.graph
    }

    /// Where a room currently sits on the grid, if placed.
    pub fn coord_of(&self, name: &str) -> Option<Coord> {
        self.placed.get(name).copied()
    }

    /// What occupies a grid cell, if anything.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Put a room onto the grid at `coord`.
    ///
    /// An empty cell or a connector is simply overwritten. When another
    /// room already occupies the cell, the newcomer takes its place: every
    /// neighbor of the occupant is rewired onto the newcomer in the same
    /// direction, and the occupant is removed from the graph and the grid.
    /// A room inserted while placed elsewhere moves, vacating its old cell.
    pub fn insert(&mut self, coord: Coord, name: &str) -> MapResult<()> {
        if !self.graph.contains(name) {
            return Err(MapError::RoomNotFound(name.to_string()));
        }
        let occupant = match self.cells.get(&coord) {
            Some(Cell::Room(old)) if old != name => Some(old.clone()),
            _ => None,
        };
        if let Some(old) = occupant {
            self.replace_room(&old, name)?;
        }
        if let Some(prev) = self.placed.insert(name.to_string(), coord) {
            if prev != coord {
                self.cells.remove(&prev);
            }
        }
        self.cells.insert(coord, Cell::Room(name.to_string()));
        Ok(())
    }

    /// Splice `new` into `old`'s position in the graph: `old`'s neighbors
    /// become `new`'s neighbors, and `old` is gone from graph and grid.
    fn replace_room(&mut self, old: &str, new: &str) -> MapResult<()> {
        let neighbors: Vec<(Direction, String)> = Direction::ALL
            .iter()
            .filter_map(|d| self.graph.neighbor(old, *d).map(|n| (*d, n.to_string())))
            .collect();
        self.graph.remove(old)?;
        self.placed.remove(old);
        self.rendered.remove(old);
        for (direction, neighbor) in neighbors {
            // The old room may have bordered the newcomer itself; that
            // edge dies with it rather than becoming a self-loop.
            if neighbor == new {
                continue;
            }
            self.graph.connect(new, &neighbor, direction)?;
        }
        Ok(())
    }
}
