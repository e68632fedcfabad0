//! The panic roll: dice-gated, recursive map growth.
//!
//! A panic roll is gated on a d20 against the current stress. Misses
//! raise stress by one, so the deck stays quiet early on and grows more
//! eagerly the longer a session runs. A hit rolls severity dice to pick
//! the new room from the panic table, attaches it two cells out from the
//! origin, and then tries to branch from the new room in each remaining
//! direction, recursing with the whole procedure again.

use derelict_core::{Coord, Direction, MapError, MapStore, Room};

use crate::dice::Dice;
use crate::error::{SimError, SimResult};

/// Branching stops past this depth; the room created at the limit stays.
const MAX_DEPTH: u32 = 32;

/// What a panic roll did.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Stress after the roll. A missed gate still raises it by one.
    pub stress: i32,
    /// Names of the rooms and junctions created, in creation order.
    pub created: Vec<String>,
    /// The d20 the gate was decided on.
    pub gate_roll: i32,
}

struct Growth {
    stress: i32,
    gate_roll: i32,
}

struct PanicRun<'a> {
    store: &'a mut MapStore,
    panic_table: &'a [String],
    dice: &'a mut dyn Dice,
    created: Vec<String>,
}

/// Run one panic roll from `origin` toward `direction`.
///
/// The origin must exist and be placed on the grid, and the panic table
/// must have entries; all three are checked before any die is thrown, so
/// a failed call leaves the store untouched.
pub fn expand(
    store: &mut MapStore,
    origin: &str,
    direction: Direction,
    stress: i32,
    panic_table: &[String],
    dice: &mut dyn Dice,
) -> SimResult<Expansion> {
    if panic_table.is_empty() {
        return Err(SimError::EmptyPanicTable);
    }
    if !store.graph().contains(origin) {
        return Err(MapError::RoomNotFound(origin.to_string()).into());
    }
    let Some(origin_coord) = store.coord_of(origin) else {
        return Err(MapError::RoomNotPlaced(origin.to_string()).into());
    };

    let mut run = PanicRun {
        store,
        panic_table,
        dice,
        created: Vec::new(),
    };
    let growth = run.grow(origin, origin_coord, direction, stress, 0)?;
    Ok(Expansion {
        stress: growth.stress,
        created: run.created,
        gate_roll: growth.gate_roll,
    })
}

impl PanicRun<'_> {
    fn grow(
        &mut self,
        origin: &str,
        origin_coord: Coord,
        direction: Direction,
        mut stress: i32,
        depth: u32,
    ) -> SimResult<Growth> {
        let gate_roll = self.dice.roll(1, 20);
        if gate_roll > stress {
            return Ok(Growth {
                stress: stress + 1,
                gate_roll,
            });
        }

        let severity = self.severity_roll(stress);
        let name = self.create_room(severity)?;
        self.store.graph_mut().connect(origin, &name, direction)?;
        self.created.push(name.clone());

        let (dx, dy) = direction.delta();
        let coord = (origin_coord.0 + 2 * dx, origin_coord.1 + 2 * dy);
        self.store.insert(coord, &name)?;

        if depth >= MAX_DEPTH {
            return Ok(Growth { stress, gate_roll });
        }
        for branch in Direction::ALL {
            if branch == direction.opposite() {
                continue;
            }
            // A deeper insert may have replaced this room; if so it can
            // no longer branch.
            if !self.store.graph().contains(&name) {
                break;
            }
            if self.dice.roll(1, 3) == 1 {
                stress += 1;
                // The nested roll keeps its rooms but its stress result
                // is dropped; only this level's count survives.
                self.grow(&name, coord, branch, stress, depth + 1)?;
            }
        }

        Ok(Growth { stress, gate_roll })
    }

    /// Roll severity: one d10 per ten points of stress, keep the highest.
    /// A 9 explodes into a second d10 added on top.
    fn severity_roll(&mut self, stress: i32) -> i32 {
        let dice_count = stress / 10 + 1;
        let mut severity = 0;
        for _ in 0..dice_count {
            severity = severity.max(self.dice.roll(0, 9));
        }
        if severity == 9 {
            severity = self.dice.roll(0, 9) + 9;
        }
        severity
    }

    /// Severity 8 grows a junction; anything else draws from the panic
    /// table, clamped to its last entry, with a `_2`-style suffix when
    /// the drawn name is already taken.
    fn create_room(&mut self, severity: i32) -> SimResult<String> {
        let graph = self.store.graph_mut();
        if severity == 8 {
            let name = graph.next_junction_name();
            graph.add(Room::junction(name.as_str()))?;
            Ok(name)
        } else {
            let index = usize::min(severity as usize, self.panic_table.len() - 1);
            let name = graph.unique_room_name(&self.panic_table[index]);
            graph.add(Room::new(name.as_str()))?;
            Ok(name)
        }
    }
}
