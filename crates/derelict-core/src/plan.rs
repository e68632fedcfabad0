use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{MapError, MapResult};
use crate::graph::RoomGraph;
use crate::room::Room;
use crate::store::MapStore;

/// A declarative ship plan, the JSON document the tool loads decks from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipPlan {
    /// Named rooms, in declaration order.
    pub rooms: Vec<String>,
    /// How many junctions to create. They are named "1" through "N".
    #[serde(default)]
    pub junctions: u32,
    /// Corridor triples `<room>.<direction>.<room>`; the second room lies
    /// in that direction from the first.
    #[serde(default)]
    pub connections: Vec<String>,
    /// Ordered names the panic roll draws new rooms from.
    #[serde(default)]
    pub room_table: Vec<String>,
}

impl ShipPlan {
    /// Parse a plan from its JSON text.
    pub fn from_json(json: &str) -> MapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Build a map store and panic room table from a plan.
///
/// Junctions come after the named rooms, so a plan with N junctions and
/// no room named "0" leaves "0" as the first name a grown junction takes.
/// The initial layout is placed from the first declared room.
pub fn load_plan(plan: &ShipPlan) -> MapResult<(MapStore, Vec<String>)> {
    let mut graph = RoomGraph::new();
    for name in &plan.rooms {
        graph.add(Room::new(name.as_str()))?;
    }
    for i in 1..=plan.junctions {
        graph.add(Room::junction(i.to_string()))?;
    }
    for entry in &plan.connections {
        let (a, direction, b) = parse_connection(entry)?;
        graph.connect(a, b, direction)?;
    }
    if plan.room_table.iter().any(String::is_empty) {
        return Err(MapError::EmptyRoomName);
    }
    let start = graph.names().next().map(str::to_string);
    let mut store = MapStore::new(graph);
    if let Some(start) = start {
        store.place_from(&start)?;
    }
    Ok((store, plan.room_table.clone()))
}

fn parse_connection(entry: &str) -> MapResult<(&str, Direction, &str)> {
    let mut parts = entry.split('.');
    let (Some(a), Some(direction), Some(b), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(MapError::MalformedConnection(entry.to_string()));
    };
    if a.is_empty() || b.is_empty() {
        return Err(MapError::MalformedConnection(entry.to_string()));
    }
    Ok((a, Direction::parse(direction)?, b))
}
