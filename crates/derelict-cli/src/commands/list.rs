use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use derelict_core::{Direction, RoomKind};

pub fn run(plan_path: &Path) -> Result<(), String> {
    let (store, _table) = super::load_plan_file(plan_path)?;
    let graph = store.graph();

    if graph.is_empty() {
        println!("  No rooms declared.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kind", "Corridors"]);

    for name in graph.names() {
        let kind = match graph.get(name).map(|room| room.kind) {
            Some(RoomKind::Junction) => "junction",
            _ => "room",
        };

        let corridors: Vec<String> = Direction::ALL
            .iter()
            .filter_map(|d| graph.neighbor(name, *d).map(|n| format!("{d} {n}")))
            .collect();
        let corridors = if corridors.is_empty() {
            "—".to_string()
        } else {
            corridors.join(", ")
        };

        table.add_row(vec![name.to_string(), kind.to_string(), corridors]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", graph.len());

    Ok(())
}
