pub mod check;
pub mod list;
pub mod play;
pub mod render;
pub mod timer;

use std::path::Path;

use derelict_core::{MapStore, ShipPlan, load_plan};

/// Read a ship plan file and build the map store and panic table from
/// it, folding every failure into a printable message.
fn load_plan_file(path: &Path) -> Result<(MapStore, Vec<String>), String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let plan = ShipPlan::from_json(&text).map_err(|e| e.to_string())?;
    load_plan(&plan).map_err(|e| e.to_string())
}
