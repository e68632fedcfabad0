use std::path::Path;

pub fn run(plan_path: &Path) -> Result<(), String> {
    let (store, table) = super::load_plan_file(plan_path)?;
    let graph = store.graph();
    let placed = graph
        .names()
        .filter(|name| store.coord_of(name).is_some())
        .count();

    println!("  All checks passed for '{}'.", plan_path.display());
    println!(
        "  {} rooms, {} reachable from the entry, {} panic table entries",
        graph.len(),
        placed,
        table.len()
    );

    Ok(())
}
