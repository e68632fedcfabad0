use std::path::Path;

pub fn run(plan_path: &Path, from: Option<&str>) -> Result<(), String> {
    let (mut store, _table) = super::load_plan_file(plan_path)?;
    let map = match from {
        Some(start) => store.render_from(start).map_err(|e| e.to_string())?,
        None => store.render(),
    };
    println!("{map}");
    Ok(())
}
