use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use derelict_sim::{Session, SimConfig};

pub fn run(plan_path: &Path, seed: Option<u64>, stress: i32) -> Result<(), String> {
    let (store, table) = super::load_plan_file(plan_path)?;
    let mut config = SimConfig::default().with_stress(stress);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::new(store, table, &config);

    println!("  {} {}", "Boarding".bold(), plan_path.display());
    println!("  Type 'help' for commands, 'exit' to leave.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if !session.walking() {
            match session.render_turn() {
                Ok(view) => println!("{view}"),
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        }
        print!("\n{}", session.prompt());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() && !session.walking() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input == "reload" {
            match super::load_plan_file(plan_path) {
                Ok((store, table)) => {
                    session.reset(store, table);
                    println!("Reloaded {}.", plan_path.display());
                }
                Err(e) => println!("{}", e.yellow()),
            }
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
