//! Interactive mapping session.
//!
//! `Session` owns the map store, the stress counter, and the RNG, and
//! turns command lines into map mutations and rendered replies. It is
//! frontend-agnostic: the CLI feeds it lines and prints whatever comes
//! back, so the whole command surface is testable without a terminal.

use colored::{Color, Colorize};
use rand::SeedableRng;
use rand::rngs::StdRng;

use derelict_core::{Direction, MapError, MapStore, Room, RoomKind};

use crate::config::SimConfig;
use crate::dice::Dice;
use crate::error::{SimError, SimResult};
use crate::expansion::expand;

/// Tints applied to successive `lightup` batches.
const LIGHTUP_SEQUENCE: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Red,
];

enum Mode {
    Main,
    Walk { at: String },
}

/// A line-oriented mapping session over one ship.
pub struct Session {
    store: MapStore,
    panic_table: Vec<String>,
    stress: i32,
    rng: StdRng,
    mode: Mode,
}

impl Session {
    /// Start a session over a loaded map store and panic table.
    pub fn new(store: MapStore, panic_table: Vec<String>, config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            store,
            panic_table,
            stress: config.stress,
            rng,
            mode: Mode::Main,
        }
    }

    /// Current stress level.
    pub fn stress(&self) -> i32 {
        self.stress
    }

    /// The map store the session is driving.
    pub fn store(&self) -> &MapStore {
        &self.store
    }

    /// Whether the session is walking the corridors rather than taking
    /// deck commands.
    pub fn walking(&self) -> bool {
        matches!(self.mode, Mode::Walk { .. })
    }

    /// The input prompt for the current mode.
    pub fn prompt(&self) -> &'static str {
        match self.mode {
            Mode::Main => "> ",
            Mode::Walk { .. } => "walk > ",
        }
    }

    /// Swap in a freshly loaded ship and zero the stress.
    pub fn reset(&mut self, store: MapStore, panic_table: Vec<String>) {
        self.store = store;
        self.panic_table = panic_table;
        self.stress = 0;
        self.mode = Mode::Main;
    }

    /// Render the map from a uniformly random room, the between-commands
    /// view of the main loop. Identical re-renders are the visible face
    /// of start-independent layout.
    pub fn render_turn(&mut self) -> SimResult<String> {
        let names: Vec<String> = self.store.graph().names().map(str::to_string).collect();
        if names.is_empty() {
            return Ok(format!("STRESS: {}", self.stress));
        }
        let start = &names[self.rng.roll(0, names.len() as i32 - 1) as usize];
        let map = self.store.render_from(start)?;
        Ok(format!("{map}\n\nSTRESS: {}", self.stress))
    }

    /// Process one line of input and return the reply text. Highlights
    /// from the previous command are cleared first, so a tint survives
    /// exactly one render.
    pub fn process(&mut self, input: &str) -> SimResult<String> {
        self.store.graph_mut().clear_highlights();

        let trimmed = input.trim();
        if let Mode::Walk { at } = &self.mode {
            let at = at.clone();
            return self.do_walk_step(&at, trimmed);
        }
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts.as_slice() {
            ["list"] => self.do_list(),
            ["add", name, direction, other] => self.do_add(name, direction, other),
            ["add", ..] => Err(SimError::Usage("add <name> <direction> <room>".to_string())),
            ["panic", room, direction] => self.do_panic(room, direction),
            ["panic", ..] => Err(SimError::Usage("panic <room> <direction>".to_string())),
            ["stress"] => Ok(format!("STRESS: {}", self.stress)),
            ["stress", op, amount] => self.do_stress(op, amount),
            ["stress", ..] => Err(SimError::Usage("stress [add|sub <n>]".to_string())),
            ["highlight"] => Err(SimError::Usage("highlight <room>...".to_string())),
            ["highlight", targets @ ..] => self.do_highlight(targets),
            ["lightup"] => self.do_lightup(),
            ["walk", room] => self.do_walk_start(room),
            ["walk", ..] => Err(SimError::Usage("walk <room>".to_string())),
            ["status"] => Ok(self.do_status()),
            ["help"] => Ok(help_text().to_string()),
            _ => Err(SimError::UnknownCommand(trimmed.to_string())),
        }
    }

    // -----------------------------------------------------------------------
    // Deck commands
    // -----------------------------------------------------------------------

    fn do_list(&self) -> SimResult<String> {
        let names: Vec<&str> = self.store.graph().names().collect();
        Ok(names.join(", "))
    }

    fn do_add(&mut self, name: &str, direction: &str, other: &str) -> SimResult<String> {
        let direction = Direction::parse(direction)?;
        if !self.store.graph().contains(other) {
            return Err(MapError::RoomNotFound(other.to_string()).into());
        }
        self.store.graph_mut().add(Room::new(name))?;
        // The new room lies `direction` of the existing one, so the edge
        // is installed from its side.
        self.store
            .graph_mut()
            .connect(name, other, direction.opposite())?;
        Ok(format!("Added {name} {direction} of {other}"))
    }

    fn do_panic(&mut self, room: &str, direction: &str) -> SimResult<String> {
        let direction = Direction::parse(direction)?;
        let stress_before = self.stress;
        let outcome = expand(
            &mut self.store,
            room,
            direction,
            self.stress,
            &self.panic_table,
            &mut self.rng,
        )?;
        self.stress = outcome.stress;
        if outcome.created.is_empty() {
            return Ok(format!(
                "no panic, yet... (rolled {} against stress {stress_before})",
                outcome.gate_roll
            ));
        }
        for name in &outcome.created {
            // Rooms swallowed by a later replacement no longer exist and
            // cannot be tinted.
            if self.store.graph().contains(name) {
                self.store.graph_mut().set_highlight(name, Color::Green)?;
            }
        }
        Ok(format!("Created rooms: {}", outcome.created.join(", ")))
    }

    fn do_stress(&mut self, op: &str, amount: &str) -> SimResult<String> {
        let amount: i32 = amount
            .parse()
            .map_err(|_| SimError::Usage("stress [add|sub <n>]".to_string()))?;
        match op {
            "add" => self.stress += amount,
            "sub" => self.stress -= amount,
            _ => return Err(SimError::Usage("stress [add|sub <n>]".to_string())),
        }
        Ok(format!("STRESS: {}", self.stress))
    }

    fn do_highlight(&mut self, targets: &[&str]) -> SimResult<String> {
        let mut missing = Vec::new();
        for name in targets {
            if self
                .store
                .graph_mut()
                .set_highlight(name, Color::Yellow)
                .is_err()
            {
                missing.push(*name);
            }
        }
        if missing.is_empty() {
            Ok(format!("Highlighted: {}", targets.join(", ")))
        } else {
            Ok(format!("Room not found: {}", missing.join(", ")))
        }
    }

    fn do_lightup(&mut self) -> SimResult<String> {
        let names: Vec<String> = self.store.graph().names().map(str::to_string).collect();
        let mut sections = Vec::new();
        for batch in names.chunks(LIGHTUP_SEQUENCE.len()) {
            for (name, color) in batch.iter().zip(LIGHTUP_SEQUENCE) {
                self.store.graph_mut().set_highlight(name, color)?;
            }
            let labels: Vec<String> = batch
                .iter()
                .zip(LIGHTUP_SEQUENCE)
                .map(|(name, color)| name.color(color).to_string())
                .collect();
            let map = self.store.render_from(&batch[0])?;
            sections.push(format!(
                "[{}]\n{map}\n\nSTRESS: {}",
                labels.join(", "),
                self.stress
            ));
            self.store.graph_mut().clear_highlights();
        }
        Ok(sections.join("\n\n"))
    }

    fn do_status(&self) -> String {
        let graph = self.store.graph();
        let junctions = graph
            .names()
            .filter(|name| {
                graph
                    .get(name)
                    .is_some_and(|room| room.kind == RoomKind::Junction)
            })
            .count();
        format!(
            "Rooms: {} ({junctions} junctions)\nPanic table: {} entries\nSTRESS: {}",
            graph.len(),
            self.panic_table.len(),
            self.stress
        )
    }

    // -----------------------------------------------------------------------
    // Walk mode
    // -----------------------------------------------------------------------

    fn do_walk_start(&mut self, room: &str) -> SimResult<String> {
        if !self.store.graph().contains(room) {
            return Err(MapError::RoomNotFound(room.to_string()).into());
        }
        self.mode = Mode::Walk {
            at: room.to_string(),
        };
        self.walk_view(room)
    }

    /// One walk turn: a direction word moves if a corridor leads that
    /// way, staying put otherwise; anything else steps out of the walk.
    fn do_walk_step(&mut self, at: &str, input: &str) -> SimResult<String> {
        let Ok(direction) = Direction::parse(input) else {
            self.mode = Mode::Main;
            return Ok(String::new());
        };
        let location = match self.store.graph().neighbor(at, direction) {
            Some(next) => next.to_string(),
            None => at.to_string(),
        };
        self.mode = Mode::Walk {
            at: location.clone(),
        };
        self.walk_view(&location)
    }

    fn walk_view(&mut self, location: &str) -> SimResult<String> {
        self.store.graph_mut().set_highlight(location, Color::Yellow)?;
        let map = self.store.render_from(location)?;
        Ok(format!(
            "{}\n{map}\n\nSTRESS: {}",
            location.yellow(),
            self.stress
        ))
    }
}

fn help_text() -> &'static str {
    "Deck commands:
  list                      List every room by name
  add <name> <dir> <room>   Add <name> one corridor <dir> of <room>
  panic <room> <dir>        Roll for panic growth out of a room
  stress [add|sub <n>]      Show or adjust the stress level
  highlight <room>...       Tint rooms yellow on the next map
  lightup                   Tour the deck in tinted batches
  walk <room>               Walk the corridors; direction words move,
                            anything else steps back out
  status                    Session summary
  reload                    Reload the ship plan and zero the stress
  help                      This text
  exit                      Leave the ship"
}

#[cfg(test)]
mod tests {
    use derelict_core::RoomGraph;

    use super::*;

    /// Bridge and Galley one corridor apart, plus a small panic table.
    fn test_session(config: SimConfig) -> Session {
        let mut graph = RoomGraph::new();
        graph.add(Room::new("Bridge")).unwrap();
        graph.add(Room::new("Galley")).unwrap();
        graph.connect("Bridge", "Galley", Direction::East).unwrap();
        let mut store = MapStore::new(graph);
        store.place_from("Bridge").unwrap();
        let table = vec!["Armory".to_string(), "Brig".to_string()];
        Session::new(store, table, &config)
    }

    #[test]
    fn list_names_in_insertion_order() {
        let mut session = test_session(SimConfig::default());
        assert_eq!(session.process("list").unwrap(), "Bridge, Galley");
    }

    #[test]
    fn empty_input_is_a_quiet_no_op() {
        let mut session = test_session(SimConfig::default());
        assert_eq!(session.process("   ").unwrap(), "");
    }

    #[test]
    fn unknown_commands_are_reported() {
        let mut session = test_session(SimConfig::default());
        let err = session.process("scuttle").unwrap_err();
        assert!(matches!(err, SimError::UnknownCommand(_)));
    }

    #[test]
    fn add_joins_a_room_in_the_given_direction() {
        let mut session = test_session(SimConfig::default());
        let reply = session.process("add Cryo north Bridge").unwrap();
        assert_eq!(reply, "Added Cryo north of Bridge");
        let graph = session.store().graph();
        assert_eq!(graph.neighbor("Bridge", Direction::North), Some("Cryo"));
        assert_eq!(graph.neighbor("Cryo", Direction::South), Some("Bridge"));
    }

    #[test]
    fn add_rejects_duplicates_and_unknown_anchors() {
        let mut session = test_session(SimConfig::default());
        assert!(matches!(
            session.process("add Galley north Bridge"),
            Err(SimError::Map(MapError::DuplicateRoom(_)))
        ));
        assert!(matches!(
            session.process("add Cryo north Ghost"),
            Err(SimError::Map(MapError::RoomNotFound(_)))
        ));
        // The failed add must not have left Cryo behind.
        assert!(!session.store().graph().contains("Cryo"));
    }

    #[test]
    fn add_with_wrong_arity_reports_usage() {
        let mut session = test_session(SimConfig::default());
        assert!(matches!(
            session.process("add Cryo north"),
            Err(SimError::Usage(_))
        ));
    }

    #[test]
    fn stress_reads_and_adjusts() {
        let mut session = test_session(SimConfig::default());
        assert_eq!(session.process("stress").unwrap(), "STRESS: 0");
        assert_eq!(session.process("stress add 12").unwrap(), "STRESS: 12");
        assert_eq!(session.process("stress sub 4").unwrap(), "STRESS: 8");
        assert_eq!(session.stress(), 8);
        assert!(matches!(
            session.process("stress add many"),
            Err(SimError::Usage(_))
        ));
    }

    #[test]
    fn panic_at_zero_stress_never_fires() {
        let mut session = test_session(SimConfig::default());
        let reply = session.process("panic Bridge north").unwrap();
        assert!(reply.starts_with("no panic, yet..."), "got: {reply}");
        assert_eq!(session.stress(), 1);
        assert_eq!(session.store().graph().len(), 2);
    }

    #[test]
    fn panic_at_high_stress_always_grows() {
        let mut session = test_session(SimConfig::default().with_stress(20).with_seed(11));
        let reply = session.process("panic Bridge north").unwrap();
        assert!(reply.starts_with("Created rooms: "), "got: {reply}");
        assert!(session.stress() >= 20);
        // The most recent room always survives any replacements, so at
        // least one freshly grown room carries the green tint.
        let graph = session.store().graph();
        assert!(
            graph
                .names()
                .any(|n| graph.get(n).is_some_and(|r| r.highlight == Some(Color::Green)))
        );
    }

    #[test]
    fn panic_on_an_unknown_room_is_rejected() {
        let mut session = test_session(SimConfig::default());
        assert!(matches!(
            session.process("panic Ghost north"),
            Err(SimError::Map(MapError::RoomNotFound(_)))
        ));
    }

    #[test]
    fn panic_with_an_empty_table_is_rejected() {
        let mut session = test_session(SimConfig::default());
        session.panic_table.clear();
        assert!(matches!(
            session.process("panic Bridge north"),
            Err(SimError::EmptyPanicTable)
        ));
    }

    #[test]
    fn highlight_tints_until_the_next_command() {
        let mut session = test_session(SimConfig::default());
        session.process("highlight Bridge Galley").unwrap();
        let graph = session.store().graph();
        assert_eq!(graph.get("Bridge").unwrap().highlight, Some(Color::Yellow));
        assert_eq!(graph.get("Galley").unwrap().highlight, Some(Color::Yellow));

        session.process("list").unwrap();
        let graph = session.store().graph();
        assert_eq!(graph.get("Bridge").unwrap().highlight, None);
    }

    #[test]
    fn highlight_reports_missing_rooms() {
        let mut session = test_session(SimConfig::default());
        let reply = session.process("highlight Bridge Ghost").unwrap();
        assert_eq!(reply, "Room not found: Ghost");
        // Known targets are still tinted.
        let graph = session.store().graph();
        assert_eq!(graph.get("Bridge").unwrap().highlight, Some(Color::Yellow));
    }

    #[test]
    fn lightup_tours_the_deck_in_batches() {
        let mut session = test_session(SimConfig::default());
        for (name, anchor) in [
            ("Cryo", "Bridge"),
            ("Dorms", "Cryo"),
            ("Engine", "Dorms"),
            ("Foundry", "Engine"),
            ("Gunnery", "Foundry"),
        ] {
            session.process(&format!("add {name} north {anchor}")).unwrap();
        }
        // Seven rooms make one full batch of five and one of two.
        let reply = session.process("lightup").unwrap();
        assert_eq!(reply.matches("STRESS:").count(), 2);
        // The tour cleans up after itself.
        let graph = session.store().graph();
        assert!(graph.names().all(|n| graph.get(n).unwrap().highlight.is_none()));
    }

    #[test]
    fn walk_moves_along_corridors_and_steps_out() {
        let mut session = test_session(SimConfig::default());
        assert_eq!(session.prompt(), "> ");

        let view = session.process("walk Bridge").unwrap();
        assert!(view.contains("STRESS: 0"));
        assert!(session.walking());
        assert_eq!(session.prompt(), "walk > ");
        assert_eq!(
            session.store().graph().get("Bridge").unwrap().highlight,
            Some(Color::Yellow)
        );

        session.process("east").unwrap();
        assert_eq!(
            session.store().graph().get("Galley").unwrap().highlight,
            Some(Color::Yellow)
        );

        // No corridor north of Galley; the walk stays put.
        session.process("north").unwrap();
        assert_eq!(
            session.store().graph().get("Galley").unwrap().highlight,
            Some(Color::Yellow)
        );

        assert_eq!(session.process("done").unwrap(), "");
        assert!(!session.walking());
        assert_eq!(session.prompt(), "> ");
    }

    #[test]
    fn walk_rejects_unknown_rooms() {
        let mut session = test_session(SimConfig::default());
        assert!(matches!(
            session.process("walk Ghost"),
            Err(SimError::Map(MapError::RoomNotFound(_)))
        ));
        assert!(!session.walking());
    }

    #[test]
    fn status_summarizes_the_session() {
        let mut session = test_session(SimConfig::default().with_stress(3));
        let reply = session.process("status").unwrap();
        assert!(reply.contains("Rooms: 2 (0 junctions)"));
        assert!(reply.contains("Panic table: 2 entries"));
        assert!(reply.contains("STRESS: 3"));
    }

    #[test]
    fn help_lists_the_commands() {
        let mut session = test_session(SimConfig::default());
        let reply = session.process("help").unwrap();
        for command in ["list", "add", "panic", "stress", "walk", "lightup"] {
            assert!(reply.contains(command), "missing {command}");
        }
    }

    #[test]
    fn render_turn_shows_map_and_stress() {
        let mut session = test_session(SimConfig::default().with_seed(3));
        let view = session.render_turn().unwrap();
        assert!(view.ends_with("STRESS: 0"));
        assert!(view.contains("B-G"));
    }

    #[test]
    fn render_turn_is_stable_across_random_starts() {
        let mut session = test_session(SimConfig::default());
        let first = session.render_turn().unwrap();
        for _ in 0..10 {
            assert_eq!(session.render_turn().unwrap(), first);
        }
    }

    #[test]
    fn reset_swaps_the_ship_and_zeroes_stress() {
        let mut session = test_session(SimConfig::default().with_stress(9));
        session.process("walk Bridge").unwrap();

        let mut graph = RoomGraph::new();
        graph.add(Room::new("Hold")).unwrap();
        let mut store = MapStore::new(graph);
        store.place_from("Hold").unwrap();
        session.reset(store, vec!["Vault".to_string()]);

        assert_eq!(session.stress(), 0);
        assert!(!session.walking());
        assert_eq!(session.process("list").unwrap(), "Hold");
    }
}
