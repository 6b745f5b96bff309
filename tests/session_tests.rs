use pokeball_arena::arena::{Arena, ResetPolicy, Scoreboard};
use pokeball_arena::battle::RoundOutcome;
use pokeball_arena::error::ArenaError;
use pokeball_arena::load_rosters;
use pokeball_arena::model::{default_lineup, Pokemon, Species};
use pokeball_arena::session::{run_session, wants_restart};
use pokeball_arena::trainer::{Trainer, MAX_POKEBALLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Cursor;

fn lineup(species: &[Species]) -> Vec<Pokemon> {
    species.iter().map(|&s| Pokemon::new(s)).collect()
}

fn play(input: &str, policy: ResetPolicy, a: Vec<Pokemon>, b: Vec<Pokemon>) -> (String, Arena) {
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut arena = Arena::new(policy);
    run_session(&mut input, &mut out, &mut rng, &mut arena, a, b).expect("session runs");
    (String::from_utf8(out).expect("utf8 output"), arena)
}

#[test]
fn scoreboard_counts_rounds_and_resets_to_zero() {
    let mut board = Scoreboard::default();
    for _ in 0..4 {
        board.record_round();
    }
    assert_eq!(board.total_rounds(), 4);
    assert_eq!(board.total_battles(), 4);
    board.reset();
    assert_eq!(board.total_rounds(), 0);
    assert_eq!(board.total_battles(), 0);
    board.record_round();
    assert_eq!(board.total_rounds(), 1);
    assert_eq!(board.total_battles(), 1);
}

#[test]
fn scoreboard_display_block() {
    let mut board = Scoreboard::default();
    board.record_round();
    board.record_round();
    let mut out = Vec::new();
    board.display(&mut out).expect("display");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "Scoreboard\nTotal Rounds: 2\nTotal Battles: 2\n"
    );
}

#[test]
fn arena_counts_each_round_and_keeps_counting_without_reset() {
    let ash = Trainer::with_lineup("Ash", default_lineup()).expect("fits");
    let gary = Trainer::with_lineup("Gary", default_lineup()).expect("fits");
    let mut arena = Arena::new(ResetPolicy::Zero);
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..5 {
        arena
            .start_battle(&ash, &gary, &mut rng, &mut std::io::sink())
            .expect("round");
    }
    assert_eq!(arena.scoreboard().total_rounds(), 5);
    assert_eq!(arena.scoreboard().total_battles(), 5);
    arena.reset_scoreboard();
    assert_eq!(arena.scoreboard().total_rounds(), 0);
    arena
        .start_battle(&ash, &gary, &mut rng, &mut std::io::sink())
        .expect("round");
    assert_eq!(arena.scoreboard().total_rounds(), 1);
    assert_eq!(arena.rounds_played(), 6);
}

#[test]
fn keep_policy_leaves_counters_untouched() {
    let mut arena = Arena::new(ResetPolicy::Keep);
    let ash = Trainer::with_lineup("Ash", default_lineup()).expect("fits");
    let mut rng = SmallRng::seed_from_u64(1);
    arena
        .start_battle(&ash, &ash, &mut rng, &mut std::io::sink())
        .expect("round");
    arena.reset_scoreboard();
    assert_eq!(arena.scoreboard().total_rounds(), 1);
}

#[test]
fn restart_answers() {
    assert!(wants_restart("y"));
    assert!(wants_restart("Y"));
    assert!(wants_restart("  y  trailing"));
    assert!(wants_restart("YES"));
    assert!(!wants_restart("n"));
    assert!(!wants_restart(""));
    assert!(!wants_restart("yep"));
}

#[test]
fn single_round_session_transcript() {
    let (text, arena) = play(
        "Ash\nGary\nn\n",
        ResetPolicy::Zero,
        lineup(&[Species::Charmander]),
        lineup(&[Species::Squirtle]),
    );
    assert_eq!(
        text,
        "Enter the name of Trainer 1: Enter the name of Trainer 2: \n\
Battle starts!\n\
Ash, I choose you, Charmander!\nCharmander: Char-char!\n\
Gary, I choose you, Squirtle!\nSquirtle: squirtle-squirtle!\n\
Gary wins the round!\n\
Ash, rest well, Charmander!\nCharmander: Char-char!\n\
Round ends!\n\
\n\n\
Scoreboard\nTotal Rounds: 1\nTotal Battles: 1\n\
Do you want to restart? (y/n): "
    );
    assert_eq!(arena.rounds_played(), 1);
}

#[test]
fn restarting_resets_counters_between_rounds() {
    let (text, arena) = play(
        "Ash\nGary\ny\nY\nno\n",
        ResetPolicy::Zero,
        default_lineup(),
        default_lineup(),
    );
    assert_eq!(text.matches("Battle starts!").count(), 3);
    assert_eq!(text.matches("Total Rounds: 1\n").count(), 3);
    assert!(!text.contains("Total Rounds: 2"));
    assert_eq!(arena.rounds_played(), 3);
    assert_eq!(arena.scoreboard().total_rounds(), 1);
}

#[test]
fn keep_policy_accumulates_across_restarts() {
    let (text, arena) = play(
        "Ash\nGary\ny\ny\nn\n",
        ResetPolicy::Keep,
        default_lineup(),
        default_lineup(),
    );
    assert!(text.contains("Total Rounds: 1\n"));
    assert!(text.contains("Total Rounds: 2\n"));
    assert!(text.contains("Total Battles: 3\n"));
    assert_eq!(arena.scoreboard().total_battles(), 3);
}

#[test]
fn blank_lines_before_restart_answer_are_skipped() {
    let (text, arena) = play("Ash\nGary\n\ny\nn\n", ResetPolicy::Zero, default_lineup(), default_lineup());
    assert_eq!(arena.rounds_played(), 2);
    assert_eq!(text.matches("Do you want to restart? (y/n): ").count(), 2);
}

#[test]
fn whitespace_only_lines_do_not_end_the_session() {
    let (_, arena) = play(
        "Ash\nGary\n   \n\t\n\nY\n\n\nno\n",
        ResetPolicy::Zero,
        default_lineup(),
        default_lineup(),
    );
    assert_eq!(arena.rounds_played(), 2);
}

#[test]
fn blank_lines_then_end_of_input_end_the_session() {
    let (_, arena) = play("Ash\nGary\n\n\n", ResetPolicy::Zero, default_lineup(), default_lineup());
    assert_eq!(arena.rounds_played(), 1);
}

#[test]
fn end_of_input_ends_the_session() {
    let (text, arena) = play("Ash\nGary\n", ResetPolicy::Zero, default_lineup(), default_lineup());
    assert_eq!(arena.rounds_played(), 1);
    assert!(text.ends_with("Do you want to restart? (y/n): "));
}

#[test]
fn windows_line_endings_are_stripped_from_names() {
    let (text, _) = play(
        "Ash\r\nGary\r\nn\r\n",
        ResetPolicy::Zero,
        lineup(&[Species::Bulbasaur]),
        lineup(&[Species::Charmander]),
    );
    assert!(text.contains("Ash, I choose you, Bulbasaur!\n"));
    assert!(text.contains("Gary wins the round!\n"));
}

#[test]
fn oversized_roster_fails_the_session() {
    let mut input = Cursor::new(b"Ash\nGary\nn\n".to_vec());
    let mut arena = Arena::new(ResetPolicy::Zero);
    let too_many = lineup(&[Species::Squirtle; MAX_POKEBALLS + 1]);
    let result = run_session(
        &mut input,
        &mut std::io::sink(),
        &mut SmallRng::seed_from_u64(0),
        &mut arena,
        too_many,
        default_lineup(),
    );
    assert!(matches!(result, Err(ArenaError::BeltFull { .. })));
    assert_eq!(arena.rounds_played(), 0);
}

#[test]
fn protocol_log_records_each_round() {
    let (_, arena) = play(
        "Ash\nGary\ny\nn\n",
        ResetPolicy::Zero,
        lineup(&[Species::Charmander]),
        lineup(&[Species::Bulbasaur]),
    );
    assert_eq!(
        arena.logger().log_lines(),
        [
            "|round|1",
            "|switch|p1a: Charmander|Charmander",
            "|switch|p2a: Bulbasaur|Bulbasaur",
            "|win|Ash",
            "|round|2",
            "|switch|p1a: Charmander|Charmander",
            "|switch|p2a: Bulbasaur|Bulbasaur",
            "|win|Ash",
        ]
    );
    let json = arena.logger().to_json();
    assert_eq!(json["formatid"], "pokeballarena");
    assert_eq!(json["log"].as_array().map(|l| l.len()), Some(8));
}

#[test]
fn start_battle_reports_outcome() {
    let ash = Trainer::with_lineup("Ash", lineup(&[Species::Squirtle])).expect("fits");
    let gary = Trainer::with_lineup("Gary", lineup(&[Species::Squirtle])).expect("fits");
    let mut arena = Arena::new(ResetPolicy::Zero);
    let report = arena
        .start_battle(&ash, &gary, &mut SmallRng::seed_from_u64(0), &mut std::io::sink())
        .expect("round");
    assert_eq!(report.outcome, RoundOutcome::NoContest);
    assert_eq!(arena.logger().log_lines().last().map(String::as_str), Some("|nocontest|"));
}

#[test]
fn rosters_file_supports_ids_and_nicknames() {
    let path = std::env::temp_dir().join(format!("pokeball-arena-rosters-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "trainer_a": ["squirtle", {"species": "Charmander", "nickname": "Sparky"}],
            "trainer_b": [{"species": "bulbasaur"}]
        }"#,
    )
    .expect("write rosters");
    let (a, b) = load_rosters(&path).expect("rosters load");
    std::fs::remove_file(&path).ok();

    assert_eq!(a, vec![
        Pokemon::new(Species::Squirtle),
        Pokemon::nicknamed("Sparky", Species::Charmander),
    ]);
    assert_eq!(b, vec![Pokemon::new(Species::Bulbasaur)]);
}

#[test]
fn rosters_file_with_unknown_species_is_rejected() {
    let path = std::env::temp_dir().join(format!("pokeball-arena-bad-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"trainer_a": ["pikachu"], "trainer_b": []}"#).expect("write rosters");
    let result = load_rosters(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}

#[test]
fn missing_rosters_file_is_an_error() {
    let path = std::env::temp_dir().join("pokeball-arena-does-not-exist.json");
    assert!(load_rosters(&path).is_err());
}
