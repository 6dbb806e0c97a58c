//! Console game integration tests - scripted games end to end

use std::io::Cursor;

use tenpin::console::Game;
use tenpin::core::ScoreBoard;

fn play(script: String) -> (Vec<ScoreBoard>, String) {
    let mut out = Vec::new();
    let mut game = Game::new(Cursor::new(script), &mut out);
    game.run().expect("scripted game should run to completion");
    let players = game.players().to_vec();
    drop(game);
    (players, String::from_utf8(out).unwrap())
}

#[test]
fn test_two_player_game_prints_both_sheets() {
    // Alice strikes everything, Bob finds the gutter every time.
    let mut script = String::from("Alice\ny\nBob\nn\n");
    for _ in 1..=9 {
        script.push_str("10\n"); // Alice, frame over
        script.push_str("0\n0\n"); // Bob
    }
    script.push_str("10\n10\n10\n"); // Alice's tenth with both extra shots
    script.push_str("0\n0\n"); // Bob's tenth, no extra shot

    let (players, transcript) = play(script);

    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.is_complete()));

    assert!(transcript.contains("-- Alice"));
    assert!(transcript.contains("-- Bob"));
    assert!(transcript.contains("Final Score: 300"));
    assert!(transcript.contains("Final Score: 0"));
    assert!(transcript.contains("Total Strikes: 12"));
    assert!(transcript.contains("You got two extra shots"));

    assert_eq!(players[0].score_of(10).unwrap(), 30);
    assert_eq!(players[1].score_of(10).unwrap(), 0);
}

#[test]
fn test_spare_earns_one_extra_shot() {
    let mut script = String::from("Cleo\nn\n");
    for _ in 1..=9 {
        script.push_str("0\n0\n");
    }
    script.push_str("4\n6\n10\n");

    let (players, transcript) = play(script);

    assert!(transcript.contains("You got one extra shot"));
    assert!(transcript.contains("EXTRA SHOT 1"));
    assert_eq!(players[0].score_of(10).unwrap(), 20);
    assert!(players[0].is_complete());
}

#[test]
fn test_bad_entries_are_reprompted_without_consuming_a_shot() {
    let mut script = String::from("Iggy\nn\n");
    // frame 1: garbage, out-of-range number, then an engine rejection
    script.push_str("pins\n42\n8\n");
    script.push_str("5\n2\n"); // 8+5 exceeds the frame, then a legal 2
    for _ in 2..=9 {
        script.push_str("0\n0\n");
    }
    script.push_str("0\n0\n");

    let (players, transcript) = play(script);

    assert!(transcript.contains("is not a pin count"));
    assert!(transcript.contains("maximum value that can be set is 2"));
    assert_eq!(players[0].score_of(1).unwrap(), 10);
    assert!(players[0].is_complete());
}

#[test]
fn test_game_aborts_when_input_runs_dry() {
    let script = String::from("Max\nn\n10\n");
    let mut out = Vec::new();
    let mut game = Game::new(Cursor::new(script), &mut out);
    assert!(game.run().is_err());
}
