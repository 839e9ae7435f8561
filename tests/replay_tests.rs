//! Deterministic replay: a recorded input log played twice gives the same frames

use serde::{Deserialize, Serialize};

use tui_arcade::engine::{update_snake, update_tetris, Engine, SnakeConfig, TetrisConfig};
use tui_arcade::types::{keys, BuiltinEvent, SnakeEvent, TICK_MS};

/// Keys pressed before each frame, plus the seed the run started from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Recording {
    seed: u32,
    frames: Vec<Vec<BuiltinEvent>>,
}

fn script(seed: u32, len: usize, codes: &[&str]) -> Recording {
    let frames = (0..len)
        .map(|i| {
            if i % 7 == 3 {
                vec![BuiltinEvent::key_down(codes[(i / 7) % codes.len()])]
            } else {
                Vec::new()
            }
        })
        .collect();
    Recording { seed, frames }
}

fn play_tetris(recording: &Recording) -> Vec<String> {
    let config = TetrisConfig {
        gravity_ticks: 5,
        seed: recording.seed,
        ..TetrisConfig::default()
    };
    let mut engine: Engine<BuiltinEvent> = Engine::new(0);
    let mut game = config.new_game();
    let mut frames = Vec::with_capacity(recording.frames.len());

    for (i, keys) in recording.frames.iter().enumerate() {
        for key in keys {
            engine.publish(key.clone());
        }
        game = update_tetris(game, engine.frame((i as u64 + 1) * TICK_MS), &config);
        frames.push(serde_json::to_string(&game.snapshot()).unwrap());
    }
    frames
}

fn play_snake(recording: &Recording) -> Vec<String> {
    let config = SnakeConfig {
        update_rate: 2,
        seed: recording.seed,
        ..SnakeConfig::default()
    };
    let mut engine: Engine<SnakeEvent> = Engine::new(0);
    let mut model = config.new_model();
    let mut frames = Vec::with_capacity(recording.frames.len());

    for (i, keys) in recording.frames.iter().enumerate() {
        for key in keys {
            engine.publish(SnakeEvent::from(key.clone()));
        }
        let batch = engine.frame((i as u64 + 1) * TICK_MS);
        model = update_snake(model, batch, engine.publisher());
        frames.push(serde_json::to_string(&model.snapshot()).unwrap());
    }
    frames
}

const TETRIS_KEYS: [&str; 6] = [
    keys::ARROW_LEFT,
    keys::KEY_X,
    keys::ARROW_RIGHT,
    keys::ARROW_UP,
    keys::ARROW_DOWN,
    keys::KEY_Z,
];

const SNAKE_KEYS: [&str; 4] = [
    keys::ARROW_UP,
    keys::ARROW_LEFT,
    keys::ARROW_DOWN,
    keys::ARROW_RIGHT,
];

#[test]
fn tetris_replays_identically() {
    let recording = script(12345, 400, &TETRIS_KEYS);
    assert_eq!(play_tetris(&recording), play_tetris(&recording));
}

#[test]
fn tetris_replays_from_a_serialized_log() {
    let recording = script(99, 300, &TETRIS_KEYS);
    let log = serde_json::to_string(&recording).unwrap();
    let loaded: Recording = serde_json::from_str(&log).unwrap();

    assert_eq!(loaded, recording);
    assert_eq!(play_tetris(&loaded), play_tetris(&recording));
}

#[test]
fn snake_replays_from_a_serialized_log() {
    let recording = script(4242, 300, &SNAKE_KEYS);
    let log = serde_json::to_string_pretty(&recording).unwrap();
    let loaded: Recording = serde_json::from_str(&log).unwrap();

    assert_eq!(play_snake(&loaded), play_snake(&recording));
}

#[test]
fn key_events_serialize_with_dom_codes() {
    let json = serde_json::to_string(&BuiltinEvent::key_down(keys::ARROW_UP)).unwrap();
    assert_eq!(json, r#"{"tag":"keydown","code":"ArrowUp","key":"ArrowUp"}"#);

    let eats: SnakeEvent = serde_json::from_str(r#"{"tag":"eats"}"#).unwrap();
    assert_eq!(eats, SnakeEvent::Eats);
}

#[test]
fn snapshots_round_trip_through_json() {
    let recording = script(7, 120, &TETRIS_KEYS);
    let frames = play_tetris(&recording);
    let last = frames.last().unwrap();

    let snap: tui_arcade::core::TetrisSnapshot = serde_json::from_str(last).unwrap();
    assert_eq!(&serde_json::to_string(&snap).unwrap(), last);
}
