//! Full sessions driven through the headless capabilities.

use std::time::Duration;

use vga_memorize::core::{
    check_all, generate, key_code, required_length, FixedSeed, Sequence, Session, SimpleRng,
    Verdict,
};
use vga_memorize::engine::{
    evaluate, DisplayEvent, GameSession, RecordingDisplay, RecordingTimer, ScriptedInput,
};
use vga_memorize::types::{Color, Notice, Phase, EXIT_KEY_CODE, MAX_LEVEL};

const SEED: u32 = 1_380_672_000;
const START_KEY: u32 = b'\r' as u32;

type Headless = GameSession<RecordingDisplay, ScriptedInput, RecordingTimer, FixedSeed>;

fn game(keys: Vec<u32>) -> Headless {
    GameSession::new(
        RecordingDisplay::new(),
        ScriptedInput::new(keys),
        RecordingTimer::new(),
        FixedSeed(SEED),
    )
}

/// Keys that repeat the sequence a fixed-seed round shows at `level`.
fn answer(level: u8) -> Vec<u32> {
    let mut rng = SimpleRng::new(SEED);
    generate(required_length(level), &mut rng)
        .unwrap()
        .iter()
        .map(key_code)
        .collect()
}

fn step_until(game: &mut Headless, phase: Phase) {
    for _ in 0..1_000 {
        if game.step().unwrap() == phase {
            return;
        }
    }
    panic!("never reached {:?}", phase);
}

#[test]
fn escape_on_start_screen_exits() {
    let mut g = game(vec![EXIT_KEY_CODE]);
    g.play().unwrap();
    assert_eq!(g.phase(), Phase::Exited);
    assert_eq!(
        g.display().events(),
        &[
            DisplayEvent::EnterGraphics,
            DisplayEvent::Fill(0),
            DisplayEvent::Show(Notice::Banner),
            DisplayEvent::ExitGraphics,
        ]
    );
}

#[test]
fn perfect_game_ends_in_win_not_level_26() {
    let mut keys = vec![START_KEY];
    for level in 1..=MAX_LEVEL {
        keys.extend(answer(level));
    }
    // Confirm the victory screen, then quit from the banner.
    keys.push(b'x' as u32);
    keys.push(EXIT_KEY_CODE);

    let mut g = game(keys);
    let mut phases = Vec::new();
    while g.phase() != Phase::Exited {
        phases.push(g.step().unwrap());
    }

    assert_eq!(phases.iter().filter(|p| **p == Phase::Won).count(), 1);
    assert_eq!(phases.iter().filter(|p| **p == Phase::Lost).count(), 0);
    assert_eq!(
        phases.iter().filter(|p| **p == Phase::LevelAdvanced).count(),
        (MAX_LEVEL - 1) as usize
    );

    let events = g.display().events();
    assert!(events.contains(&DisplayEvent::Show(Notice::Level(MAX_LEVEL))));
    assert!(!events.contains(&DisplayEvent::Show(Notice::Level(MAX_LEVEL + 1))));
    assert!(events.contains(&DisplayEvent::Show(Notice::Victory)));
    assert_eq!(g.input().remaining(), 0);

    // The banner came back after the win, so the session was reset.
    assert_eq!(*g.session(), Session::new());
}

#[test]
fn flash_holds_shrink_each_level() {
    let mut keys = vec![START_KEY];
    keys.extend(answer(1));
    keys.extend(answer(2));
    let mut g = game(keys);

    step_until(&mut g, Phase::LevelAdvanced);
    step_until(&mut g, Phase::Collecting);

    let holds: Vec<Duration> = g
        .timer()
        .pauses()
        .iter()
        .copied()
        .filter(|d| *d != Duration::from_secs(1) && *d != Duration::from_micros(30_000))
        .collect();
    let mut expected = vec![Duration::from_micros(2_000_000); 4];
    expected.extend(vec![Duration::from_micros(1_940_000); 6]);
    assert_eq!(holds, expected);
}

#[test]
fn loss_after_several_levels_resets_everything() {
    let mut keys = vec![START_KEY];
    keys.extend(answer(1));
    keys.extend(answer(2));
    // Any color other than the first one shown at level 3.
    let first = answer(3)[0];
    let wrong = if first == key_code(Color::Blue) {
        key_code(Color::Green)
    } else {
        key_code(Color::Blue)
    };
    keys.push(wrong);
    keys.push(START_KEY);

    let mut g = game(keys);
    step_until(&mut g, Phase::Lost);
    assert_eq!(g.session().level, 3);
    assert!(g.session().lost);
    assert_eq!(g.verdict(), Some(Verdict::Mismatch { position: 0 }));

    step_until(&mut g, Phase::StartScreen);
    assert_eq!(g.step().unwrap(), Phase::Presenting);
    assert_eq!(*g.session(), Session::new());
}

#[test]
fn escape_while_typing_is_a_wrong_key_not_an_exit() {
    let mut g = game(vec![START_KEY, EXIT_KEY_CODE, EXIT_KEY_CODE]);

    let mut phases = Vec::new();
    while g.phase() != Phase::Exited {
        phases.push(g.step().unwrap());
    }

    assert_eq!(
        phases,
        vec![
            Phase::Presenting,
            Phase::Collecting,
            Phase::Evaluating,
            Phase::Lost,
            Phase::StartScreen,
            Phase::Exited,
        ]
    );
    assert_eq!(g.verdict(), Some(Verdict::Mismatch { position: 0 }));
    assert_eq!(g.input().remaining(), 0);
}

#[test]
fn escape_confirming_the_win_returns_to_start_screen() {
    let mut keys = vec![START_KEY];
    for level in 1..=MAX_LEVEL {
        keys.extend(answer(level));
    }
    keys.push(EXIT_KEY_CODE);
    keys.push(START_KEY);

    let mut g = game(keys);
    step_until(&mut g, Phase::Won);
    assert_eq!(g.step().unwrap(), Phase::StartScreen);
    assert!(g.session().lost);

    // The banner's key decides; here it starts a new game at level one.
    assert_eq!(g.step().unwrap(), Phase::Presenting);
    assert_eq!(*g.session(), Session::new());
    assert_eq!(g.input().remaining(), 0);
}

#[test]
fn each_round_reseeds_the_generator() {
    let mut keys = vec![START_KEY];
    keys.extend(answer(1));
    let mut g = game(keys);

    step_until(&mut g, Phase::Collecting);
    let first: Sequence = g.sequence().clone();
    step_until(&mut g, Phase::Collecting);
    let second = g.sequence();

    // Same seed every round: the longer sequence starts with the shorter one.
    assert_eq!(second.len(), 6);
    assert_eq!(&second.as_slice()[..4], first.as_slice());
}

#[test]
fn level_one_single_blue_scenario() {
    let sequence = Sequence::from_colors(&[Color::Blue]).unwrap();

    let mut session = Session::new();
    let verdict = check_all(&sequence, [Some(Color::Blue)]);
    assert_eq!(evaluate(&mut session, verdict), Phase::LevelAdvanced);
    assert_eq!(session.level, 2);
    assert_eq!(session.required_length, 6);
    assert_eq!(session.flash_duration, 1_940_000);

    let mut session = Session::new();
    let verdict = check_all(&sequence, [Some(Color::Green)]);
    assert_eq!(evaluate(&mut session, verdict), Phase::Lost);
    session.reset();
    assert_eq!(session.level, 1);
    assert_eq!(session.required_length, 4);
    assert_eq!(session.flash_duration, 2_000_000);
}
