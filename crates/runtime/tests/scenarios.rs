use std::path::PathBuf;

use warrior_content::ContentFactory;
use warrior_core::{Command, Direction, FrameAgent};
use warrior_runtime::{Player, Scenario};

fn content() -> ContentFactory {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    ContentFactory::new(data_dir)
}

/// Plays `player` once per recorded frame, returning the command issued in
/// each turn (or `None`) and the cursor after it.
fn play_recording(player: &mut Player, agent: &mut FrameAgent) -> Vec<(Option<Command>, usize)> {
    let mut log = Vec::new();
    for turn in 0..agent.frame_count() {
        if turn > 0 {
            agent.advance().unwrap();
        }
        player.play_turn(agent);

        let mut issued = agent.commands_in(turn);
        let command = issued.next();
        assert!(issued.next().is_none(), "more than one command in turn {}", turn);
        log.push((command, player.cursor()));
    }
    log
}

#[test]
fn bundled_plans_match_builtin_scenarios() {
    let factory = content();
    assert_eq!(factory.load_plan("level_3").unwrap(), Scenario::Level3.plan());
    assert_eq!(factory.load_plan("level_6").unwrap(), Scenario::Level6.plan());
}

#[test]
fn level_3_playthrough() {
    let frames = content().load_frames("level_3").unwrap();
    let mut agent = FrameAgent::new(frames).unwrap();
    let mut player = Player::for_scenario(Scenario::Level3);

    let log = play_recording(&mut player, &mut agent);

    assert_eq!(
        log,
        vec![
            (Some(Command::Rescue(Direction::Right)), 0),
            (Some(Command::Walk(Direction::Right)), 1),
            (Some(Command::Walk(Direction::Backward)), 2),
            (Some(Command::Attack(Direction::Left)), 3),
            (Some(Command::Attack(Direction::Left)), 3),
            (Some(Command::Walk(Direction::Left)), 4),
            (Some(Command::Walk(Direction::Left)), 5),
            (None, 6),
        ]
    );
    assert!(player.is_finished());
}

#[test]
fn level_6_playthrough() {
    let frames = content().load_frames("level_6").unwrap();
    let mut agent = FrameAgent::new(frames).unwrap();
    let mut player = Player::for_scenario(Scenario::Level6);

    let log = play_recording(&mut player, &mut agent);

    assert_eq!(
        log,
        vec![
            (Some(Command::Walk(Direction::Backward)), 0),
            // The captive already reads as bound, so the rescue step is skipped
            (Some(Command::Walk(Direction::Forward)), 2),
            (Some(Command::Attack(Direction::Forward)), 3),
            (Some(Command::Attack(Direction::Forward)), 3),
            (Some(Command::Walk(Direction::Backward)), 4),
            (Some(Command::Rest), 5),
            (Some(Command::Walk(Direction::Forward)), 6),
            (Some(Command::Attack(Direction::Forward)), 7),
            (Some(Command::Walk(Direction::Forward)), 8),
            (Some(Command::Attack(Direction::Forward)), 9),
            (None, 10),
        ]
    );
    assert!(player.is_finished());
}

#[test]
fn finished_player_stays_silent() {
    let frames = content().load_frames("level_3").unwrap();
    let mut agent = FrameAgent::new(frames).unwrap();
    let mut player = Player::for_scenario(Scenario::Level3);
    play_recording(&mut player, &mut agent);

    let issued = agent.commands().len();
    for _ in 0..5 {
        player.play_turn(&mut agent);
    }
    assert_eq!(agent.commands().len(), issued);
    assert_eq!(player.cursor(), Scenario::Level3.plan().len());
}

#[test]
fn scenarios_share_no_state() {
    let frames = content().load_frames("level_3").unwrap();
    let mut agent = FrameAgent::new(frames).unwrap();
    let mut first = Player::for_scenario(Scenario::Level3);
    play_recording(&mut first, &mut agent);

    let second = Player::for_scenario(Scenario::Level3);
    assert!(first.is_finished());
    assert_eq!(second.cursor(), 0);
    assert!(!second.is_finished());
}

#[test]
fn bundled_config_drives_player() {
    let config = content().load_config().unwrap();
    assert!(config.emit_thoughts);
    assert_eq!(config.turn_limit, 200);

    let mut agent = FrameAgent::new(content().load_frames("level_3").unwrap()).unwrap();
    let mut player = Player::for_scenario(Scenario::Level3).with_config(config);
    player.play_turn(&mut agent);

    let markers: Vec<_> = agent.thoughts().iter().map(|(_, m)| m.as_str()).collect();
    assert_eq!(markers, vec!["0", "0"]);
}
