//! Integration tests for the Tavlei plugin in a Bevy app
//!
//! Board input is written as Bevy messages; outbound messages are collected by
//! a `PostUpdate` system so each test can check what the presentation layer
//! would have seen.

use bevy::prelude::*;
use std::time::{Duration, Instant};
use tavlei::core::GameConfig;
use tavlei::game::events::{
    BoardInput, BoardRedraw, EndGame, GameOverNotification, MoveProposed, MoveReverted, StartGame,
};
use tavlei::game::resources::{ActiveGame, Rules};
use tavlei::game::rules::{EngineNotification, ScriptedRules};
use tavlei::game::types::{GameOutcome, Move, Piece, PieceKind, Position, Side};
use tavlei::TavleiPlugin;

/// Everything the plugin published, across updates
#[derive(Resource, Default, Debug)]
struct Outbox {
    proposed: Vec<MoveProposed>,
    reverted: Vec<MoveReverted>,
    game_over: Vec<GameOutcome>,
    redraws: usize,
}

fn collect_outbound(
    mut outbox: ResMut<Outbox>,
    mut proposed: MessageReader<MoveProposed>,
    mut reverted: MessageReader<MoveReverted>,
    mut game_over: MessageReader<GameOverNotification>,
    mut redraws: MessageReader<BoardRedraw>,
) {
    outbox.proposed.extend(proposed.read().cloned());
    outbox.reverted.extend(reverted.read().cloned());
    outbox
        .game_over
        .extend(game_over.read().map(|message| message.outcome));
    outbox.redraws += redraws.read().count();
}

fn at(column: u8, row: u8) -> Position {
    Position::new(column, row)
}

fn lone_attacker() -> ScriptedRules {
    ScriptedRules::new(vec![Piece::new(
        0,
        Side::Attackers,
        PieceKind::Warrior,
        at(4, 2),
    )])
    .with_legal_moves(at(4, 2), vec![Move::new(at(4, 2), at(4, 3))])
}

/// App with the plugin, `rules` and a started hot-seat game
fn started_app(rules: ScriptedRules) -> App {
    started_app_with(rules, GameConfig::local_two_player())
}

fn started_app_with(rules: ScriptedRules, config: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TavleiPlugin)
        .init_resource::<Outbox>()
        .insert_resource(Rules::new(rules))
        .insert_resource(config)
        .add_systems(PostUpdate, collect_outbound);

    app.world_mut().write_message(StartGame);
    app.update();
    assert!(
        app.world().get_resource::<ActiveGame>().is_some(),
        "StartGame should create the game"
    );
    app
}

fn game(app: &App) -> &ActiveGame {
    app.world().resource::<ActiveGame>()
}

fn tap(app: &mut App, position: Position, is_piece: bool) {
    app.world_mut()
        .write_message(BoardInput::tap(position, is_piece));
}

/// Update until `done` holds or a few seconds pass
fn update_until(app: &mut App, done: impl Fn(&App) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(app) && Instant::now() < deadline {
        app.update();
        std::thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn test_start_game_builds_board() {
    let app = started_app(ScriptedRules::tavlei());

    let coordinator = &game(&app).coordinator;
    assert_eq!(coordinator.board_size(), 9);
    assert_eq!(coordinator.board().piece_count(), 25);
    assert_eq!(coordinator.config(), &GameConfig::default());
}

#[test]
fn test_taps_produce_move_proposed() {
    let mut app = started_app(lone_attacker());

    tap(&mut app, at(4, 2), true);
    tap(&mut app, at(4, 3), false);
    app.update();

    let outbox = app.world().resource::<Outbox>();
    assert_eq!(outbox.proposed.len(), 1);
    assert_eq!(outbox.proposed[0].mv, Move::new(at(4, 2), at(4, 3)));
    assert_eq!(outbox.proposed[0].side, Side::Attackers);
    assert!(game(&app).coordinator.piece_at(at(4, 3)).is_some());

    // The engine's commit echo is applied on the next update
    app.update();
    assert_eq!(game(&app).coordinator.history().len(), 1);
    assert!(app.world().resource::<Outbox>().redraws >= 1);
}

#[test]
fn test_worker_reply_applied_on_later_update() {
    let mut rules = ScriptedRules::new(vec![
        Piece::new(0, Side::Attackers, PieceKind::Warrior, at(0, 4)),
        Piece::new(1, Side::Defenders, PieceKind::Warrior, at(4, 2)),
    ])
    .with_legal_moves(at(4, 2), vec![Move::new(at(4, 2), at(4, 3))])
    .on_worker();
    rules.queue_follow_up(vec![
        EngineNotification::MoveCommitted(Move::new(at(0, 4), at(0, 1))),
        EngineNotification::GameOver(GameOutcome::AttackersWin),
    ]);
    let mut app = started_app_with(rules, GameConfig::vs_computer(Side::Defenders));

    tap(&mut app, at(4, 2), true);
    tap(&mut app, at(4, 3), false);
    app.update();
    assert_eq!(game(&app).pending_replies(), 1);
    assert!(game(&app).coordinator.history().is_empty());

    update_until(&mut app, |app| {
        app.world().resource::<Outbox>().game_over.len() == 1
    });

    let coordinator = &game(&app).coordinator;
    assert_eq!(coordinator.history().len(), 2);
    assert!(coordinator.piece_at(at(0, 1)).is_some());
    assert!(coordinator.piece_at(at(4, 3)).is_some());
    assert_eq!(coordinator.outcome(), Some(GameOutcome::AttackersWin));
    assert_eq!(
        app.world().resource::<Outbox>().game_over,
        vec![GameOutcome::AttackersWin]
    );
}

#[test]
fn test_rule_violation_restores_board() {
    let mut rules = lone_attacker();
    rules.reject(Move::new(at(4, 2), at(4, 3)), "not allowed here");
    let mut app = started_app(rules);

    tap(&mut app, at(4, 2), true);
    tap(&mut app, at(4, 3), false);
    app.update();
    assert!(game(&app).coordinator.piece_at(at(4, 3)).is_some());

    app.update();

    let coordinator = &game(&app).coordinator;
    assert!(coordinator.piece_at(at(4, 2)).is_some());
    assert!(coordinator.piece_at(at(4, 3)).is_none());
    assert!(coordinator.last_move().is_none());
    let outbox = app.world().resource::<Outbox>();
    assert_eq!(outbox.reverted.len(), 1);
    assert_eq!(outbox.reverted[0].mv, Move::new(at(4, 2), at(4, 3)));
}

#[test]
fn test_undo_and_deselect_messages() {
    let mut app = started_app(lone_attacker());

    tap(&mut app, at(4, 2), true);
    app.world_mut().write_message(BoardInput::deselect());
    app.update();
    assert!(game(&app).coordinator.selected().is_none());

    tap(&mut app, at(4, 2), true);
    tap(&mut app, at(4, 3), false);
    app.world_mut().write_message(BoardInput::undo());
    app.update();

    assert!(game(&app).coordinator.piece_at(at(4, 2)).is_some());
    assert_eq!(app.world().resource::<Outbox>().reverted.len(), 1);
}

#[test]
fn test_external_engine_message_is_applied() {
    let mut app = started_app(lone_attacker());

    app.world_mut()
        .write_message(BoardInput::engine(EngineNotification::MoveCommitted(
            Move::new(at(4, 2), at(6, 2)),
        )));
    app.update();

    assert!(game(&app).coordinator.piece_at(at(6, 2)).is_some());
    assert_eq!(app.world().resource::<Outbox>().redraws, 1);
}

#[test]
fn test_end_game_tears_down_channel() {
    let mut app = started_app(lone_attacker());
    let link = game(&app).link();

    app.world_mut().write_message(EndGame);
    app.update();

    assert!(app.world().get_resource::<ActiveGame>().is_none());
    assert!(!link.notify(EngineNotification::GameOver(GameOutcome::Draw)));

    // Input without a game is dropped
    tap(&mut app, at(4, 2), true);
    app.update();
    assert!(app.world().resource::<Outbox>().proposed.is_empty());
}

#[test]
fn test_restart_replaces_game() {
    let mut app = started_app(lone_attacker());
    tap(&mut app, at(4, 2), true);
    tap(&mut app, at(4, 3), false);
    app.update();

    app.world_mut().write_message(StartGame);
    app.update();

    let coordinator = &game(&app).coordinator;
    assert!(coordinator.piece_at(at(4, 2)).is_some());
    assert!(coordinator.history().is_empty());
    assert!(coordinator.last_move().is_none());
}

#[test]
fn test_invalid_config_does_not_start() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TavleiPlugin)
        .insert_resource(Rules::new(lone_attacker()))
        .insert_resource(GameConfig::default().with_board_size(8));

    app.world_mut().write_message(StartGame);
    app.update();

    assert!(app.world().get_resource::<ActiveGame>().is_none());
}
