//! Resource module unit tests
//!
//! `ActiveGame` routes engine replies onto its channel: ready replies at once,
//! task replies once the task has finished.

use super::*;
use crate::core::GameConfig;
use crate::game::channel::GameInput;
use crate::game::coordinator::Coordinator;
use crate::game::rules::{EngineNotification, EngineReply, MoveProposal, RulesEngine, ScriptedRules};
use crate::game::types::{GameOutcome, Move, Position, Side};
use bevy::tasks::{AsyncComputeTaskPool, TaskPool};
use std::time::{Duration, Instant};

fn new_game() -> ActiveGame {
    let coordinator = Coordinator::from_engine(GameConfig::default(), &ScriptedRules::tavlei())
        .expect("standard opening");
    ActiveGame::new(coordinator)
}

fn wait_for_replies(game: &mut ActiveGame) -> usize {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut completed = 0;
    while game.pending_replies() > 0 && Instant::now() < deadline {
        completed += game.collect_finished_replies();
        std::thread::sleep(Duration::from_millis(1));
    }
    completed
}

#[test]
fn test_active_game_ready_reply_goes_to_channel() {
    let mut game = new_game();
    game.accept_reply(EngineReply::Ready(vec![EngineNotification::GameOver(
        GameOutcome::Draw,
    )]));

    assert_eq!(game.pending_replies(), 0);
    assert_eq!(
        game.channel.drain(),
        vec![GameInput::Engine(EngineNotification::GameOver(
            GameOutcome::Draw
        ))]
    );
}

#[test]
fn test_active_game_empty_reply() {
    let mut game = new_game();
    game.accept_reply(EngineReply::none());
    assert_eq!(game.channel.pending(), 0);
}

#[test]
fn test_active_game_collects_finished_task() {
    let mut game = new_game();
    let task = AsyncComputeTaskPool::get_or_init(TaskPool::default).spawn(async {
        vec![EngineNotification::GameOver(GameOutcome::AttackersWin)]
    });
    game.accept_reply(EngineReply::Pending(task));
    assert_eq!(game.pending_replies(), 1);

    assert_eq!(wait_for_replies(&mut game), 1);
    assert_eq!(game.pending_replies(), 0);
    assert_eq!(
        game.channel.drain(),
        vec![GameInput::Engine(EngineNotification::GameOver(
            GameOutcome::AttackersWin
        ))]
    );
}

#[test]
fn test_active_game_worker_engine_round_trip() {
    let mut game = new_game();
    let mut rules = ScriptedRules::tavlei().on_worker();
    let mv = Move::new(Position::new(4, 2), Position::new(4, 3));

    let reply = rules.submit(&MoveProposal {
        mv: mv.clone(),
        side: Side::Defenders,
    });
    game.accept_reply(reply);
    wait_for_replies(&mut game);

    assert_eq!(
        game.channel.drain(),
        vec![GameInput::Engine(EngineNotification::MoveCommitted(mv))]
    );
}

#[test]
fn test_link_feeds_same_channel() {
    let game = new_game();
    let link = game.link();
    assert!(link.send(GameInput::Undo));
    assert_eq!(game.channel.drain(), vec![GameInput::Undo]);
}

#[test]
fn test_rules_resource_boxes_engine() {
    let rules = Rules::new(ScriptedRules::tavlei());
    assert_eq!(rules.engine().starting_position().len(), 25);
}
