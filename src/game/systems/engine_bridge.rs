//! Coordinator events out to the rules engine and the presentation layer

use crate::game::coordinator::CoordinatorEvent;
use crate::game::events::{BoardRedraw, GameOverNotification, MoveProposed, MoveReverted};
use crate::game::resources::{ActiveGame, Rules};
use crate::game::rules::MoveProposal;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Writers for every outbound coordinator message
#[derive(SystemParam)]
pub struct CoordinatorWriters<'w> {
    proposed: MessageWriter<'w, MoveProposed>,
    reverted: MessageWriter<'w, MoveReverted>,
    game_over: MessageWriter<'w, GameOverNotification>,
    redraw: MessageWriter<'w, BoardRedraw>,
}

/// Submit proposed moves to the engine and publish coordinator events
///
/// Engine replies go back through the channel, never straight into the
/// coordinator, so they are applied after everything queued before them.
pub fn publish_coordinator_events(
    game: Option<ResMut<ActiveGame>>,
    mut rules: Option<ResMut<Rules>>,
    mut writers: CoordinatorWriters,
) {
    let Some(mut game) = game else {
        return;
    };

    for event in game.coordinator.drain_events() {
        match event {
            CoordinatorEvent::MoveProposed { mv, side } => {
                match rules.as_mut() {
                    Some(rules) => {
                        let reply = rules.engine_mut().submit(&MoveProposal {
                            mv: mv.clone(),
                            side,
                        });
                        game.accept_reply(reply);
                    }
                    None => warn!("[ENGINE] No rules engine to commit {mv}"),
                }
                writers.proposed.write(MoveProposed { mv, side });
            }
            CoordinatorEvent::MoveReverted { mv } => {
                writers.reverted.write(MoveReverted { mv });
            }
            CoordinatorEvent::GameOverNotification { outcome } => {
                writers.game_over.write(GameOverNotification { outcome });
            }
            CoordinatorEvent::RedrawRequested => {
                writers.redraw.write(BoardRedraw);
            }
        }
    }
}
