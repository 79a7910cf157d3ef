//! Input forwarding and serialized dispatch
//!
//! Board input arrives as [`BoardInput`] messages and engine results arrive
//! from finished tasks. Both are queued on the game's channel first; one
//! dispatcher then applies the whole queue in arrival order, so the
//! coordinator never sees two inputs at once.

use crate::game::events::BoardInput;
use crate::game::resources::{ActiveGame, Rules};
use bevy::prelude::*;

/// Queue this frame's [`BoardInput`] messages on the active game's channel
pub fn forward_board_input(mut inputs: MessageReader<BoardInput>, game: Option<Res<ActiveGame>>) {
    let Some(game) = game else {
        let dropped = inputs.read().count();
        if dropped > 0 {
            debug!("[INPUT] No running game, dropped {dropped} inputs");
        }
        return;
    };

    for BoardInput(input) in inputs.read() {
        game.channel.send(input.clone());
    }
}

/// Move finished engine replies onto the channel
pub fn poll_engine_replies(game: Option<ResMut<ActiveGame>>) {
    let Some(mut game) = game else {
        return;
    };
    if game.pending_replies() == 0 {
        return;
    }

    let completed = game.collect_finished_replies();
    if completed > 0 {
        debug!("[ENGINE] {completed} engine replies ready");
    }
}

/// Apply every queued input to the coordinator, oldest first
pub fn dispatch_game_inputs(game: Option<ResMut<ActiveGame>>, rules: Option<Res<Rules>>) {
    let (Some(mut game), Some(rules)) = (game, rules) else {
        return;
    };

    let ActiveGame {
        coordinator,
        channel,
        ..
    } = &mut *game;

    for input in channel.drain() {
        if let Err(e) = coordinator.handle(input.clone(), rules.engine()) {
            error!("[INPUT] Rejected {input:?}: {e}");
        }
    }
}
