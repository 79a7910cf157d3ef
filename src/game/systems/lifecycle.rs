//! Game instance lifecycle: start and tear down

use crate::core::GameConfig;
use crate::game::coordinator::Coordinator;
use crate::game::events::{EndGame, StartGame};
use crate::game::resources::{ActiveGame, Rules};
use bevy::prelude::*;

/// Build a new [`ActiveGame`] from the config and the rules engine's opening
///
/// Several requests in one frame start a single game. A running game is
/// replaced, closing its channel.
pub fn start_game_system(
    mut commands: Commands,
    mut requests: MessageReader<StartGame>,
    config: Res<GameConfig>,
    rules: Option<Res<Rules>>,
    active: Option<Res<ActiveGame>>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let Some(rules) = rules else {
        error!("[LIFECYCLE] StartGame requested without a Rules resource");
        return;
    };

    if let Err(e) = config.validate() {
        error!("[LIFECYCLE] Refusing to start game: {e}");
        return;
    }

    match Coordinator::from_engine(config.clone(), rules.engine()) {
        Ok(coordinator) => {
            if active.is_some() {
                info!("[LIFECYCLE] Replacing running game");
            }
            commands.insert_resource(ActiveGame::new(coordinator));
        }
        Err(e) => error!("[LIFECYCLE] Opening position rejected: {e}"),
    }
}

/// Drop the [`ActiveGame`], its channel and any engine work in flight
pub fn end_game_system(
    mut commands: Commands,
    mut requests: MessageReader<EndGame>,
    active: Option<Res<ActiveGame>>,
) {
    if requests.read().count() == 0 {
        return;
    }
    if active.is_none() {
        debug!("[LIFECYCLE] EndGame with no running game");
        return;
    }
    info!("[LIFECYCLE] Game ended");
    commands.remove_resource::<ActiveGame>();
}
