//! The running game instance and the rules engine it talks to

use crate::game::channel::{GameChannel, GameInput, GameLink};
use crate::game::coordinator::Coordinator;
use crate::game::rules::{EngineNotification, EngineReply, RulesEngine};
use bevy::prelude::*;
use bevy::tasks::{block_on, Task};
use futures_lite::future;

/// Rules engine consulted by the active game
///
/// Insert before sending [`StartGame`](crate::game::events::StartGame); the
/// opening position is taken from it.
#[derive(Resource)]
pub struct Rules(pub Box<dyn RulesEngine>);

impl Rules {
    pub fn new(engine: impl RulesEngine) -> Self {
        Self(Box::new(engine))
    }

    pub fn engine(&self) -> &dyn RulesEngine {
        self.0.as_ref()
    }

    pub fn engine_mut(&mut self) -> &mut dyn RulesEngine {
        self.0.as_mut()
    }
}

/// One game instance: coordinator, its input channel and in-flight engine work
///
/// Removing the resource ends the game. The channel closes with it and any
/// engine task still running is dropped, so late results cannot leak into the
/// next game.
#[derive(Resource)]
pub struct ActiveGame {
    pub coordinator: Coordinator,
    pub channel: GameChannel,
    pending: Vec<Task<Vec<EngineNotification>>>,
}

impl ActiveGame {
    pub fn new(coordinator: Coordinator) -> Self {
        Self {
            coordinator,
            channel: GameChannel::new(),
            pending: Vec::new(),
        }
    }

    /// Producer handle for code that feeds this game from elsewhere
    pub fn link(&self) -> GameLink {
        self.channel.link()
    }

    /// Route an engine reply onto the channel, or park it until it finishes
    pub fn accept_reply(&mut self, reply: EngineReply) {
        match reply {
            EngineReply::Ready(notifications) => {
                for notification in notifications {
                    self.channel.send(GameInput::Engine(notification));
                }
            }
            EngineReply::Pending(task) => self.pending.push(task),
        }
    }

    /// Move results of finished engine tasks onto the channel
    ///
    /// Returns how many tasks completed.
    pub fn collect_finished_replies(&mut self) -> usize {
        let mut completed = 0;
        let mut still_running = Vec::with_capacity(self.pending.len());

        for mut task in self.pending.drain(..) {
            if !task.is_finished() {
                still_running.push(task);
                continue;
            }
            match block_on(future::poll_once(&mut task)) {
                Some(notifications) => {
                    completed += 1;
                    for notification in notifications {
                        self.channel.send(GameInput::Engine(notification));
                    }
                }
                None => {
                    warn!("[ENGINE] Task reported finished but result not available");
                    still_running.push(task);
                }
            }
        }

        self.pending = still_running;
        completed
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }
}

impl std::fmt::Debug for ActiveGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveGame")
            .field("coordinator", &self.coordinator)
            .field("channel", &self.channel)
            .field("pending", &self.pending.len())
            .finish()
    }
}
