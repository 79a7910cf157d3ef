//! Scoped game channel
//!
//! Every input that can change a game goes through one queue: player taps,
//! undo and deselect requests, and rules engine notifications. The channel is
//! created with the game instance and dropped with it, so a finished game can
//! never receive input meant for the next one.
//!
//! Producers hold a cheap [`GameLink`] and may live on any thread (an engine
//! worker, a tooling thread). The single consumer drains in arrival order.

use crate::game::rules::EngineNotification;
use crate::game::types::Position;
use bevy::prelude::*;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// One serialized input to the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameInput {
    /// The presentation layer saw a tap on `target`
    Tap { target: Position, is_piece: bool },
    Deselect,
    Undo,
    Engine(EngineNotification),
}

/// Receiving end of a game's input queue
#[derive(Debug)]
pub struct GameChannel {
    sender: Sender<GameInput>,
    receiver: Receiver<GameInput>,
}

impl GameChannel {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Producer handle feeding this channel
    pub fn link(&self) -> GameLink {
        GameLink {
            sender: self.sender.clone(),
        }
    }

    pub fn send(&self, input: GameInput) {
        let _ = self.sender.send(input);
    }

    /// Everything queued so far, oldest first
    pub fn drain(&self) -> Vec<GameInput> {
        self.receiver.try_iter().collect()
    }

    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl Default for GameChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable producer for a [`GameChannel`]
#[derive(Debug, Clone)]
pub struct GameLink {
    sender: Sender<GameInput>,
}

impl GameLink {
    /// Queue `input`; returns `false` once the game it belonged to is gone
    pub fn send(&self, input: GameInput) -> bool {
        match self.sender.send(input) {
            Ok(()) => true,
            Err(err) => {
                debug!("[CHANNEL] Game ended, dropping {:?}", err.into_inner());
                false
            }
        }
    }

    pub fn notify(&self, notification: EngineNotification) -> bool {
        self.send(GameInput::Engine(notification))
    }
}
