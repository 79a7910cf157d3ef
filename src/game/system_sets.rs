//! System organization using SystemSets
//!
//! Every board system runs in one of these sets, chained in `Update`:
//!
//! 1. **Lifecycle** - Start or tear down the active game
//! 2. **Input** - Queue board input and finished engine replies on the channel
//! 3. **Execution** - Drain the channel into the coordinator, oldest first
//! 4. **Publish** - Submit proposed moves and write outbound messages
//!
//! An engine reply that is ready immediately lands on the channel during
//! Publish and is applied in the next frame's Execution, after any input
//! written before it.

use bevy::prelude::*;

/// System execution order for the board coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Systems: start_game_system, end_game_system
    Lifecycle,

    /// Systems: forward_board_input, poll_engine_replies
    Input,

    /// Systems: dispatch_game_inputs
    Execution,

    /// Systems: publish_coordinator_events
    Publish,
}
