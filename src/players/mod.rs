//! Sides of a match and the controllers that drive them.
//!
//! ## Key Types
//!
//! - `PlayerState`: Lives, pass flag and deck of one side
//! - `PlayerController`: Decides moves (`HumanController`, `AiController`)
//! - `TurnContext`: Read-only state handed to a controller
//! - `View`: Input/log surface used by the human controller

pub mod ai;
pub mod controller;
pub mod human;
pub mod state;
pub mod view;

pub use ai::AiController;
pub use controller::{ControllerKind, PlayerController, TurnContext};
pub use human::HumanController;
pub use state::PlayerState;
pub use view::{HandChoice, View};
