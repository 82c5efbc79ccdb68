//! ECS Components для акторов (не оружие)
//!
//! Организация по доменам:
//! - actor: живучесть и физические слои (Health, Hittable, CollisionLayers)
//! - player: player control marker + камера (Player, PlayerCamera)
//! - inventory: запас патронов владельца (AmmoPouch)

pub mod actor;
pub mod inventory;
pub mod player;

pub use actor::*;
pub use inventory::*;
pub use player::*;
