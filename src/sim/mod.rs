//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed cadence only (one call to `tick` per loop iteration)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Mutation of the [`World`] is confined to the thread that calls `tick`;
//! input reaches it exclusively as [`Intent`] values.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, segment_hit};
pub use state::{Ball, Control, Court, Paddle, Score, Side, World};
pub use tick::{Intent, tick};
