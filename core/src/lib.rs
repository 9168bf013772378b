//! Board model and two-step move selection shared by the pawn game and the number puzzle.
//!
//! A [`Board`] owns the grid and decides move legality, a [`MoveSelector`] turns position picks
//! into moves against it. Games differ only in their [`CellLabel`] type, their [`StepRule`] and
//! their starting [`Layout`].

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use layout::*;
pub use number::NumberTile;
pub use observer::SubscriptionId;
pub use pawn::Pawn;
pub use selector::*;
pub use session::*;
pub use types::*;

pub(crate) use observer::Listeners;

pub mod number;
pub mod pawn;

mod board;
mod cell;
mod error;
mod layout;
mod observer;
mod selector;
mod session;
mod types;
