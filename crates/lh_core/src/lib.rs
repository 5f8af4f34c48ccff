//! Host-facing contracts and frame plumbing for the Longhall core.
//!
//! This crate deliberately knows nothing about rooms, players, or cats. It
//! owns the three seams where the host environment plugs in:
//!
//! - [`input`] -- raw input records and the level-triggered keyboard state
//!   built from them (repeat-suppressed).
//! - [`time`] -- the wall-clock frame clock that produces the tick deltas
//!   the simulation and animations run on.
//! - [`surface`] -- the two drawing primitives the game consumes, as a
//!   trait so hosts and tests inject their own implementation.

pub mod input;
pub mod surface;
pub mod time;
