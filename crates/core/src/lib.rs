//! Core types for randomized hill climbing on a fixed two-variable objective.
//!
//! This crate holds the pieces that the solvers and observers share:
//!
//! - [`Point`] — a candidate solution `(x, y)`
//! - [`Interval`] and [`Bounds`] — the feasible rectangle searched by a solver
//! - [`objective`] — the fixed quartic bowl being minimized
//! - [`Observer`] — receives solver events and optionally returns control actions

mod bounds;
mod observer;
mod point;

pub mod objective;

pub use bounds::{Axis, Bounds, Interval};
pub use objective::objective;
pub use observer::Observer;
pub use point::Point;
