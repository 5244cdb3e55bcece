//! Reusable observers for the climb solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both [`hill_climb`] and [`refine`].
//!
//! # Observers
//!
//! - [`TraceObserver`] — logs progress through `tracing`
//! - [`TargetValue`] — stops once the incumbent reaches a target value
//! - [`PathRecorder`] — records the incumbent's path
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasMove`], [`CanStopEarly`])
//!
//! [`Observer`]: climb_core::Observer
//! [`hill_climb`]: climb_solvers::hill_climb
//! [`refine`]: climb_solvers::refine
//! [`HasObjective`]: traits::HasObjective
//! [`HasMove`]: traits::HasMove
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod target;
mod trace;

pub use recorder::PathRecorder;
pub use target::TargetValue;
pub use trace::TraceObserver;
