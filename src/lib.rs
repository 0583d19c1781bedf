//! Monte Carlo engine for layered missile-defense engagements.
//!
//! A salvo of missiles deploys warheads and decoys; the defense detects,
//! classifies, and engages objects under a finite interceptor inventory and a
//! chosen doctrine (barrage or shoot-look-shoot); outcomes aggregate over
//! many independent trials into distributional statistics.
//!
//! The engine takes one immutable [engine::SimulationConfig] and returns a
//! [engine::MonteCarloRun]; it performs no I/O of its own. The [cli] module
//! is a thin boundary caller.

pub mod cli;
pub mod engine;
pub mod parallel;
