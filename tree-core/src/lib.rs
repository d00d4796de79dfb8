//! Core procedural wind-tree growth and rendering library.
//!
//! Main components:
//! - [`branch`] — recursive branch nodes, growth state machine, traversal.
//! - [`leaf`] — terminal leaf nodes with their own growth animation.
//! - [`geometry`] — pure anchor/rotation/size to polygon-vertex math.
//! - [`oscillator`] — bounded angular sway driving the wind jitter.
//! - [`factory`] — tree regeneration and global styling parameters.
//! - [`tree`] — the root handle driven once per frame by the host.
//! - [`canvas`] — polygon-fill trait the host renderer implements.
//! - [`config`] — styling parameters, sampling ranges, validation.
//! - [`types`] — shared color value types.

pub mod branch;
pub mod canvas;
pub mod config;
pub mod factory;
pub mod geometry;
pub mod leaf;
pub mod oscillator;
pub mod tree;
pub mod types;
