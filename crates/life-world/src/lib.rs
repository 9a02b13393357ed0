//! Game of Life grid and simulation engine.
//!
//! [`Grid`] is a dense, bounded cell store with crop, merge and rotate
//! transforms. [`World`] owns a current and a scratch grid and steps them
//! forward under the standard birth-on-3, survive-on-2-or-3 rule.

pub mod codec;
pub mod grid;
pub mod world;
pub mod zoo;

pub use grid::Grid;
pub use world::World;
pub use zoo::Pattern;
