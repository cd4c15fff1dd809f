//! **costpath-core**: cost grid model for least-cost pathfinding.
//!
//! This crate provides the foundational types used across *costpath*:
//! coordinates and bounds, the validated cost matrix, and the map text
//! parser that produces it.

pub mod error;
pub mod geom;
pub mod grid;
pub mod map;

pub use error::GridError;
pub use geom::{Bounds, Coordinate, Direction};
pub use grid::{Cost, CostGrid};
pub use map::{MapFile, parse_coordinate};
