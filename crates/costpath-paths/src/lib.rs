//! Least-cost pathfinding over cost grids.
//!
//! This crate turns a [`CostGrid`](costpath_core::CostGrid) into a
//! 4-connected [`Graph`] and searches it:
//!
//! - **Graph construction** from passable cells ([`Graph::build`])
//! - **A\*** shortest-path search with a Manhattan heuristic ([`astar`])
//! - **Path reconstruction** from the search record ([`reconstruct`],
//!   [`find_path`])
//! - **Dijkstra** exhaustive single-source cost maps ([`dijkstra_costs`])
//!
//! Moving onto a cell costs that cell's value plus [`STEP_COST`]. A search
//! starts at the cost of the start cell itself.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod dijkstra;
mod distance;
mod error;
mod graph;
mod neighbors;
mod path;
mod record;
mod traits;

pub use astar::astar;
pub use dijkstra::{CostMap, dijkstra_costs};
pub use distance::manhattan;
pub use error::SearchError;
pub use graph::{Graph, STEP_COST, Vertex};
pub use neighbors::Neighbors;
pub use path::{Path, find_path, reconstruct};
pub use record::{SearchRecord, Visit};
pub use traits::{AstarPather, Pather, WeightedPather};
