//! Cheapest-path search across a network of teleporters, where a jump is only
//! possible between teleporters within a maximum range and every departure
//! spends energy from a limited budget.
//!
//! The search is Dijkstra's algorithm driven by a resizable binary [MinHeap].
//! Improved costs are pushed as new heap entries rather than updated in place;
//! stale entries are skipped when popped because their teleporter has already
//! been visited.
//!
//! # Example
//!
//! ```rust
//! use teleport_pathfinding::*;
//!
//! let teleporters: Vec<_> = (0..4).map(|i| Teleporter::new(5, [i * 10, 0])).collect();
//! let mut pf = Pathfinder::new(teleporters);
//!
//! // Jumps of up to 15 units, with 100 energy to spend.
//! let path = pf.find_path(0, 3, 100, 15).unwrap().unwrap();
//! assert_eq!(&[0, 1, 2, 3], path);
//! assert_eq!(Some(15), pf.path_cost());
//!
//! // Not enough energy: reaching teleporter 2 would already cost 10.
//! assert!(pf.find_path(0, 3, 10, 15).unwrap().is_none());
//! ```
pub mod error;
pub mod min_heap;
pub mod pathfinder;
pub mod teleporter;

pub use error::PathError;
pub use min_heap::MinHeap;
pub use pathfinder::{Pathfinder, UNREACHABLE};
pub use sark_grids::GridPoint;
pub use teleporter::Teleporter;
