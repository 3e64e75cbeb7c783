//! `oc-spatial` — route geometry and reachability.
//!
//! Two independent representations of the same routing problem live here:
//! the free-form segment network the player draws, and the fixed tile grid
//! of the tile-placement variant.  They share no state.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`network`]   | `PathNetwork`, `PathSegment`, `add_segment`, …            |
//! | [`reach`]     | BFS `reachability` over a `PathNetwork`                   |
//! | [`tiles`]     | `TileGrid`, connector table, `solve_tiles`                |
//! | [`obstacles`] | `generate_obstacles`, `ObstacleMap`                       |
//! | [`draw`]      | Rule-checked editing (`draw_segment`, `DrawRules`)        |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod draw;
pub mod error;
pub mod network;
pub mod obstacles;
pub mod reach;
pub mod tiles;

#[cfg(test)]
mod tests;

pub use draw::{DrawRules, EditOutcome, draw_segment};
pub use error::{SpatialError, SpatialResult};
pub use network::{Orientation, PathNetwork, PathSegment, add_segment, remove_segment};
pub use obstacles::{Obstacle, ObstacleKind, ObstacleMap, generate_obstacles, generate_obstacles_with};
pub use reach::{ReachTrace, Reachability, reachability, reachability_traced, reachable_cells};
pub use tiles::{Connectors, Rotation, Tile, TileGrid, TileShape, TileSolution, connectors, solve_tiles};
