//! Per-frame traversal core for a hierarchical 3D tile streaming engine.
//!
//! Given a rooted tree of spatial tiles with progressively refined content,
//! [`Traversal::run_frame`] decides each frame which tiles are in view, which
//! should be requested from backing storage, which should be displayed, and
//! which should be hidden or retired — subject to a bounded content cache
//! (the [`LruCache`] contract) and a screen-space error budget enforced
//! through the [`Renderer`] contract.
//!
//! Frustum testing, SSE computation, content loading, LRU eviction policy,
//! and tileset I/O are all out of scope here; they are the collaborators'
//! concern. This crate is the tree walk that ties them together: four passes
//! run in a fixed order each frame — FrustumPass, LeafMarkPass, SkipPass,
//! TogglePass — maintaining per-tile transient state that gives correct
//! hysteresis across frames.

mod cache;
mod config;
mod error;
mod node;
mod passes;
mod renderer;
mod stats;
mod traversal;

#[cfg(test)]
pub(crate) mod test_support;

pub use cache::{BoundedLru, LruCache};
pub use config::TraversalConfig;
pub use error::{TraversalError, TraversalResult};
pub use node::{FrameState, LoadingState, TileId, TileNode};
pub use renderer::Renderer;
pub use stats::Stats;
pub use traversal::Traversal;
