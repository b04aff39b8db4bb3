//! Renderer collaborator contract.

use crate::config::TraversalConfig;
use crate::node::TileNode;
use crate::stats::Stats;

/// The renderer contract the traversal core depends on.
///
/// Frustum testing and screen-space-error computation are the renderer's
/// geometry; the core only calls into them and reacts to the results. All
/// methods that look up per-tile information take `&TileNode` so a renderer
/// can key off [`crate::node::TileId`] or any other field it needs.
pub trait Renderer {
    /// The current frame counter. Must be monotonically nondecreasing across
    /// calls to [`crate::traversal::Traversal::run_frame`].
    fn frame_count(&self) -> u64;

    /// Tunables driving the SSE/hysteresis decisions this frame.
    fn config(&self) -> &TraversalConfig;

    /// Mutable access to this frame's counters.
    fn stats_mut(&mut self) -> &mut Stats;

    /// Whether any part of `tile`'s bounding volume intersects the camera's
    /// view volume this frame.
    fn tile_in_view(&mut self, tile: &TileNode) -> bool;

    /// The projected screen-space error of `tile`'s representation this
    /// frame. Only called for tiles with `content_empty == false`.
    fn calculate_error(&mut self, tile: &TileNode) -> f64;

    /// Fire-and-forget request to start loading `tile`'s content. Must
    /// return immediately; loading completes asynchronously and becomes
    /// visible to later frames through `tile.loading_state`.
    fn request_tile_contents(&mut self, tile: &TileNode);

    /// Toggle callback. Per SPEC_FULL.md §4.5/§9, this is called with the
    /// *active* flag, not the visible flag — a faithfully-reproduced naming
    /// quirk from the source this traversal is modeled on.
    fn set_tile_visible(&mut self, tile: &TileNode, value: bool);

    /// Toggle callback. Called with the *visible* flag, not the active flag
    /// — see [`Renderer::set_tile_visible`].
    fn set_tile_active(&mut self, tile: &TileNode, value: bool);
}
