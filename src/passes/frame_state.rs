//! FrameStatePass: lazy per-frame reset of transient tile fields.

use crate::node::TileNode;

/// Reset `tile`'s transient fields if they haven't been touched this frame
/// yet. Idempotent within a frame; cross-frame fields (`was_set_visible`,
/// `was_set_active`, `used_last_frame`) are never touched here.
pub fn reset_frame_state(tile: &mut TileNode, frame_count: u64) {
    if tile.frame.last_frame_visited == frame_count {
        return;
    }
    tile.frame.last_frame_visited = frame_count;
    tile.frame.used = false;
    tile.frame.in_frustum = false;
    tile.frame.is_leaf = false;
    tile.frame.visible = false;
    tile.frame.active = false;
    tile.frame.children_were_visible = false;
    tile.frame.error = 0.0;
}

/// Whether `tile` was marked used during the current frame. Guards against
/// stale `used` values left over from a frame that never revisited this tile.
pub fn is_used_this_frame(tile: &TileNode, frame_count: u64) -> bool {
    tile.frame.last_frame_visited == frame_count && tile.frame.used
}
