//! TogglePass: diffs this frame's visibility/active decisions against the
//! prior frame's and fires the minimal set of renderer callbacks.

use crate::node::{LoadingState, TileNode};
use crate::passes::frame_state::is_used_this_frame;
use crate::renderer::Renderer;

/// Walk every tile that is used this frame or was used last frame, firing
/// minimal toggle callbacks and advancing cross-frame bookkeeping. Call on
/// the root; recursion below handles which subtrees still need visiting.
pub fn toggle_tiles(tile: &mut TileNode, renderer: &mut impl Renderer, frame_count: u64) {
    let was_live_at_entry = is_used_this_frame(tile, frame_count) || tile.frame.used_last_frame;

    let is_used = is_used_this_frame(tile, frame_count);
    let (set_active, set_visible) = if is_used {
        (tile.frame.active, tile.frame.active || tile.frame.visible)
    } else {
        (false, false)
    };

    if !tile.content_empty && tile.loading_state == LoadingState::Loaded {
        if tile.frame.was_set_active != set_active {
            renderer.set_tile_visible(tile, set_active);
        }
        if tile.frame.was_set_visible != set_visible {
            renderer.set_tile_active(tile, set_visible);
        }
    }

    tile.frame.was_set_active = set_active;
    tile.frame.was_set_visible = set_visible;
    tile.frame.used_last_frame = is_used;

    if !was_live_at_entry {
        return;
    }

    for child in tile.children.iter_mut() {
        toggle_tiles(child, renderer, frame_count);
    }
}
