//! FrustumPass: recursive descent marking the in-frustum used set.

use log::trace;

use crate::cache::LruCache;
use crate::node::TileNode;
use crate::passes::frame_state::reset_frame_state;
use crate::renderer::Renderer;

/// Recursively descend `tile`, marking the in-frustum used set and recording
/// each visited tile's screen-space error. Returns whether any part of this
/// subtree is in frustum and used.
pub fn determine_frustum_set(
    tile: &mut TileNode,
    renderer: &mut impl Renderer,
    cache: &mut impl LruCache,
) -> bool {
    let frame_count = renderer.frame_count();
    reset_frame_state(tile, frame_count);

    if !renderer.tile_in_view(tile) {
        return false;
    }

    tile.frame.used = true;
    tile.frame.in_frustum = true;
    renderer.stats_mut().in_frustum += 1;
    cache.mark_used(tile.id);

    if !tile.content_empty {
        let error = renderer.calculate_error(tile);
        tile.frame.error = error;
        if error <= renderer.config().error_target {
            trace!("tile {:?} meets error target, stopping descent", tile.id);
            return true;
        }
    }

    let max_depth = renderer.config().max_depth;
    if max_depth > 0 && tile.depth + 1 >= max_depth as u32 {
        trace!("tile {:?} hit max depth, stopping descent", tile.id);
        return true;
    }

    let mut any_children_used = false;
    for child in tile.children.iter_mut() {
        if determine_frustum_set(child, renderer, cache) {
            any_children_used = true;
        }
    }

    if any_children_used && renderer.config().load_siblings {
        debug_log_sibling_loading(tile.id);
        for child in tile.children.iter_mut() {
            mark_subtree_used_through_content_empty(child, frame_count, cache);
        }
    }

    true
}

fn debug_log_sibling_loading(id: crate::node::TileId) {
    log::debug!("sibling-loading activated under tile {:?}", id);
}

/// Mark `tile` used, and if it carries no content of its own, keep marking
/// its children the same way until a tile with actual content is reached.
/// Does not touch `in_frustum` or frustum stats — these tiles were not
/// necessarily tested against the frustum, only pulled in for residency.
fn mark_subtree_used_through_content_empty(
    tile: &mut TileNode,
    frame_count: u64,
    cache: &mut impl LruCache,
) {
    reset_frame_state(tile, frame_count);
    tile.frame.used = true;
    cache.mark_used(tile.id);

    if tile.content_empty {
        for child in tile.children.iter_mut() {
            mark_subtree_used_through_content_empty(child, frame_count, cache);
        }
    }
}
