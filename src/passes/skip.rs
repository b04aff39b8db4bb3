//! SkipPass: decides which used tiles become visible/active this frame and
//! which should be requested from the cache.

use log::debug;

use crate::cache::LruCache;
use crate::node::{LoadingState, TileNode};
use crate::passes::frame_state::is_used_this_frame;
use crate::renderer::Renderer;

/// Run the skip/visibility decision on `tile`. Must only be called on tiles
/// for which `is_used_this_frame` is true.
pub fn skip_traversal(tile: &mut TileNode, renderer: &mut impl Renderer, cache: &mut impl LruCache) {
    let frame_count = renderer.frame_count();
    let error_requirement = renderer.config().error_requirement();
    let meets_sse = tile.frame.error <= error_requirement;
    let has_content = !tile.content_empty;
    let loaded_content = tile.loading_state.is_loaded() && has_content;

    if tile.frame.is_leaf {
        skip_leaf(tile, renderer, cache, loaded_content);
        return;
    }

    let all_children_have_content = tile
        .children
        .iter()
        .filter(|child| is_used_this_frame(child, frame_count))
        .all(|child| child.loading_state.is_loaded() || tile.content_empty);

    if meets_sse && !loaded_content && !cache.is_full() && has_content {
        renderer.request_tile_contents(tile);
    }

    if meets_sse && !all_children_have_content && !tile.frame.children_were_visible {
        if loaded_content {
            mark_visible_and_active(tile, renderer, true);
        }
        for child in tile.children.iter_mut() {
            if is_used_this_frame(child, frame_count) && !cache.is_full() {
                renderer.request_tile_contents(child);
            }
        }
        debug!(
            "tile {:?} showing parent LOD while children load",
            tile.id
        );
        return;
    }

    for child in tile.children.iter_mut() {
        if is_used_this_frame(child, frame_count) {
            skip_traversal(child, renderer, cache);
        }
    }
}

fn skip_leaf(
    tile: &mut TileNode,
    renderer: &mut impl Renderer,
    cache: &mut impl LruCache,
    loaded_content: bool,
) {
    if loaded_content {
        mark_visible_and_active(tile, renderer, tile.frame.in_frustum);
    } else if !cache.is_full() {
        renderer.request_tile_contents(tile);
    }
}

fn mark_visible_and_active(tile: &mut TileNode, renderer: &mut impl Renderer, eligible_for_visible: bool) {
    if eligible_for_visible {
        tile.frame.visible = true;
        renderer.stats_mut().visible += 1;
    }
    tile.frame.active = true;
    renderer.stats_mut().active += 1;
}
