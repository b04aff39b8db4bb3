//! LeafMarkPass: marks leaves within the used set and propagates the
//! hysteresis signal upward.

use crate::node::TileNode;
use crate::passes::frame_state::is_used_this_frame;
use crate::stats::Stats;

/// Walk the used subtree rooted at `tile`, marking tiles with no used
/// children as leaves and aggregating `children_were_visible` from the
/// previous frame's toggle decisions. Must only be called on tiles for which
/// `is_used_this_frame` is true.
pub fn mark_used_set_leaves(tile: &mut TileNode, frame_count: u64, stats: &mut Stats) {
    stats.used += 1;

    let any_children_used = tile
        .children
        .iter()
        .any(|child| is_used_this_frame(child, frame_count));

    if !any_children_used {
        tile.frame.is_leaf = true;
        return;
    }

    let mut children_were_visible = false;
    for child in tile.children.iter_mut() {
        if is_used_this_frame(child, frame_count) {
            mark_used_set_leaves(child, frame_count, stats);
        }
        children_were_visible |= child.frame.was_set_visible || child.frame.children_were_visible;
    }
    tile.frame.children_were_visible = children_were_visible;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used_leaf(depth: u32, frame_count: u64) -> TileNode {
        let mut tile = TileNode::leaf(false, depth);
        tile.frame.last_frame_visited = frame_count;
        tile.frame.used = true;
        tile
    }

    #[test]
    fn tile_with_no_used_children_is_a_leaf() {
        let mut tile = used_leaf(0, 1);
        let mut stats = Stats::default();

        mark_used_set_leaves(&mut tile, 1, &mut stats);

        assert!(tile.frame.is_leaf);
        assert_eq!(stats.used, 1);
    }

    #[test]
    fn tile_with_used_child_is_not_a_leaf_and_recurses() {
        let child = used_leaf(1, 1);
        let mut tile = used_leaf(0, 1);
        tile.children.push(child);
        let mut stats = Stats::default();

        mark_used_set_leaves(&mut tile, 1, &mut stats);

        assert!(!tile.frame.is_leaf);
        assert!(tile.children[0].frame.is_leaf);
        assert_eq!(stats.used, 2);
    }

    #[test]
    fn children_were_visible_reads_prior_frame_flag() {
        let mut child = used_leaf(1, 1);
        child.frame.was_set_visible = true;
        let mut tile = used_leaf(0, 1);
        tile.children.push(child);
        let mut stats = Stats::default();

        mark_used_set_leaves(&mut tile, 1, &mut stats);

        assert!(tile.frame.children_were_visible);
    }

    #[test]
    fn not_used_children_are_not_counted_or_recursed() {
        let unused_child = TileNode::leaf(false, 1);
        let mut tile = used_leaf(0, 1);
        tile.children.push(unused_child);
        let mut stats = Stats::default();

        mark_used_set_leaves(&mut tile, 1, &mut stats);

        assert!(tile.frame.is_leaf);
        assert_eq!(stats.used, 1);
    }
}
