//! The public entry point: runs the four passes in order once per frame.

use log::{trace, warn};

use crate::cache::LruCache;
use crate::error::{TraversalError, TraversalResult};
use crate::node::TileNode;
use crate::passes::frustum::determine_frustum_set;
use crate::passes::leaf_mark::mark_used_set_leaves;
use crate::passes::skip::skip_traversal;
use crate::passes::toggle::toggle_tiles;
use crate::renderer::Renderer;

/// Drives one tree through FrustumPass, LeafMarkPass, SkipPass, and
/// TogglePass each frame. Owns no tree state itself; the tree, renderer, and
/// cache are all borrowed for the duration of a single `run_frame` call.
#[derive(Debug, Default)]
pub struct Traversal {
    last_frame_count: Option<u64>,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame of traversal against `root`, calling into `renderer`
    /// and `cache` as needed. Resets `renderer.stats_mut()` before
    /// FrustumPass runs. Returns [`TraversalError::NonMonotonicFrame`] if
    /// `renderer.frame_count()` has gone backwards since the previous call.
    pub fn run_frame(
        &mut self,
        root: &mut TileNode,
        renderer: &mut impl Renderer,
        cache: &mut impl LruCache,
    ) -> TraversalResult<()> {
        let frame_count = renderer.frame_count();
        if let Some(previous) = self.last_frame_count {
            if frame_count < previous {
                warn!(
                    "rejecting non-monotonic frame: previous={} requested={}",
                    previous, frame_count
                );
                return Err(TraversalError::NonMonotonicFrame {
                    previous,
                    requested: frame_count,
                });
            }
        }
        self.last_frame_count = Some(frame_count);

        renderer.stats_mut().reset();

        trace!("frame {}: FrustumPass", frame_count);
        determine_frustum_set(root, renderer, cache);

        trace!("frame {}: LeafMarkPass", frame_count);
        if crate::passes::frame_state::is_used_this_frame(root, frame_count) {
            let mut stats = *renderer.stats_mut();
            mark_used_set_leaves(root, frame_count, &mut stats);
            *renderer.stats_mut() = stats;
        }

        trace!("frame {}: SkipPass", frame_count);
        if crate::passes::frame_state::is_used_this_frame(root, frame_count) {
            skip_traversal(root, renderer, cache);
        }

        trace!("frame {}: TogglePass", frame_count);
        toggle_tiles(root, renderer, frame_count);

        Ok(())
    }
}
