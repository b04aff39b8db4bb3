//! Tile tree nodes and per-frame state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier assigned to a [`TileNode`] at construction.
///
/// The core never interprets this value; it exists so that collaborators
/// (the cache, the renderer) have something stable to key on that outlives
/// a `&TileNode` borrow, the way the teacher's `TileCoord` keys its caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

static NEXT_TILE_ID: AtomicU64 = AtomicU64::new(0);

fn next_tile_id() -> TileId {
    TileId(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
}

/// The host-observed load state of a tile's content.
///
/// The core reads only whether this equals [`LoadingState::Loaded`]; every
/// other variant is treated uniformly as "not yet loaded."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

impl LoadingState {
    pub fn is_loaded(self) -> bool {
        matches!(self, LoadingState::Loaded)
    }
}

/// Transient per-frame fields, reset lazily on first touch each frame, plus
/// the cross-frame fields that [`crate::passes::toggle::toggle_tiles`]
/// carries forward. Grouped into one block per the design note that frame
/// state should live apart from persistent structure (see SPEC_FULL.md §9).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Frame counter value at which the transient fields below were last
    /// reset. Fields are meaningful only when this equals the current frame.
    pub last_frame_visited: u64,
    pub used: bool,
    pub in_frustum: bool,
    pub is_leaf: bool,
    pub visible: bool,
    pub active: bool,
    pub error: f64,
    pub children_were_visible: bool,

    // Cross-frame fields: written every frame by TogglePass, read by the
    // next frame's LeafMarkPass/TogglePass. Never cleared by the lazy reset.
    pub was_set_visible: bool,
    pub was_set_active: bool,
    pub used_last_frame: bool,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            last_frame_visited: 0,
            used: false,
            in_frustum: false,
            is_leaf: false,
            visible: false,
            active: false,
            error: 0.0,
            children_were_visible: false,
            was_set_visible: false,
            was_set_active: false,
            used_last_frame: false,
        }
    }
}

/// A node in the spatial tile hierarchy.
///
/// Persistent fields (`id`, `content_empty`, `depth`, `children`) are set at
/// construction and never touched by traversal. `loading_state` is mutated
/// by the host between frames as content finishes loading off-thread.
/// `frame` holds the transient/cross-frame block described above.
#[derive(Debug, Clone)]
pub struct TileNode {
    pub id: TileId,
    /// True if this tile has no renderable payload and exists only to
    /// refine its children.
    pub content_empty: bool,
    /// Nonnegative; the root has depth 0.
    pub depth: u32,
    pub loading_state: LoadingState,
    pub children: Vec<TileNode>,
    pub frame: FrameState,
}

impl TileNode {
    /// Create a leaf tile (no children) at the given depth.
    pub fn leaf(content_empty: bool, depth: u32) -> Self {
        Self {
            id: next_tile_id(),
            content_empty,
            depth,
            loading_state: LoadingState::default(),
            children: Vec::new(),
            frame: FrameState::default(),
        }
    }

    /// Create an interior tile with the given children. Each child's depth
    /// is expected to already be `self.depth + 1`; this is a builder
    /// convenience, not something the traversal core verifies.
    pub fn with_children(content_empty: bool, depth: u32, children: Vec<TileNode>) -> Self {
        Self {
            id: next_tile_id(),
            content_empty,
            depth,
            loading_state: LoadingState::default(),
            children,
            frame: FrameState::default(),
        }
    }

    pub fn set_loading_state(&mut self, state: LoadingState) {
        self.loading_state = state;
    }
}
