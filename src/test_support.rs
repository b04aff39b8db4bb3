//! Test doubles shared across integration-style scenario tests.

use std::collections::HashMap;

use crate::config::TraversalConfig;
use crate::node::{TileId, TileNode};
use crate::renderer::Renderer;
use crate::stats::Stats;

/// A [`Renderer`] double that records every callback invocation so tests can
/// assert on the exact sequence of renderer calls (scenario idempotence,
/// hysteresis, cache-saturation suppression).
pub struct RecordingRenderer {
    pub frame_count: u64,
    pub config: TraversalConfig,
    pub stats: Stats,
    pub in_view: HashMap<TileId, bool>,
    pub errors: HashMap<TileId, f64>,
    pub visible_calls: Vec<(TileId, bool)>,
    pub active_calls: Vec<(TileId, bool)>,
    pub request_calls: Vec<TileId>,
}

impl RecordingRenderer {
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            frame_count: 1,
            config,
            stats: Stats::default(),
            in_view: HashMap::new(),
            errors: HashMap::new(),
            visible_calls: Vec::new(),
            active_calls: Vec::new(),
            request_calls: Vec::new(),
        }
    }

    pub fn set_in_view(&mut self, tile: &TileNode, value: bool) {
        self.in_view.insert(tile.id, value);
    }

    pub fn set_error(&mut self, tile: &TileNode, value: f64) {
        self.errors.insert(tile.id, value);
    }

    pub fn clear_callback_log(&mut self) {
        self.visible_calls.clear();
        self.active_calls.clear();
        self.request_calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn config(&self) -> &TraversalConfig {
        &self.config
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    fn tile_in_view(&mut self, tile: &TileNode) -> bool {
        // Default to true: most scenarios only care about a handful of
        // tiles and don't want to enumerate every node in the tree.
        self.in_view.get(&tile.id).copied().unwrap_or(true)
    }

    fn calculate_error(&mut self, tile: &TileNode) -> f64 {
        self.errors.get(&tile.id).copied().unwrap_or(0.0)
    }

    fn request_tile_contents(&mut self, tile: &TileNode) {
        self.request_calls.push(tile.id);
    }

    fn set_tile_visible(&mut self, tile: &TileNode, value: bool) {
        self.visible_calls.push((tile.id, value));
    }

    fn set_tile_active(&mut self, tile: &TileNode, value: bool) {
        self.active_calls.push((tile.id, value));
    }
}
