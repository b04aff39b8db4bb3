//! Configuration for the traversal core.

/// Tunables that drive the frustum/SSE/hysteresis decisions in a frame.
///
/// Mirrors the teacher's prefetch-configuration pattern: a small struct with
/// a `Default` impl carrying conservative values, passed by reference rather
/// than threaded through every function as individual arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalConfig {
    /// Absolute screen-space-error goal. Once a tile's error is at or below
    /// this value, its subtree no longer needs refining.
    pub error_target: f64,
    /// Multiplier on `error_target` used to decide when a loaded parent is
    /// "good enough" to stand in for children that haven't loaded yet.
    pub error_threshold: f64,
    /// Maximum tree depth to descend into. `0` disables the cutoff.
    pub max_depth: i32,
    /// When any child of a tile becomes used, also mark its siblings used
    /// (through content-empty tiles) to smooth camera motion.
    pub load_siblings: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            error_target: 16.0,
            error_threshold: 3.0,
            max_depth: 0,
            load_siblings: true,
        }
    }
}

impl TraversalConfig {
    /// The "good enough to display the parent instead of children" bound:
    /// `error_target * error_threshold`.
    pub fn error_requirement(&self) -> f64 {
        self.error_target * self.error_threshold
    }
}
