use serde::{Deserialize, Serialize};

/// Where the outgoing chooser is re-inserted during a rotation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChooserPlacement {
    /// The nominal last slot of the unfiltered queue, or further back when a
    /// misser already took it.
    #[default]
    Last,
    /// The first free slot behind every placed member, reusing tail slots
    /// freed by inactive members.
    FirstOpen,
}

/// Tunable thresholds shared by the normalizer, analytics and rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Rows at positions below this are credited as watched regardless of
    /// their highlight.
    pub auto_credit_positions: usize,
    /// Consecutive misses after which a member becomes inactive.
    pub inactive_after_misses: usize,
    pub danger_window_start: usize,
    pub danger_window_end: usize,
    pub chooser_placement: ChooserPlacement,
}

pub const DEFAULT_AUTO_CREDIT_POSITIONS: usize = 2;
pub const DEFAULT_INACTIVE_AFTER_MISSES: usize = 12;
pub const DEFAULT_DANGER_WINDOW_START: usize = 10;
pub const DEFAULT_DANGER_WINDOW_END: usize = 12;

impl Default for Rules {
    fn default() -> Self {
        Self {
            auto_credit_positions: DEFAULT_AUTO_CREDIT_POSITIONS,
            inactive_after_misses: DEFAULT_INACTIVE_AFTER_MISSES,
            danger_window_start: DEFAULT_DANGER_WINDOW_START,
            danger_window_end: DEFAULT_DANGER_WINDOW_END,
            chooser_placement: ChooserPlacement::Last,
        }
    }
}

impl Rules {
    pub fn with_placement(mut self, placement: ChooserPlacement) -> Self {
        self.chooser_placement = placement;
        self
    }

    pub fn in_danger_window(&self, miss_streak: usize) -> bool {
        (self.danger_window_start..=self.danger_window_end).contains(&miss_streak)
    }
}
