use super::period::Period;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StreakKind {
    Watch,
    Miss,
}

impl StreakKind {
    pub fn from_watched(watched: bool) -> Self {
        if watched {
            StreakKind::Watch
        } else {
            StreakKind::Miss
        }
    }

    /// Plural label used by reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakKind::Watch => "watches",
            StreakKind::Miss => "misses",
        }
    }
}

/// Derived attendance figures for one member.
///
/// Always recomputed from the full history; see
/// [`crate::core::analytics::compute_status`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceStatus {
    pub tenure: usize,
    pub total_watched: usize,
    pub total_missed: usize,
    pub current_streak: usize,
    pub current_streak_kind: Option<StreakKind>,
    pub longest_watch_streak: usize,
    pub longest_miss_streak: usize,
    pub active: bool,
    pub just_dropped: bool,
    pub in_danger: bool,
    pub last_watched: Option<Period>,
    pub month_statuses: Vec<String>,
}

impl AttendanceStatus {
    /// Status of a member with no recorded period.
    pub fn empty() -> Self {
        Self {
            tenure: 0,
            total_watched: 0,
            total_missed: 0,
            current_streak: 0,
            current_streak_kind: None,
            longest_watch_streak: 0,
            longest_miss_streak: 0,
            active: false,
            just_dropped: false,
            in_danger: false,
            last_watched: None,
            month_statuses: Vec::new(),
        }
    }

    /// `total_watched / tenure`, undefined for a zero tenure.
    pub fn watch_percentage(&self) -> Option<f64> {
        if self.tenure == 0 {
            None
        } else {
            Some(self.total_watched as f64 / self.tenure as f64)
        }
    }

    /// Length of the running miss streak, 0 when the member watched last.
    pub fn current_miss_streak(&self) -> usize {
        match self.current_streak_kind {
            Some(StreakKind::Miss) => self.current_streak,
            _ => 0,
        }
    }

    /// Periods since the last watch (the running miss streak).
    pub fn months_since_watch(&self) -> usize {
        self.current_miss_streak()
    }

    pub fn last_watched_label(&self) -> String {
        self.last_watched
            .map(|p| p.label())
            .unwrap_or_else(|| "Never".to_string())
    }
}
