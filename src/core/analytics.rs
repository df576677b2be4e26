use crate::core::rules::Rules;
use crate::models::{AttendanceStatus, MonthRecord, StreakKind};

/// Running streak state while walking a history.
#[derive(Debug, Default)]
struct StreakAccumulator {
    last: Option<StreakKind>,
    current_watch: usize,
    current_miss: usize,
    longest_watch: usize,
    longest_miss: usize,
}

impl StreakAccumulator {
    fn push(&mut self, kind: StreakKind) {
        let extends = self.last.is_none() || self.last == Some(kind);
        // Every run counts towards its longest maximum, a fresh run of one
        // included: a lone miss after watches gives a longest miss of 1.

        match kind {
            StreakKind::Watch => {
                if extends {
                    self.current_watch += 1;
                } else {
                    self.current_miss = 0;
                    self.current_watch = 1;
                }
                self.longest_watch = self.longest_watch.max(self.current_watch);
            }
            StreakKind::Miss => {
                if extends {
                    self.current_miss += 1;
                } else {
                    self.current_watch = 0;
                    self.current_miss = 1;
                }
                self.longest_miss = self.longest_miss.max(self.current_miss);
            }
        }

        self.last = Some(kind);
    }

    fn current(&self) -> usize {
        match self.last {
            Some(StreakKind::Watch) => self.current_watch,
            Some(StreakKind::Miss) => self.current_miss,
            None => 0,
        }
    }
}

/// Compute a member's attendance status from their full history.
///
/// `history` must be in chronological order. `previous` is the status the
/// caller computed on an earlier run, used only for `just_dropped`.
pub fn compute_status(
    history: &[MonthRecord],
    previous: Option<&AttendanceStatus>,
    rules: &Rules,
) -> AttendanceStatus {
    let mut streaks = StreakAccumulator::default();
    let mut status = AttendanceStatus::empty();

    for record in history {
        streaks.push(StreakKind::from_watched(record.watched));

        status.tenure += 1;
        if record.watched {
            status.total_watched += 1;
            status.last_watched = Some(record.period);
        } else {
            status.total_missed += 1;
        }
        status.month_statuses.push(record.state_label());
    }

    status.current_streak = streaks.current();
    status.current_streak_kind = streaks.last;
    status.longest_watch_streak = streaks.longest_watch;
    status.longest_miss_streak = streaks.longest_miss;

    status.active =
        status.total_watched > 0 && streaks.current_miss < rules.inactive_after_misses;
    status.in_danger = status.active && rules.in_danger_window(streaks.current_miss);
    status.just_dropped = previous.is_some_and(|p| p.active) && !status.active;

    status
}
