use crate::core::analytics::compute_status;
use crate::core::normalizer::HistoryBuilder;
use crate::core::rules::Rules;
use crate::errors::AppError;
use crate::models::{AttendanceStatus, Member, MonthRecord, RawPeriod};
use std::collections::HashMap;

/// Which stored periods a scan looks at.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Only the most recent N periods (after the current-month cut).
    pub months: Option<usize>,
    /// Include the newest stored period, normally the month in progress.
    pub include_current: bool,
}

#[derive(Debug, Clone)]
pub struct MemberStats {
    pub member: Member,
    pub history: Vec<MonthRecord>,
    pub status: AttendanceStatus,
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub members: Vec<MemberStats>,
    pub scanned: usize,
    pub skipped: Vec<AppError>,
}

impl ScanResult {
    pub fn status_table(&self) -> HashMap<Member, AttendanceStatus> {
        self.members
            .iter()
            .map(|m| (m.member.clone(), m.status.clone()))
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&MemberStats> {
        self.members.iter().find(|m| m.member.is_same(name))
    }
}

pub struct HistoryScan;

impl HistoryScan {
    /// Build every member's status from stored periods.
    ///
    /// Malformed periods end up in `skipped`; the rest of the history is
    /// still used. `just_dropped` compares against the status each member had
    /// before their newest record.
    pub fn run(periods: &[RawPeriod], options: &ScanOptions, rules: &Rules) -> ScanResult {
        let mut ordered: Vec<&RawPeriod> = periods.iter().collect();
        ordered.sort_by_key(|p| p.period);

        if !options.include_current {
            ordered.pop();
        }
        if let Some(n) = options.months {
            let skip = ordered.len().saturating_sub(n);
            ordered.drain(..skip);
        }

        let mut builder = HistoryBuilder::new(rules);
        let mut result = ScanResult::default();

        for raw in ordered {
            match builder.ingest(raw) {
                Ok(()) => result.scanned += 1,
                Err(e @ AppError::MalformedPeriod { .. }) => result.skipped.push(e),
                Err(e) => result.skipped.push(AppError::MalformedPeriod {
                    period: raw.period.label(),
                    reason: e.to_string(),
                }),
            }
        }

        result.members = builder
            .finish()
            .into_iter()
            .map(|(member, history)| {
                let previous = history
                    .split_last()
                    .map(|(_, before)| compute_status(before, None, rules));
                let status = compute_status(&history, previous.as_ref(), rules);
                MemberStats {
                    member,
                    history,
                    status,
                }
            })
            .collect();

        result
    }
}
