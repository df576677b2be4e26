//! Turns a period's raw rows into per-member watch/miss records and keeps
//! every tracked member's history contiguous across periods.

use crate::core::rules::Rules;
use crate::errors::{AppError, AppResult};
use crate::models::{Member, MonthRecord, Period, RawPeriod};
use std::collections::HashMap;

/// Normalize one period.
///
/// Rows come in queue order. Positions below `rules.auto_credit_positions`
/// are credited as watched whatever their highlight says; the backing sheet
/// paints those rows itself, so their colour carries no information.
pub fn normalize(raw: &RawPeriod, rules: &Rules) -> AppResult<Vec<MonthRecord>> {
    check_shape(raw)?;

    let mut records: Vec<MonthRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (position, row) in raw.rows.iter().enumerate() {
        let Some(name) = row.name() else {
            continue;
        };

        let watched = row.highlighted || position < rules.auto_credit_positions;
        let member = Member::new(name);

        match index.get(&member.key()) {
            // duplicate row for the same member and period: merge
            Some(&i) => records[i].watched |= watched,
            None => {
                index.insert(member.key(), records.len());
                records.push(MonthRecord::new(member, raw.period, watched));
            }
        }
    }

    Ok(records)
}

/// A period is usable when it has at least two rows and the row right after
/// the chooser names a member.
fn check_shape(raw: &RawPeriod) -> AppResult<()> {
    if raw.rows.len() < 2 {
        return Err(AppError::MalformedPeriod {
            period: raw.period.label(),
            reason: format!("expected at least 2 rows, found {}", raw.rows.len()),
        });
    }

    if raw.rows[1].name().is_none() {
        return Err(AppError::MalformedPeriod {
            period: raw.period.label(),
            reason: "row 2 has no member name".into(),
        });
    }

    Ok(())
}

/// Accumulates member histories over a chronological scan of periods.
pub struct HistoryBuilder<'a> {
    rules: &'a Rules,
    order: Vec<Member>,
    histories: HashMap<Member, Vec<MonthRecord>>,
    last_period: Option<Period>,
}

impl<'a> HistoryBuilder<'a> {
    pub fn new(rules: &'a Rules) -> Self {
        Self {
            rules,
            order: Vec::new(),
            histories: HashMap::new(),
            last_period: None,
        }
    }

    /// Add the next period. Periods must arrive oldest first.
    ///
    /// A malformed period leaves the builder untouched and returns the
    /// error so the caller can report it and move on.
    pub fn ingest(&mut self, raw: &RawPeriod) -> AppResult<()> {
        if let Some(last) = self.last_period
            && raw.period <= last
        {
            return Err(AppError::MalformedPeriod {
                period: raw.period.label(),
                reason: format!("out of order (after {})", last.label()),
            });
        }

        let records = normalize(raw, self.rules)?;

        for record in records {
            match self.histories.get_mut(&record.member) {
                Some(history) => history.push(record),
                None => {
                    self.order.push(record.member.clone());
                    self.histories.insert(record.member.clone(), vec![record]);
                }
            }
        }

        // tracked members without a row this period missed it
        for member in &self.order {
            if let Some(history) = self.histories.get_mut(member)
                && history.last().map(|r| r.period) != Some(raw.period)
            {
                history.push(MonthRecord::new(member.clone(), raw.period, false));
            }
        }

        self.last_period = Some(raw.period);
        Ok(())
    }

    /// Histories in first-seen order.
    pub fn finish(mut self) -> Vec<(Member, Vec<MonthRecord>)> {
        self.order
            .into_iter()
            .map(|m| {
                let history = self.histories.remove(&m).unwrap_or_default();
                (m, history)
            })
            .collect()
    }
}
