use super::{member::Member, period::Period};
use serde::{Deserialize, Serialize};

/// One raw row of a period as the backing store delivers it: a member name
/// in queue order plus whether the row was highlighted (greened).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    pub member: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub highlighted: bool,
}

impl RawRow {
    pub fn new(member: &str, highlighted: bool) -> Self {
        Self {
            member: Some(member.to_string()),
            highlighted,
        }
    }

    /// Trimmed member name, `None` for blank cells.
    pub fn name(&self) -> Option<&str> {
        self.member
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// A whole period as delivered by the backing store, rows in queue order.
#[derive(Debug, Clone)]
pub struct RawPeriod {
    pub period: Period,
    pub rows: Vec<RawRow>,
}

impl RawPeriod {
    pub fn new(period: Period, rows: Vec<RawRow>) -> Self {
        Self { period, rows }
    }
}

/// Watch/miss state of one member in one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRecord {
    pub member: Member,
    pub period: Period,
    pub watched: bool,
}

impl MonthRecord {
    pub fn new(member: Member, period: Period, watched: bool) -> Self {
        Self {
            member,
            period,
            watched,
        }
    }

    /// `October 2026::green` / `October 2026::miss`
    pub fn state_label(&self) -> String {
        format!(
            "{}::{}",
            self.period.label(),
            if self.watched { "green" } else { "miss" }
        )
    }
}

/// Accepts the usual spreadsheet spellings for a highlight flag.
fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(parse_flag(raw.as_deref().unwrap_or("")))
}

pub fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "x" | "green" | "greened"
    )
}
