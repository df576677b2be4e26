// src/export/model.rs

use crate::core::history::MemberStats;
use serde::Serialize;

/// Flat per-member row for CSV / JSON / XLSX.
#[derive(Serialize, Clone, Debug)]
pub struct StatsExport {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Tenure")]
    pub tenure: usize,
    #[serde(rename = "Active")]
    pub active: bool,
    #[serde(rename = "In Danger")]
    pub in_danger: bool,
    #[serde(rename = "Just Dropped")]
    pub just_dropped: bool,
    #[serde(rename = "Total Greens")]
    pub total_greens: usize,
    #[serde(rename = "Total Missed")]
    pub total_missed: usize,
    /// Empty when the member has no recorded period.
    #[serde(rename = "Watch %")]
    pub watch_pct: Option<f64>,
    #[serde(rename = "Current Streak")]
    pub current_streak: usize,
    #[serde(rename = "Current Streak Type")]
    pub current_streak_type: String,
    #[serde(rename = "Last Watched?")]
    pub last_watched: String,
    #[serde(rename = "Last Watched (Months Ago)")]
    pub months_since_watch: usize,
    #[serde(rename = "Longest Green Streak")]
    pub longest_green_streak: usize,
    #[serde(rename = "Longest Miss Streak")]
    pub longest_miss_streak: usize,
    #[serde(rename = "Month Statuses")]
    pub month_statuses: String,
}

impl From<&MemberStats> for StatsExport {
    fn from(m: &MemberStats) -> Self {
        let s = &m.status;
        Self {
            username: m.member.name.clone(),
            tenure: s.tenure,
            active: s.active,
            in_danger: s.in_danger,
            just_dropped: s.just_dropped,
            total_greens: s.total_watched,
            total_missed: s.total_missed,
            watch_pct: s.watch_percentage(),
            current_streak: s.current_streak,
            current_streak_type: s
                .current_streak_kind
                .map(|k| k.as_str().to_string())
                .unwrap_or_default(),
            last_watched: s.last_watched_label(),
            months_since_watch: s.months_since_watch(),
            longest_green_streak: s.longest_watch_streak,
            longest_miss_streak: s.longest_miss_streak,
            month_statuses: s.month_statuses.join(", "),
        }
    }
}

/// Header for XLSX, same order and titles as the serde names.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Username",
        "Tenure",
        "Active",
        "In Danger",
        "Just Dropped",
        "Total Greens",
        "Total Missed",
        "Watch %",
        "Current Streak",
        "Current Streak Type",
        "Last Watched?",
        "Last Watched (Months Ago)",
        "Longest Green Streak",
        "Longest Miss Streak",
        "Month Statuses",
    ]
}

/// One XLSX row. Numbers stay numbers so the sheet can sort them.
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    Flag(bool),
    Blank,
}

pub(crate) fn stats_to_row(e: &StatsExport) -> Vec<Cell> {
    vec![
        Cell::Text(e.username.clone()),
        Cell::Number(e.tenure as f64),
        Cell::Flag(e.active),
        Cell::Flag(e.in_danger),
        Cell::Flag(e.just_dropped),
        Cell::Number(e.total_greens as f64),
        Cell::Number(e.total_missed as f64),
        e.watch_pct.map_or(Cell::Blank, Cell::Number),
        Cell::Number(e.current_streak as f64),
        Cell::Text(e.current_streak_type.clone()),
        Cell::Text(e.last_watched.clone()),
        Cell::Number(e.months_since_watch as f64),
        Cell::Number(e.longest_green_streak as f64),
        Cell::Number(e.longest_miss_streak as f64),
        Cell::Text(e.month_statuses.clone()),
    ]
}
