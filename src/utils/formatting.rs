//! Formatting utilities used for CLI and export outputs.

use crate::models::AttendanceStatus;
use crate::utils::colors::{GREEN, GREY, MAGENTA, RED, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Ratio rendered as a percentage with one decimal, "--" when undefined.
pub fn pct(ratio: Option<f64>) -> String {
    match ratio {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "--".to_string(),
    }
}

/// Short label and ANSI color for a member's standing.
pub fn describe_status(status: &AttendanceStatus) -> (String, &'static str) {
    if status.just_dropped {
        ("Dropped".into(), MAGENTA)
    } else if status.in_danger {
        ("In danger".into(), YELLOW)
    } else if status.active {
        ("Active".into(), GREEN)
    } else if status.tenure == 0 {
        ("New".into(), GREY)
    } else {
        ("Inactive".into(), RED)
    }
}

/// "3 watches", "1 miss", "--".
pub fn describe_streak(status: &AttendanceStatus) -> String {
    match status.current_streak_kind {
        Some(kind) => {
            let word = kind.as_str();
            if status.current_streak == 1 {
                format!("1 {}", word.trim_end_matches("es"))
            } else {
                format!("{} {}", status.current_streak, word)
            }
        }
        None => "--".to_string(),
    }
}
