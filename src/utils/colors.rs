/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Greened → green, missed → grey.
pub fn color_for_watch(watched: bool) -> &'static str {
    if watched { GREEN } else { GREY }
}

/// Wraps `value` in GREY when it carries no information ("", "--", "Never").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "Never" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
