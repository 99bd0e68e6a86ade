//! Status lines printed to stdout. Colors are dropped when `NO_COLOR` is set.

use std::fmt;
use std::sync::OnceLock;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

fn colored() -> bool {
    static COLORED: OnceLock<bool> = OnceLock::new();
    *COLORED.get_or_init(|| std::env::var_os("NO_COLOR").is_none())
}

fn line(color: &str, icon: &str, msg: impl fmt::Display) {
    if colored() {
        println!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    } else {
        println!("{} {}", icon, msg);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    line(FG_BLUE, ICON_INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    line(FG_GREEN, ICON_OK, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    line(FG_YELLOW, ICON_WARN, msg);
}

/// Section header, e.g. one per pay period in `report`.
pub fn header<T: fmt::Display>(msg: T) {
    if colored() {
        println!("{}{}=== {}{}\n", FG_BLUE, BOLD, msg, RESET);
    } else {
        println!("=== {}\n", msg);
    }
}
