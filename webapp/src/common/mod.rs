pub mod style;

use chrono::{Datelike, Local};

// year for the footer copyright line, from the visitor's clock
pub fn copyright_year() -> i32 {
    Local::now().year()
}

pub fn copyright_line(owner: &str) -> String {
    format!("© {} {owner}. All rights reserved.", copyright_year())
}
