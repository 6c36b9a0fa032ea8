// src/utils/console.rs

//! Console output for rendered pages.
//!
//! Diagnostics go through the `log` facade; this module prints the page
//! content itself to stdout, with the same section framing on every page.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress decorative output (headers, separators, summaries).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn decorated() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

/// Print a page header.
pub fn header(title: &str) {
    if decorated() {
        let border = "═".repeat(60);
        println!("{border}");
        println!("  {title}");
        println!("{border}");
    }
}

/// Print a section heading.
pub fn section(title: &str) {
    if decorated() {
        println!();
    }
    println!("{title}");
    if decorated() {
        println!("{}", "─".repeat(title.chars().count().clamp(3, 60)));
    }
}

/// Print a plain line.
pub fn line(message: &str) {
    println!("{message}");
}

/// Print an indented item.
pub fn sub_item(message: &str) {
    println!("    {message}");
}

/// Print a separator line.
pub fn separator() {
    if decorated() {
        println!("{}", "─".repeat(60));
    }
}

/// Print a key/value summary block.
pub fn summary(title: &str, items: &[(&str, String)]) {
    if decorated() {
        println!();
        println!("[{}] [SUMMARY] {}", Local::now().format("%H:%M:%S"), title);
        for (key, value) in items {
            println!("    {key}: {value}");
        }
    }
}
