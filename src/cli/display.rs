// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fuzzmark CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Matched fragments
//! are drawn in bold theme yellow when the output is a TTY, and bracketed
//! when it is not, so piped output still shows where the matches were.
//! Respects `NO_COLOR`.
//!
//! # Theme detection order
//!
//! 1. `FUZZMARK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use fuzzmark::{HighlightTags, Pattern, SearchResult};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Background hint from `COLORFGBG` ("fg;bg", where bg 7 or above is light,
/// except 8 which is dark gray).
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        None
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("FUZZMARK_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}


// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Border color and reset code, both empty when colors are off.
fn border_style() -> (String, &'static str) {
    if use_colors() {
        (GRAY(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (border, reset) = border_style();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (border, reset) = border_style();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (border, reset) = border_style();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (border, reset) = border_style();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Markers for highlighted fragments in terminal output.
pub fn highlight_tags() -> HighlightTags {
    if use_colors() {
        HighlightTags::new(format!("{}{}", BOLD, BRIGHT_YELLOW()), RESET)
    } else {
        HighlightTags::new("[", "]")
    }
}

/// Color-coded longest chain (longer chains are better matches)
pub fn chain_badge(longest_chain: usize) -> String {
    let text = format!("{:>3}", longest_chain);
    if !use_colors() {
        return text;
    }
    let color = if longest_chain >= 4 {
        BRIGHT_GREEN()
    } else if longest_chain >= 2 {
        GREEN()
    } else if longest_chain == 1 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Match percentage of a result, 0..=100
pub fn percentage_colored(fraction: f64) -> String {
    let text = format!("{:>5.1}%", fraction * 100.0);
    if fraction == 0.0 {
        themed(GRAY, &[], &text)
    } else if fraction >= 0.5 {
        themed(GREEN, &[BOLD], &text)
    } else {
        themed(BLUE, &[], &text)
    }
}

/// Cut a styled string down to `max` visible chars, keeping escape codes
/// intact and closing any open style.
pub fn truncate_visible(s: &str, max: usize) -> String {
    if visible_len(s) <= max {
        return s.to_string();
    }

    let keep = max.saturating_sub(1);
    let mut out = String::new();
    let mut in_escape = false;
    let mut seen = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
            out.push(c);
        } else if in_escape {
            out.push(c);
            if c == 'm' {
                in_escape = false;
            }
        } else if seen < keep {
            out.push(c);
            seen += 1;
        } else {
            break;
        }
    }
    out.push('…');
    if s.contains('\x1b') {
        out.push_str(RESET);
    }
    out
}

/// One result line: rank, longest chain, match percentage, highlighted text.
pub fn result_line(rank: usize, result: &SearchResult) -> String {
    let rank = themed(GRAY, &[], &format!("{:>4}.", rank));
    let prefix = format!(
        " {} {} {}  ",
        rank,
        chain_badge(result.longest_chain),
        percentage_colored(result.match_percentage)
    );
    let room = BOX_WIDTH.saturating_sub(visible_len(&prefix) + 1);
    format!("{}{}", prefix, truncate_visible(&result.highlight_text, room))
}

/// Print ranked results in a box.
pub fn print_results(needle: &str, strategy: &str, total: usize, results: &[SearchResult]) {
    section_top(&format!("{} \"{}\"", strategy, needle));
    row(&format!(
        " {} of {} haystacks",
        themed(BRIGHT_GREEN, &[BOLD], &results.len().to_string()),
        total
    ));
    if results.is_empty() {
        section_bot();
        return;
    }
    section_mid("RESULTS");
    for (i, result) in results.iter().enumerate() {
        row(&result_line(i + 1, result));
    }
    section_bot();
}

/// Print the candidate substrings and fallback alphabet of a needle.
pub fn print_pattern(needle: &str, pattern: &Pattern) {
    section_top(&format!("PATTERN \"{}\"", needle));
    let candidates = pattern.candidate_strings();
    if candidates.is_empty() {
        row(&themed(GRAY, &[DIM], " no candidates (needle shorter than 2 chars)"));
    }
    for (i, candidate) in candidates.iter().enumerate() {
        let label = themed(GRAY, &[], &format!("{:>4}.", i + 1));
        let len = pad_left(&candidate.chars().count().to_string(), 3);
        row(&format!(" {} {} {}", label, len, themed(YELLOW, &[], candidate)));
    }
    section_mid("ALPHABET");
    let alphabet: String = pattern.alphabet().iter().collect();
    row(&format!(" {}", themed(YELLOW, &[], &alphabet)));
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
