// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the docrank CLI.
//!
//! Boxed result tables that respect your color scheme. OneDark for dark
//! terminals, One Light for light ones. Detection tries `DOCRANK_THEME` first
//! (for explicit control), then `COLORFGBG` (set by some terminals), then macOS
//! system appearance, then defaults to dark. Respects `NO_COLOR` and non-TTY
//! stdout, so piping a table into a file gives plain text.
//!
//! # Theme detection order
//!
//! 1. `DOCRANK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::fmt::Write as _;
use std::sync::OnceLock;

use docrank::export::skills_cell;
use docrank::MatchResult;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

const RANK_WIDTH: usize = 6;
const SCORE_WIDTH: usize = 9;
const NAME_WIDTH: usize = 30;

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

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("DOCRANK_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
    {
        return theme;
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
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

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

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

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
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

fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
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

/// Cut plain text to `max_len` characters, ending in `...` when shortened.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
pub fn row(content: &str) -> String {
    let (b, r) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("{}│{}{}{}{}│{}", b, r, content, " ".repeat(pad), b, r)
}

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let (b, r) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("{}┌{}{}{}{}┐{}", b, r, label_part, b, "─".repeat(remaining), r)
}

/// Section divider: ├──────────────────┤
pub fn section_mid() -> String {
    let (b, r) = border(GRAY);
    format!("{}├{}┤{}", b, "─".repeat(BOX_WIDTH), r)
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    let (b, r) = border(GRAY);
    format!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), r)
}

/// Double-line title block: ╔═══╗ ║ TITLE ║ ╚═══╝
pub fn title_block(text: &str) -> String {
    let (b, r) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let mut out = String::new();
    let _ = writeln!(out, "{}╔{}╗{}", b, "═".repeat(BOX_WIDTH), r);
    let _ = writeln!(
        out,
        "{}║{}{}{}{}{}║{}",
        b,
        r,
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        b,
        r
    );
    let _ = write!(out, "{}╚{}╝{}", b, "═".repeat(BOX_WIDTH), r);
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score on the 0-100 scale.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.2}%", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 60.0 {
        BRIGHT_GREEN()
    } else if score >= 30.0 {
        GREEN()
    } else if score >= 10.0 {
        YELLOW()
    } else if score > 0.0 {
        GRAY()
    } else {
        RED()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Rank label; the best match gets a marker.
pub fn rank_label(rank: usize) -> String {
    if rank == 1 {
        themed(BRIGHT_GREEN, &[BOLD], "★ 1")
    } else {
        rank.to_string()
    }
}

/// One table line for a result.
pub fn result_line(result: &MatchResult) -> String {
    let name = truncate(&result.document_identifier, NAME_WIDTH);
    let name = if result.rank == 1 {
        themed(BRIGHT_GREEN, &[BOLD], &name)
    } else {
        name
    };
    let skills_width = BOX_WIDTH - 1 - RANK_WIDTH - 1 - NAME_WIDTH - 1 - SCORE_WIDTH - 2;
    let skills = truncate(&skills_cell(&result.matched_skills), skills_width);
    let skills = if result.matched_skills.is_empty() {
        themed(GRAY, &[], &skills)
    } else {
        themed(CYAN, &[], &skills)
    };
    format!(
        " {} {} {}  {}",
        pad_left(&rank_label(result.rank), RANK_WIDTH),
        pad_right(&name, NAME_WIDTH),
        pad_left(&score_value(result.score), SCORE_WIDTH),
        skills
    )
}

/// Render the whole results table.
pub fn render_results(results: &[MatchResult], total_inputs: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title_block("DOCUMENT RANKING"));
    let _ = writeln!(
        out,
        "{}",
        section_top(&format!("{} of {} documents ranked", results.len(), total_inputs))
    );
    let header = format!(
        " {} {} {}  {}",
        pad_left("Rank", RANK_WIDTH),
        pad_right("Document", NAME_WIDTH),
        pad_left("Score", SCORE_WIDTH),
        "Skills"
    );
    let _ = writeln!(out, "{}", row(&themed(BLUE, &[BOLD], &header)));
    let _ = writeln!(out, "{}", section_mid());
    for result in results {
        let _ = writeln!(out, "{}", row(&result_line(result)));
    }
    let _ = write!(out, "{}", section_bot());
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
