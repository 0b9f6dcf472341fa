// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the cvsift CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `CVSIFT_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then defaults to dark.
//!
//! Respects `NO_COLOR` for the purists and non-TTY detection for pipelines:
//! piped output is plain text with the same layout.
//!
//! # Theme detection order
//!
//! 1. `CVSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use cvsift::{fuzzy_label_keyword, DocumentEntry, MatchRecord, SearchOutcome};

// Box drawing constants - width between │ and │ (excluding border chars)
const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CVSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 and up (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE (OneDark / One Light, true color)
// ═══════════════════════════════════════════════════════════════════════════

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// What a piece of output is, rather than which color it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// Box lines, paths and other secondary text
    Border,
    /// Section labels, names and ranks
    Accent,
    Good,
    Fair,
    Poor,
    /// Fuzzy keyword hits
    Fuzzy,
}

impl Role {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Role::Border) => (92, 99, 112), // #5c6370
            (Theme::Dark, Role::Accent) => (86, 182, 194), // #56b6c2
            (Theme::Dark, Role::Good) => (152, 195, 121), // #98c379
            (Theme::Dark, Role::Fair) => (229, 192, 123), // #e5c07b
            (Theme::Dark, Role::Poor) => (224, 108, 117), // #e06c75
            (Theme::Dark, Role::Fuzzy) => (198, 120, 221), // #c678dd
            (Theme::Light, Role::Border) => (160, 161, 167), // #a0a1a7
            (Theme::Light, Role::Accent) => (1, 132, 188), // #0184bc
            (Theme::Light, Role::Good) => (80, 161, 79), // #50a14f
            (Theme::Light, Role::Fair) => (193, 132, 1), // #c18401
            (Theme::Light, Role::Poor) => (228, 86, 73), // #e45649
            (Theme::Light, Role::Fuzzy) => (166, 38, 164), // #a626a4
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Color `text` for its role, with optional modifiers
fn themed(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        let (r, g, b) = role.rgb(theme());
        format!("{}{}{}{}", modifiers.join(""), rgb(r, g, b), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
fn visible_len(s: &str) -> usize {
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
fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

fn border(text: &str) -> String {
    themed(Role::Border, &[], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    format!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"))
}

/// Section header: ┌─ LABEL ──────────┐
fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(Role::Accent, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    )
}

/// Section footer: └──────────────────┘
fn section_bot() -> String {
    border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded phase time (green=fast, yellow=medium, red=slow)
fn timing_ms(seconds: f64) -> String {
    let ms = seconds * 1000.0;
    let text = format!("{:.3} ms", ms);
    let role = if ms < 50.0 {
        Role::Good
    } else if ms < 500.0 {
        Role::Fair
    } else {
        Role::Poor
    };
    themed(role, &[], &text)
}

/// "3 keywords" badge, brighter the more keywords matched
fn match_badge(count: usize) -> String {
    let text = format!("{} keyword{}", count, if count == 1 { "" } else { "s" });
    let role = if count >= 3 {
        Role::Good
    } else if count == 2 {
        Role::Accent
    } else {
        Role::Fair
    };
    themed(role, &[BOLD], &text)
}

/// One keyword line: exact hits with their count, fuzzy hits flagged
fn keyword_line(label: &str, count: usize) -> String {
    if fuzzy_label_keyword(label).is_some() {
        format!("{} {}", themed(Role::Fuzzy, &[], "~"), themed(Role::Fuzzy, &[], label))
    } else {
        format!("{} {} × {}", themed(Role::Good, &[], "✓"), label, count)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

fn render_card(rank: usize, record: &MatchRecord) -> Vec<String> {
    let category = record
        .category
        .as_deref()
        .map(|c| format!(" {}", themed(Role::Border, &[], &format!("({})", c))))
        .unwrap_or_default();
    let header = format!(
        "{} {}{}",
        pad_right(&themed(Role::Accent, &[BOLD], &format!("#{}", rank)), 4),
        themed(Role::Accent, &[BOLD], &record.display_name),
        category
    );
    let mut lines = vec![row(&format!("{}  {}", header, match_badge(record.match_count)))];
    lines.push(row(&themed(Role::Border, &[], &format!("     {}", record.path.display()))));
    for (label, &count) in &record.matched_keywords {
        lines.push(row(&format!("     {}", keyword_line(label, count))));
    }
    lines
}

/// Everything `cvsift search` prints, one string per line.
pub fn render_outcome(outcome: &SearchOutcome) -> Vec<String> {
    let mut lines = vec![section_top("SUMMARY")];
    lines.push(row(&format!(
        "{} documents scanned with {}",
        outcome.total_scanned, outcome.algorithm
    )));
    lines.push(row(&format!("exact phase  {}", timing_ms(outcome.exact_phase_seconds))));
    lines.push(row(&format!("fuzzy phase  {}", timing_ms(outcome.fuzzy_phase_seconds))));
    lines.push(section_bot());

    lines.push(section_top("RESULTS"));
    if outcome.results.is_empty() {
        lines.push(row(&themed(Role::Border, &[], "no matching documents")));
    }
    for (i, record) in outcome.results.iter().enumerate() {
        lines.extend(render_card(i + 1, record));
    }
    lines.push(section_bot());

    if !outcome.failed_documents.is_empty() {
        lines.push(section_top("FAILED"));
        for failed in &outcome.failed_documents {
            lines.push(row(&format!(
                "{} {}",
                themed(Role::Poor, &[BOLD], &failed.entry.display_name),
                themed(Role::Border, &[], &failed.reason)
            )));
        }
        lines.push(section_bot());
    }

    lines
}

/// Everything `cvsift list` prints.
pub fn render_listing(entries: &[DocumentEntry]) -> Vec<String> {
    let mut lines = vec![section_top(&format!("{} DOCUMENTS", entries.len()))];
    for entry in entries {
        let category = entry.category.as_deref().unwrap_or("-");
        lines.push(row(&format!(
            "{} {} {}",
            pad_right(&themed(Role::Border, &[], &entry.id.to_string()), 5),
            pad_right(&themed(Role::Accent, &[], category), 14),
            entry.display_name
        )));
    }
    lines.push(section_bot());
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
