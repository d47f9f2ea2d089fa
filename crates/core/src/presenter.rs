//! Result Presenter
//!
//! Pure mapping from an `AnalysisResult` to the data a front end needs to
//! draw the risk card. Every lookup here is total: an unexpected level or an
//! out-of-range score still produces a drawable view.

use serde::Serialize;

use crate::contract::{AnalysisResult, Highlight, RiskLevel, MAX_SCORE, MIN_SCORE};

/// Shown in place of the flag list when the service reported no flags
pub const EMPTY_FLAGS_MESSAGE: &str = "No suspicious patterns detected.";

/// Color family of the risk badge and progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColorKey {
    Green,
    Yellow,
    Red,
    /// Default style for levels the service does not document
    Neutral,
}

/// Concrete colors for a badge, as CSS hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgePalette {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl BadgeColorKey {
    pub fn for_level(level: &RiskLevel) -> Self {
        match level {
            RiskLevel::Low => BadgeColorKey::Green,
            RiskLevel::Medium => BadgeColorKey::Yellow,
            RiskLevel::High => BadgeColorKey::Red,
            RiskLevel::Unrecognized(_) => BadgeColorKey::Neutral,
        }
    }

    pub fn palette(&self) -> BadgePalette {
        match self {
            BadgeColorKey::Green => BadgePalette {
                background: "#c6f6d5",
                text: "#276749",
                border: "#9ae6b4",
            },
            BadgeColorKey::Yellow => BadgePalette {
                background: "#fefcbf",
                text: "#744210",
                border: "#f6e05e",
            },
            BadgeColorKey::Red => BadgePalette {
                background: "#fed7d7",
                text: "#822727",
                border: "#fc8181",
            },
            BadgeColorKey::Neutral => BadgePalette {
                background: "#e2e8f0",
                text: "#2d3748",
                border: "#cbd5e0",
            },
        }
    }
}

/// Everything needed to render one analysis result.
///
/// `flag_items` and `empty_flags_message` are mutually exclusive: exactly one
/// of them carries content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub badge_label: String,
    pub badge_color_key: BadgeColorKey,
    /// Score as reported, for the numeric label
    pub score: i64,
    /// Fill of the progress bar, always within 0..=100
    pub progress_width_percent: u8,
    pub flag_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_flags_message: Option<String>,
}

/// Derive the display data for a result.
pub fn present(result: &AnalysisResult) -> ResultView {
    let (flag_items, empty_flags_message) = if result.flags.is_empty() {
        (Vec::new(), Some(EMPTY_FLAGS_MESSAGE.to_string()))
    } else {
        (result.flags.clone(), None)
    };

    ResultView {
        badge_label: format!("{} Risk", result.level),
        badge_color_key: BadgeColorKey::for_level(&result.level),
        score: result.score,
        progress_width_percent: clamp_score(result.score),
        flag_items,
        empty_flags_message,
    }
}

/// Clamp a score to the drawable `[0, 100]` range.
pub fn clamp_score(score: i64) -> u8 {
    // Bounded by MAX_SCORE, so the cast cannot truncate.
    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// A run of the original message, highlighted or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub highlighted: bool,
}

/// Split `text` into plain and highlighted runs.
///
/// Phrases match ASCII case-insensitively (the service reports them in lower
/// case) and overlapping matches merge into one run. The original casing of
/// `text` is preserved. Concatenating all spans yields `text` again.
pub fn highlight_spans(text: &str, highlights: &[Highlight]) -> Vec<TextSpan> {
    let haystack = text.as_bytes();
    let mut marked = vec![false; haystack.len()];

    for highlight in highlights {
        let needle = highlight.phrase.trim().as_bytes();
        if needle.is_empty() || needle.len() > haystack.len() {
            continue;
        }
        let mut start = 0;
        while start + needle.len() <= haystack.len() {
            let end = start + needle.len();
            if text.is_char_boundary(start)
                && text.is_char_boundary(end)
                && haystack[start..end].eq_ignore_ascii_case(needle)
            {
                marked[start..end].iter_mut().for_each(|m| *m = true);
                start = end;
            } else {
                start += 1;
            }
        }
    }

    let mut spans: Vec<TextSpan> = Vec::new();
    let mut run_start = 0;
    for i in 1..=haystack.len() {
        if i == haystack.len() || marked[i] != marked[run_start] {
            spans.push(TextSpan {
                text: text[run_start..i].to_string(),
                highlighted: marked[run_start],
            });
            run_start = i;
        }
    }
    spans
}
