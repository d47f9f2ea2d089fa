//! Result Card
//!
//! Terminal rendering of a `ResultView` and of the request state around it.

use owo_colors::{OwoColorize, Style};
use recruiter_check_core::{highlight_spans, BadgeColorKey, Highlight, ResultView};

use crate::services::analysis::RequestState;

/// Number of cells in the score bar
pub const BAR_CELLS: usize = 20;

/// Applies styles only when color output is enabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

fn badge_style(key: BadgeColorKey) -> Style {
    match key {
        BadgeColorKey::Green => Style::new().green().bold(),
        BadgeColorKey::Yellow => Style::new().yellow().bold(),
        BadgeColorKey::Red => Style::new().red().bold(),
        BadgeColorKey::Neutral => Style::new().bold(),
    }
}

/// Render the filled / empty cells for a width in percent.
pub fn progress_bar(width_percent: u8) -> (String, String) {
    let filled = (usize::from(width_percent.min(100)) * BAR_CELLS + 50) / 100;
    ("█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// Render the analysis card.
pub fn render_card(view: &ResultView, painter: Painter) -> String {
    let style = badge_style(view.badge_color_key);
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n",
        painter.paint("Analysis Result", Style::new().bold()),
        painter.paint(&format!("[{}]", view.badge_label), style)
    ));

    let (filled, empty) = progress_bar(view.progress_width_percent);
    out.push_str(&format!(
        "Score {}/100  {}{}\n",
        painter.paint(&view.score.to_string(), Style::new().bold()),
        painter.paint(&filled, style),
        painter.paint(&empty, Style::new().dimmed())
    ));

    out.push_str("\nTriggered Flags\n");
    match &view.empty_flags_message {
        Some(message) => {
            out.push_str(&format!(
                "  {}\n",
                painter.paint(&format!("✓ {}", message), Style::new().green())
            ));
        }
        None => {
            for flag in &view.flag_items {
                out.push_str(&format!(
                    "  {}\n",
                    painter.paint(&format!("⚠ {}", flag), Style::new().red())
                ));
            }
        }
    }

    out
}

/// Render the submitted message with the implicated phrases marked.
///
/// Without color, highlighted runs are wrapped in brackets.
pub fn render_highlighted(text: &str, highlights: &[Highlight], painter: Painter) -> String {
    highlight_spans(text, highlights)
        .iter()
        .map(|span| match (span.highlighted, painter.is_enabled()) {
            (false, _) => span.text.clone(),
            (true, true) => painter.paint(&span.text, Style::new().yellow().underline()),
            (true, false) => format!("[{}]", span.text),
        })
        .collect()
}

/// Render whatever the request state currently shows.
pub fn render_state(state: &RequestState, submitted: &str, painter: Painter) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading { .. } => format!("{}\n", crate::services::analysis::BUSY_LABEL),
        RequestState::Success { result } => {
            let view = recruiter_check_core::present(result);
            let mut out = render_card(&view, painter);
            if !result.highlights.is_empty() {
                out.push_str("\nMessage\n");
                for line in render_highlighted(submitted, &result.highlights, painter).lines() {
                    out.push_str(&format!("  {}\n", line));
                }
            }
            out
        }
        RequestState::Error { message } => format!(
            "{}\n",
            painter.paint(&format!("⚠ {}", message), Style::new().red().bold())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use recruiter_check_core::{present, AnalysisResult};

    #[test]
    fn test_progress_bar_cells() {
        assert_eq!(progress_bar(0), (String::new(), "░".repeat(20)));
        assert_eq!(progress_bar(100), ("█".repeat(20), String::new()));
        assert_eq!(progress_bar(72).0.chars().count(), 14);
        assert_eq!(progress_bar(72).1.chars().count(), 6);
        assert_eq!(progress_bar(255).0.chars().count(), 20);
    }

    #[test]
    fn test_render_card_with_flags() {
        let result = AnalysisResult::new(
            72,
            "High",
            vec!["urgency language".to_string(), "generic greeting".to_string()],
        );
        let card = render_card(&present(&result), Painter::plain());
        let expected = format!(
            "Analysis Result  [High Risk]\nScore 72/100  {}{}\n\nTriggered Flags\n  ⚠ urgency language\n  ⚠ generic greeting\n",
            "█".repeat(14),
            "░".repeat(6)
        );
        assert_eq!(card, expected);
    }

    #[test]
    fn test_render_card_without_flags() {
        let card = render_card(
            &present(&AnalysisResult::new(10, "Low", vec![])),
            Painter::plain(),
        );
        assert!(card.contains("[Low Risk]"));
        assert!(card.contains("✓ No suspicious patterns detected."));
        assert!(!card.contains('⚠'));
    }

    #[test]
    fn test_render_card_out_of_range_score() {
        let card = render_card(
            &present(&AnalysisResult::new(130, "Severe", vec![])),
            Painter::plain(),
        );
        assert!(card.contains("[Severe Risk]"));
        assert!(card.contains(&format!("Score 130/100  {}\n", "█".repeat(20))));
    }

    #[test]
    fn test_render_highlighted_plain() {
        let rendered = render_highlighted(
            "Pay the Processing Fee via Telegram",
            &[Highlight::new("processing fee"), Highlight::new("telegram")],
            Painter::plain(),
        );
        assert_eq!(rendered, "Pay the [Processing Fee] via [Telegram]");
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let painter = Painter::new(true);
        let painted = painter.paint("High Risk", Style::new().red());
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("High Risk"));
    }

    #[test]
    fn test_render_state_variants() {
        assert_eq!(render_state(&RequestState::Idle, "", Painter::plain()), "");
        assert_eq!(
            render_state(
                &RequestState::Loading {
                    text: "x".to_string()
                },
                "x",
                Painter::plain()
            ),
            "Analyzing…\n"
        );
        assert_eq!(
            render_state(
                &RequestState::Error {
                    message: "API error 500: internal error".to_string()
                },
                "x",
                Painter::plain()
            ),
            "⚠ API error 500: internal error\n"
        );

        let result = AnalysisResult::new(35, "Medium", vec!["Mentions upfront fee".to_string()])
            .with_highlights(vec![Highlight::new("fee")]);
        let out = render_state(
            &RequestState::Success { result },
            "There is a small fee",
            Painter::plain(),
        );
        assert!(out.contains("[Medium Risk]"));
        assert!(out.ends_with("Message\n  There is a small [fee]\n"));
    }
}
