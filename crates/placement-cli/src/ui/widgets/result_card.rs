use placement_engine::RequestState;
use placement_evaluator::PredictionResult;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Gauge, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Renders exactly one of: hint, pending indicator, result card or error banner.
pub struct ResultCard<'a> {
    state: &'a RequestState,
    frame: usize,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ResultCard<'a> {
    pub fn new(state: &'a RequestState) -> Self {
        Self {
            state,
            frame: 0,
            block: None,
        }
    }

    /// Animation frame for the pending indicator.
    pub fn frame(self, frame: usize) -> Self {
        Self { frame, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        match self.state {
            RequestState::Idle => {
                Paragraph::new("Adjust the sliders and press Enter to run a prediction.")
                    .style(style::MUTED)
                    .wrap(Wrap { trim: true })
                    .render(area, buf);
            }
            RequestState::Pending => {
                let spinner = SPINNER[self.frame % SPINNER.len()];
                Line::styled(format!("{spinner} Analyzing…"), style::PENDING).render(area, buf);
            }
            RequestState::Resolved(result) => render_result(result, area, buf),
            RequestState::Failed(error) => {
                Paragraph::new(vec![
                    Line::styled("✗ PREDICTION FAILED", style::AT_RISK),
                    Line::styled(error.message.as_str(), style::ERROR),
                ])
                .wrap(Wrap { trim: true })
                .render(area, buf);
            }
        }
    }
}

fn render_result(result: &PredictionResult, area: Rect, buf: &mut Buffer) {
    let [caption_area, verdict_area, _, chance_area, gauge_area, _, factors_area] =
        Layout::vertical([Constraint::Length(1); 7]).areas(area);

    let (mark, verdict_style) = if result.placed {
        ("✓", style::PLACED)
    } else {
        ("✗", style::AT_RISK)
    };
    Line::styled("PREDICTION RESULT", style::MUTED).render(caption_area, buf);
    Line::styled(format!("{mark} {}", result.verdict_label()), verdict_style)
        .render(verdict_area, buf);

    let Some(chance) = result.chance else {
        Line::styled(
            "Verdict from the remote model; no probability reported.",
            style::MUTED,
        )
        .render(chance_area, buf);
        return;
    };

    let [chance_label_area, chance_value_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(5)]).areas(chance_area);
    Line::styled("PROBABILITY", style::MUTED).render(chance_label_area, buf);
    Line::styled(format!("{chance}%"), style::DEFAULT)
        .right_aligned()
        .render(chance_value_area, buf);
    Gauge::default()
        .ratio(f64::from(chance) / 100.0)
        .label("")
        .use_unicode(true)
        .gauge_style(verdict_style)
        .render(gauge_area, buf);

    let factor = |value: Option<i64>| value.map_or_else(|| "-".to_owned(), |v| format!("{v}%"));
    Line::from(vec![
        Span::styled("IQ FACTOR ", style::MUTED),
        Span::styled(factor(result.iq_factor), style::DEFAULT),
        Span::raw("    "),
        Span::styled("CGPA FACTOR ", style::MUTED),
        Span::styled(factor(result.cgpa_factor), style::DEFAULT),
    ])
    .render(factors_area, buf);
}
