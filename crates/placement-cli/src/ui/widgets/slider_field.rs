use placement_evaluator::InputBounds;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{LineGauge, Widget},
};

use crate::ui::widgets::style;

/// Labelled slider: a caption with the current value, a track and the min/mid/max ticks.
pub struct SliderField<'a> {
    label: &'a str,
    value: f64,
    bounds: InputBounds,
    focused: bool,
}

impl<'a> SliderField<'a> {
    pub fn new(label: &'a str, value: f64, bounds: InputBounds) -> Self {
        Self {
            label,
            value,
            bounds,
            focused: false,
        }
    }

    pub fn focused(self, focused: bool) -> Self {
        Self { focused, ..self }
    }

    pub const fn height() -> u16 {
        3
    }

    fn format(&self, value: f64) -> String {
        let decimals = usize::try_from(self.bounds.decimal_places()).unwrap_or(0);
        format!("{value:.decimals$}")
    }
}

impl Widget for SliderField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [caption_area, track_area, ticks_area] =
            Layout::vertical([Constraint::Length(1); 3]).areas(area);

        let (marker, label_style) = if self.focused {
            ("▸ ", style::FOCUSED)
        } else {
            ("  ", style::MUTED)
        };
        let caption = Line::from(vec![
            Span::styled(marker, style::FOCUSED),
            Span::styled(self.label.to_uppercase(), label_style),
        ]);
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).areas(caption_area);
        caption.render(label_area, buf);
        Line::styled(self.format(self.value), style::ACCENT)
            .right_aligned()
            .render(value_area, buf);

        LineGauge::default()
            .ratio(self.bounds.fraction(self.value).clamp(0.0, 1.0))
            .label("")
            .filled_style(if self.focused { style::FOCUSED } else { style::ACCENT })
            .unfilled_style(style::TRACK)
            .render(track_area, buf);

        let [min_area, mid_area, max_area] = Layout::horizontal([Constraint::Fill(1); 3]).areas(ticks_area);
        Line::styled(self.format(self.bounds.min), style::MUTED)
            .left_aligned()
            .render(min_area, buf);
        Line::styled(self.format(self.bounds.midpoint()), style::MUTED)
            .centered()
            .render(mid_area, buf);
        Line::styled(self.format(self.bounds.max), style::MUTED)
            .right_aligned()
            .render(max_area, buf);
    }
}
