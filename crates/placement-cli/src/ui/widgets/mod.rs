pub use self::{result_card::*, slider_field::*};

mod result_card;
mod slider_field;

mod color {
    use ratatui::style::Color;

    pub const EMERALD: Color = Color::Rgb(52, 211, 153);
    pub const CYAN: Color = Color::Rgb(34, 211, 238);
    pub const ROSE: Color = Color::Rgb(251, 113, 133);
    pub const AMBER: Color = Color::Rgb(251, 191, 36);
    pub const ZINC_500: Color = Color::Rgb(113, 113, 122);
    pub const ZINC_800: Color = Color::Rgb(39, 39, 42);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Modifier, Style};

    use crate::ui::widgets::color;

    pub const DEFAULT: Style = Style::new().fg(color::WHITE);
    pub const MUTED: Style = Style::new().fg(color::ZINC_500);
    pub const ACCENT: Style = Style::new().fg(color::EMERALD);
    pub const FOCUSED: Style = Style::new().fg(color::CYAN).add_modifier(Modifier::BOLD);
    pub const TRACK: Style = Style::new().fg(color::ZINC_800);
    pub const PLACED: Style = Style::new().fg(color::EMERALD).add_modifier(Modifier::BOLD);
    pub const AT_RISK: Style = Style::new().fg(color::ROSE).add_modifier(Modifier::BOLD);
    pub const PENDING: Style = Style::new().fg(color::AMBER);
    pub const ERROR: Style = Style::new().fg(color::ROSE);
}
