use crossterm::event::{Event, KeyCode, KeyEvent};
use placement_engine::{BackendKind, PredictionSession};
use placement_evaluator::{CGPA_BOUNDS, IQ_BOUNDS, InputFeature, RawInputs};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Padding},
};
use tracing::debug;

use crate::ui::widgets::{ResultCard, SliderField, style};

const COARSE_STEPS: i32 = 10;

#[derive(Debug)]
pub struct FormScreen {
    session: PredictionSession,
    backend: BackendKind,
    inputs: RawInputs,
    focus: InputFeature,
    spinner_frame: usize,
    is_exiting: bool,
}

impl FormScreen {
    pub fn new(session: PredictionSession, backend: BackendKind) -> Self {
        Self {
            session,
            backend,
            inputs: RawInputs::default(),
            focus: InputFeature::Iq,
            spinner_frame: 0,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn inputs(&self) -> RawInputs {
        self.inputs
    }

    pub fn session(&self) -> &PredictionSession {
        &self.session
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event().filter(KeyEvent::is_press) else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.adjust(-1),
            KeyCode::Right | KeyCode::Char('l') => self.adjust(1),
            KeyCode::PageDown => self.adjust(-COARSE_STEPS),
            KeyCode::PageUp => self.adjust(COARSE_STEPS),
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    /// Applies settled requests and advances the pending indicator.
    pub fn update(&mut self) -> bool {
        let changed = self.session.poll();
        if self.session.is_pending() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            return true;
        }
        changed
    }

    pub fn close(&mut self) {
        self.session.teardown();
    }

    fn adjust(&mut self, steps: i32) {
        match self.focus {
            InputFeature::Iq => self.inputs.iq = IQ_BOUNDS.step_by(self.inputs.iq, steps),
            InputFeature::Cgpa => self.inputs.cgpa = CGPA_BOUNDS.step_by(self.inputs.cgpa, steps),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputFeature::Iq => InputFeature::Cgpa,
            InputFeature::Cgpa => InputFeature::Iq,
        };
        debug!(field = %self.focus, "focus changed");
    }

    fn submit(&mut self) {
        if !self.session.trigger(self.inputs) {
            debug!("prediction already in progress; ignoring submit");
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [header_area, iq_area, _, cgpa_area, _, button_area, result_area, help_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(SliderField::height()),
                Constraint::Length(1),
                Constraint::Length(SliderField::height()),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(9),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        let header = Line::from(vec![
            Span::styled("Placement Predictor", style::FOCUSED),
            Span::styled(format!("  ·  {} model", self.backend), style::MUTED),
        ]);
        frame.render_widget(header, header_area);

        frame.render_widget(
            SliderField::new("IQ score", self.inputs.iq, IQ_BOUNDS)
                .focused(self.focus == InputFeature::Iq),
            iq_area,
        );
        frame.render_widget(
            SliderField::new("CGPA", self.inputs.cgpa, CGPA_BOUNDS)
                .focused(self.focus == InputFeature::Cgpa),
            cgpa_area,
        );

        let button = if self.session.is_pending() {
            Line::styled("[ Analyzing… ]", style::PENDING)
        } else {
            Line::styled("[ Run Prediction → ]", style::ACCENT)
        };
        frame.render_widget(button.centered(), button_area);

        let card = ResultCard::new(self.session.state())
            .frame(self.spinner_frame)
            .block(Block::bordered().padding(Padding::horizontal(1)));
        frame.render_widget(card, result_area);

        let help = Line::styled(
            "←/→ adjust | PgUp/PgDn ×10 | ↑/↓ switch field | Enter predict | q quit",
            style::MUTED,
        )
        .centered();
        frame.render_widget(help, help_area);
    }
}
