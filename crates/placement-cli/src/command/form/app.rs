use crossterm::event::Event;
use placement_engine::{BackendKind, PredictionSession};
use ratatui::Frame;

use crate::{
    command::form::screen::FormScreen,
    tui::{App, Runtime},
};

#[derive(Debug)]
pub struct FormApp {
    screen: FormScreen,
    refresh_rate: f64,
}

impl FormApp {
    pub fn new(session: PredictionSession, backend: BackendKind, refresh_rate: f64) -> Self {
        Self {
            screen: FormScreen::new(session, backend),
            refresh_rate,
        }
    }
}

impl App for FormApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.refresh_rate));
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) {
        self.screen.handle_event(event);
    }

    fn update(&mut self, _runtime: &mut Runtime) -> bool {
        self.screen.update()
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn close(&mut self) {
        self.screen.close();
    }
}
