//! Minimal terminal runtime for single-screen applications.
//!
//! [`Runtime::run`] drives an [`App`] until it asks to exit:
//!
//! - terminal events are forwarded to [`App::handle_event`]
//! - on each tick, [`App::update`] runs and reports whether the view changed
//! - the screen is redrawn only after input or a reported change
//! - [`App::close`] runs once before the terminal is restored

use std::{io, time::Duration};

use crossterm::event::Event;
use ratatui::Frame;

use self::event_loop::{EventLoop, TuiEvent};

mod event_loop;

/// Application driven by [`Runtime`].
pub trait App {
    /// Called once before the first frame. Configure the tick rate here.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles key input, resize and other terminal events.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event);

    /// Advances background work. Returns `true` if the view must be redrawn.
    fn update(&mut self, runtime: &mut Runtime) -> bool;

    fn draw(&self, frame: &mut Frame);

    /// Called once when the loop ends, before the terminal is restored.
    fn close(&mut self);
}

#[derive(Debug, Default)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate (Hz). `None` disables ticks.
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.events
            .set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        let result = ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        if app.update(&mut self) {
                            self.events.mark_dirty();
                        }
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Terminal(event) => {
                        app.handle_event(&mut self, &event);
                    }
                }
            }
            Ok(())
        });

        app.close();
        result
    }
}
