use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};

#[derive(Debug, Clone)]
pub(super) enum TuiEvent {
    Tick,
    Render,
    Terminal(Event),
}

/// Produces ticks at a fixed interval and a render after anything changed.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            // first frame
            dirty: true,
        }
    }
}

impl EventLoop {
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Blocks until the next tick, pending render or terminal event.
    ///
    /// Pending renders take priority over waiting for input; terminal events always mark the
    /// view dirty.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= interval
            {
                self.last_tick = now;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let timeout = self
                .tick_interval
                .map(|interval| (self.last_tick + interval).saturating_duration_since(now));
            let ready = match timeout {
                Some(timeout) => event::poll(timeout)?,
                None => true,
            };
            if ready {
                self.dirty = true;
                return Ok(TuiEvent::Terminal(event::read()?));
            }
        }
    }
}
