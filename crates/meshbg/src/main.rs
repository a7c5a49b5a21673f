use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use meshbg_background::ParticleField;
use meshbg_core::config::FRAME_INTERVAL;
use ratatui::DefaultTerminal;

use crate::surface::SurfaceError;

mod logging;
mod surface;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _logger = logging::setup();

    start(surface::acquire(), |terminal| {
        let result = App::new().run(terminal);
        ratatui::restore();
        result
    })
}

/// Hand the surface to `run`, or do nothing at all when there is none.
fn start<T>(
    surface: Result<T, SurfaceError>,
    run: impl FnOnce(T) -> color_eyre::Result<()>,
) -> color_eyre::Result<()> {
    match surface {
        Ok(terminal) => run(terminal),
        Err(err) => {
            // Decoration only: without a surface there is nothing to do.
            warn!("drawing surface unavailable, not starting: {err}");
            Ok(())
        }
    }
}

/// The main application which owns the particle field and the frame loop.
#[derive(Debug, Default)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated particle field.
    field: ParticleField,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the frame loop until quit.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.field.resize(size.width, size.height);
        info!("starting on a {}x{} terminal", size.width, size.height);

        self.running = true;
        let mut next_frame = Instant::now();
        while self.running {
            terminal.draw(|frame| self.field.render(frame))?;

            // Skip frames rather than catch up after a stall.
            next_frame += FRAME_INTERVAL;
            let now = Instant::now();
            if next_frame < now {
                next_frame = now;
            }
            self.handle_crossterm_events(next_frame)?;
        }

        info!("stopped after {} frames", self.field.frames());
        Ok(())
    }

    /// Reads the crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        let mut events = Vec::new();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            events.push(event::read()?);
            if Instant::now() >= deadline {
                break;
            }
        }
        self.on_events(events);
        Ok(())
    }

    /// Applies one frame's worth of events. Only the last resize counts.
    fn on_events(&mut self, events: impl IntoIterator<Item = Event>) {
        let mut resize = None;
        for event in events {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => resize = Some((cols, rows)),
                _ => {}
            }
        }
        if let Some((cols, rows)) = resize {
            self.on_resize(cols, rows);
        }
    }

    /// Handles the key events; the only keys are the ones that quit.
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Resize the surface and start over with fresh particles.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        debug!("terminal resized to {cols}x{rows}");
        self.field.resize(cols, rows);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshbg_core::{SurfaceSize, config::PARTICLE_COUNT};

    fn running_app() -> App {
        let mut app = App::new();
        app.running = true;
        app
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            KeyEvent::from(KeyCode::Char('q')),
            KeyEvent::from(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = running_app();
            app.on_key_event(key);
            assert!(!app.running);
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut app = running_app();
        app.on_key_event(KeyEvent::from(KeyCode::Char('c')));
        app.on_key_event(KeyEvent::from(KeyCode::Enter));
        assert!(app.running);
    }

    #[test]
    fn test_not_a_terminal_skips_loop() {
        let mut started = false;
        let result = start(Err::<(), _>(SurfaceError::NotATerminal), |_| {
            started = true;
            Ok(())
        });
        assert!(result.is_ok());
        assert!(!started);
    }

    #[test]
    fn test_surface_starts_loop() {
        let mut started = false;
        let result = start(Ok(()), |_| {
            started = true;
            Ok(())
        });
        assert!(result.is_ok());
        assert!(started);
    }

    #[test]
    fn test_only_last_resize_of_a_frame_applies() {
        let mut app = running_app();
        app.on_events([
            Event::Resize(80, 24),
            Event::Resize(90, 30),
            Event::FocusGained,
            Event::Resize(120, 40),
        ]);
        assert_eq!(app.field.bounds(), SurfaceSize::from_cells(120, 40));
        assert_eq!(app.field.particles().len(), PARTICLE_COUNT);
        assert!(app.running);
    }

    #[test]
    fn test_quit_and_resize_in_one_frame() {
        let mut app = running_app();
        app.on_events([
            Event::Resize(60, 20),
            Event::Key(KeyEvent::from(KeyCode::Char('q'))),
        ]);
        assert!(!app.running);
        assert_eq!(app.field.bounds(), SurfaceSize::from_cells(60, 20));
    }

    #[test]
    fn test_no_resize_leaves_field_alone() {
        let mut app = running_app();
        app.on_resize(50, 20);
        let before = app.field.particles().to_vec();
        app.on_events([Event::FocusLost]);
        assert_eq!(app.field.particles(), before.as_slice());
    }

    #[test]
    fn test_resize_reinitializes_field() {
        let mut app = running_app();
        app.on_resize(100, 37);
        assert_eq!(app.field.bounds(), SurfaceSize::from_cells(100, 37));
        assert_eq!(app.field.particles().len(), PARTICLE_COUNT);

        app.on_resize(50, 20);
        assert_eq!(app.field.bounds(), SurfaceSize::from_cells(50, 20));
        assert_eq!(app.field.particles().len(), PARTICLE_COUNT);
    }
}
