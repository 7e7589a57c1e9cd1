/// Terminal demo driving a point with saturating interpolation
use bluegeom_core::prelude::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod animation;
pub mod config;
pub mod renderer;

pub use animation::Animation;
pub use config::DemoConfig;
pub use renderer::GridRenderer;

/// Distance the destination moves per key press, in world units
const NUDGE: f32 = 1.0;

fn io_error(err: GeomError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

/// Main application struct for the terminal demo
pub struct TerminalApp {
    config: DemoConfig,
    animation: Animation,
    renderer: GridRenderer,
    running: bool,
    paused: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: DemoConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let animation =
            Animation::new(config.source, config.destination, config.step).map_err(io_error)?;
        let renderer = GridRenderer::new(width as usize, height as usize, config.scale, config.insets);

        Ok(Self {
            config,
            animation,
            renderer,
            running: true,
            paused: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    /// The animation state, for reporting after the loop ends.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / u64::from(self.config.fps.max(1)));

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.update()?;
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('r') => {
                    self.animation.restart().map_err(io_error)?;
                }
                KeyCode::Char('w') | KeyCode::Up => self.nudge(Axis::Y, NUDGE)?,
                KeyCode::Char('s') | KeyCode::Down => self.nudge(Axis::Y, -NUDGE)?,
                KeyCode::Char('a') | KeyCode::Left => self.nudge(Axis::X, -NUDGE)?,
                KeyCode::Char('d') | KeyCode::Right => self.nudge(Axis::X, NUDGE)?,
                KeyCode::Char('e') => self.nudge(Axis::Z, NUDGE)?,
                KeyCode::Char('f') => self.nudge(Axis::Z, -NUDGE)?,
                _ => {}
            },
            Event::Resize(width, height) => {
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
        Ok(())
    }

    fn nudge(&mut self, axis: Axis, delta: f32) -> io::Result<()> {
        self.animation.retarget(axis, delta).map_err(io_error)
    }

    fn update(&mut self) -> io::Result<()> {
        if self.paused {
            return Ok(());
        }
        let was_arrived = self.animation.arrived();
        let arrived = self.animation.advance().map_err(io_error)?;
        if arrived && !was_arrived {
            tracing::info!(position = %self.animation.position(), "arrived");
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render_axes();
        self.renderer.render_point(self.animation.source(), Some('o'));
        self.renderer.render_point(self.animation.destination(), Some('x'));
        self.renderer.render_point(self.animation.position(), None);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let [x, y, z] = self.animation.position().components();
        let status = if self.animation.arrived() {
            "arrived"
        } else if self.paused {
            "paused"
        } else {
            "moving"
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "bluegeom | ({:.2}, {:.2}, {:.2}) {:>3.0}% {} | FPS: {:.1} | WASD/EF=Move target Space=Pause R=Restart Q=Quit",
                x,
                y,
                z,
                self.animation.progress() * 100.0,
                status,
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
