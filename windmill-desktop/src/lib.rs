/// Desktop window frontend for the Windmill scene
use minifb::{Key, MouseMode, Window, WindowOptions};
use std::time::Instant;
use windmill_core::{FrameBuffer, Game, PointerState};

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod frame;

pub use clock::{ClockScale, FrameClock};
pub use config::DesktopConfig;
pub use error::DesktopError;
pub use events::{EventPump, WindowSample};
pub use frame::{step_frame, FrameStep};

/// Live pointer position of a window, in window pixels
struct WindowPointer<'a>(&'a Window);

impl PointerState for WindowPointer<'_> {
    fn pointer_position(&self) -> (i32, i32) {
        self.0
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x as i32, y as i32))
            .unwrap_or((0, 0))
    }
}

/// Main application struct: one window, one scene, one frame loop
pub struct DesktopApp<G: Game> {
    game: G,
    window: Window,
    frame: FrameBuffer,
    clock: FrameClock,
    pump: EventPump,
    last_report: Instant,
    frame_count: u32,
    fps: f32,
}

impl<G: Game> DesktopApp<G> {
    /// Initialise the scene, open a window titled after it, then load it
    pub fn new(mut game: G, config: &DesktopConfig) -> Result<Self, DesktopError> {
        config.validate()?;
        game.init();
        let (width, height) = game.screen_size();

        let mut window = Window::new(
            game.display_name(),
            width as usize,
            height as usize,
            WindowOptions {
                resize: false,
                scale: minifb::Scale::X1,
                ..WindowOptions::default()
            },
        )
        .map_err(DesktopError::CreateWindow)?;
        window.set_target_fps(config.target_fps);
        tracing::info!(title = game.display_name(), width, height, "window created");

        game.load();

        Ok(Self {
            game,
            window,
            frame: FrameBuffer::new(width as usize, height as usize),
            clock: FrameClock::new(config.clock_scale, config.max_frame_delta),
            pump: EventPump::new(),
            last_report: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Run until the window is closed or Escape is pressed
    pub fn run(&mut self) -> Result<(), DesktopError> {
        loop {
            let sample = WindowSample {
                open: self.window.is_open(),
                escape: self.window.is_key_down(Key::Escape),
                pointer: self
                    .window
                    .get_mouse_pos(MouseMode::Discard)
                    .map(|(x, y)| (x as i32, y as i32)),
            };

            let step = step_frame(
                &mut self.game,
                &mut self.pump,
                sample,
                &WindowPointer(&self.window),
                || self.clock.tick(),
                &mut self.frame,
            );
            if step == FrameStep::Quit {
                break;
            }

            self.window
                .update_with_buffer(self.frame.pixels(), self.frame.width(), self.frame.height())
                .map_err(DesktopError::Present)?;
            self.count_frame();
        }

        tracing::info!(fps = self.fps, "frame loop stopped");
        Ok(())
    }

    fn count_frame(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        let window = now - self.last_report;
        if window.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / window.as_secs_f32();
            self.frame_count = 0;
            self.last_report = now;
            tracing::debug!(fps = self.fps, "frame rate");
        }
    }
}
