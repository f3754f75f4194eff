/// A single pass of the frame loop, independent of the window backend
use windmill_core::{Color, Game, InputEvent, PointerState, Surface};

use crate::events::{EventPump, WindowSample};

/// What the driver should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// The scene updated and the surface holds a frame to present
    Drawn,
    /// A quit arrived; nothing was drawn
    Quit,
}

/// Run one frame: every event from `sample` reaches the scene first, then the
/// clock is read, then the scene updates onto a freshly cleared surface.
///
/// On a quit frame the remaining events are still delivered but `tick` and the
/// update are skipped.
pub fn step_frame<G: Game + ?Sized>(
    game: &mut G,
    pump: &mut EventPump,
    sample: WindowSample,
    pointer: &dyn PointerState,
    tick: impl FnOnce() -> f32,
    surface: &mut dyn Surface,
) -> FrameStep {
    let mut quit = false;
    for event in pump.poll(sample) {
        quit |= event == InputEvent::Quit;
        game.handle_event(&event, pointer);
    }
    if quit {
        return FrameStep::Quit;
    }

    let delta = tick();
    surface.set_draw_color(Color::BLACK);
    surface.clear();
    surface.set_draw_color(Color::WHITE);
    game.update(delta, surface);

    FrameStep::Drawn
}
