/// Turns polled window state into discrete scene events
use windmill_core::InputEvent;

/// Window state sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSample {
    pub open: bool,
    pub escape: bool,
    pub pointer: Option<(i32, i32)>,
}

/// Synthesizes quit and pointer-motion events from per-frame samples.
///
/// The window backend only exposes current state, so motion is reported when
/// the pointer position differs from the previous sample.
#[derive(Debug, Default)]
pub struct EventPump {
    last_pointer: Option<(i32, i32)>,
}

impl EventPump {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events for this frame, quit first
    pub fn poll(&mut self, sample: WindowSample) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !sample.open || sample.escape {
            events.push(InputEvent::Quit);
        }

        if let Some(pos) = sample.pointer {
            if self.last_pointer != Some(pos) {
                events.push(InputEvent::PointerMotion);
            }
            self.last_pointer = Some(pos);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pointer: Option<(i32, i32)>) -> WindowSample {
        WindowSample {
            open: true,
            escape: false,
            pointer,
        }
    }

    #[test]
    fn test_first_pointer_sample_is_motion() {
        let mut pump = EventPump::new();
        assert_eq!(pump.poll(sample(Some((5, 5)))), vec![InputEvent::PointerMotion]);
    }

    #[test]
    fn test_still_pointer_is_silent() {
        let mut pump = EventPump::new();
        pump.poll(sample(Some((5, 5))));
        assert!(pump.poll(sample(Some((5, 5)))).is_empty());
        assert_eq!(pump.poll(sample(Some((6, 5)))), vec![InputEvent::PointerMotion]);
    }

    #[test]
    fn test_pointer_outside_window() {
        let mut pump = EventPump::new();
        assert!(pump.poll(sample(None)).is_empty());
    }

    #[test]
    fn test_quit_on_close_or_escape() {
        let mut pump = EventPump::new();
        let closed = WindowSample {
            open: false,
            escape: false,
            pointer: None,
        };
        assert_eq!(pump.poll(closed), vec![InputEvent::Quit]);

        let escape = WindowSample {
            open: true,
            escape: true,
            pointer: Some((1, 1)),
        };
        assert_eq!(
            pump.poll(escape),
            vec![InputEvent::Quit, InputEvent::PointerMotion]
        );
    }
}
