/// Errors from the desktop frame driver
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error("frame delta cap must be positive and finite, got {0}")]
    FrameCap(f32),
    #[error("target frame rate must be non-zero")]
    FrameRate,
    #[error("window creation failed")]
    CreateWindow(#[source] minifb::Error),
    #[error("failed to present frame")]
    Present(#[source] minifb::Error),
}
