/// Windmill - spinning cube field steered by the mouse
///
/// Controls:
///   - Mouse: move toward a screen quadrant to pan the camera that way
///   - ESC / close window: Quit

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use windmill_core::{Windmill, WindmillConfig};
use windmill_desktop::{DesktopApp, DesktopConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    tracing::info!("windmill starting");

    let scene = Windmill::new(WindmillConfig::default())?;
    let mut app = DesktopApp::new(scene, &DesktopConfig::default())
        .context("failed to start the windmill window")?;
    app.run()?;

    tracing::info!("windmill stopped");
    Ok(())
}
