/// LW3D Terminal - Rotating Wireframe Cube
///
/// Renders the 12-edge unit cube through the model/view/projection pipeline
/// onto a character framebuffer.
/// Controls:
///   - WASD / Arrow Keys: Move the camera
///   - E/R: Move the camera along the view axis
///   - Q/ESC: Quit

use lw3d_core::Mesh;
use lw3d_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cube = Mesh::unit_cube();
    log::info!("starting terminal renderer, {} edges", cube.segments.len());

    let mut app = TerminalApp::new(cube)?;
    app.run()?;

    Ok(())
}
