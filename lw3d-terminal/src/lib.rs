/// Terminal front-end for the wireframe pipeline
///
/// Owns the frame loop (the scheduler collaborator) and the crossterm
/// surface; the transform work lives in `lw3d-core`.
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use lw3d_core::{Mesh, Pipeline, PipelineConfig, Vec3};

pub mod renderer;

pub use renderer::CharSurface;

/// Display refresh the frame pacing targets. The spin speed itself is
/// measured-time based, so a slower terminal only drops smoothness.
const TARGET_FPS: u64 = 75;
/// World units the camera moves per key press.
const CAMERA_STEP: f32 = 0.1;

/// Frame duration the pacing sleeps toward. Computed in float seconds;
/// integer millisecond division would truncate 1/75 s to 13 ms and pace
/// faster than the target.
fn target_frame_time() -> Duration {
    Duration::from_secs_f32(1.0 / TARGET_FPS as f32)
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    pipeline: Pipeline,
    surface: CharSurface,
    running: bool,
    last_frame: Instant,
    fps_window: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let pipeline = Pipeline::new(
            mesh,
            PipelineConfig::default(),
            width as u32,
            height as u32,
        );
        let now = Instant::now();

        Ok(Self {
            pipeline,
            surface: CharSurface::new(width as usize, height as usize),
            running: true,
            last_frame: now,
            fps_window: now,
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

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = target_frame_time();
        self.last_frame = Instant::now();
        self.fps_window = self.last_frame;

        while self.running {
            let frame_start = Instant::now();
            let dt = (frame_start - self.last_frame).as_secs_f32();
            self.last_frame = frame_start;

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Transform and rasterize
            self.pipeline
                .render_frame(&mut self.surface, dt)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

            // Present
            self.present()?;

            // Frame pacing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            self.frame_count += 1;
            let now = Instant::now();
            if (now - self.fps_window).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.fps_window).as_secs_f32();
                self.frame_count = 0;
                self.fps_window = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.pipeline.camera.translate(Vec3::new(0.0, CAMERA_STEP, 0.0));
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.pipeline.camera.translate(Vec3::new(0.0, -CAMERA_STEP, 0.0));
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.pipeline.camera.translate(Vec3::new(-CAMERA_STEP, 0.0, 0.0));
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.pipeline.camera.translate(Vec3::new(CAMERA_STEP, 0.0, 0.0));
                }
                KeyCode::Char('e') => {
                    self.pipeline.camera.translate(Vec3::new(0.0, 0.0, CAMERA_STEP));
                }
                KeyCode::Char('r') => {
                    self.pipeline.camera.translate(Vec3::new(0.0, 0.0, -CAMERA_STEP));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.surface.present(&mut stdout)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "LW3D Wireframe | FPS: {:.1} | WASD/Arrows=Move E/R=Depth Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
