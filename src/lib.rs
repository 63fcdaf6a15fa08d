//! Pongo - a classic court Pong with a reactive computer opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, tick orchestration)
//! - `render`: Frame composition into a rectangle display list
//! - `window`: winit/softbuffer surface and input translation
//! - `config`: Command-line configuration
//!
//! Keyboard controls: `j` paddle down, `k` paddle up, `p` pause, `q` quit.
//! The mouse also drives the paddle directly.

pub mod config;
pub mod render;
pub mod sim;
pub mod window;

pub use config::Config;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed cadence shared by the simulation and presentation loops
    pub const TICK_INTERVAL: Duration = Duration::from_millis(25);

    /// Ball half-extent; the ball renders as a 2*radius square
    pub const BALL_RADIUS: f32 = 2.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Paddle center x inset from its own wall
    pub const PADDLE_MARGIN: f32 = 5.0;

    /// Colors, 0x00RRGGBB (softbuffer pixel layout)
    pub const COLOR_BACKGROUND: u32 = 0x000000;
    pub const COLOR_NET: u32 = 0x333333;
    pub const COLOR_PLAYER: u32 = 0x6666ff;
    pub const COLOR_OPPONENT: u32 = 0xff6666;
    pub const COLOR_BALL: u32 = 0xffffff;

    /// Score tally markers: square size and horizontal step per point
    pub const MARKER_SIZE: u32 = 3;
    pub const MARKER_STEP: i32 = 6;
}
