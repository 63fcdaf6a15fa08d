//! Frame composition
//!
//! Once per tick the world is reduced to a display list of axis-aligned
//! filled rectangles: a full clear, the center net, both paddles, the
//! ball, and the score tally rows. Pixel coordinates truncate the
//! floating-point entity state.
//!
//! The win/lose check rides along with tally composition: the game ends
//! when the player's row would extend past the right edge of the court,
//! or the opponent's row reaches the left edge.

use crate::consts::*;
use crate::sim::{Paddle, World};

/// An axis-aligned filled rectangle in court pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    pub color: u32,
}

/// One composed frame, ready to rasterize onto any surface size
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rects: Vec<Rect>,
}

/// Build the display list for the current world state.
///
/// Mutates the world when a tally row crosses its edge: announces the
/// result and flips the world to terminated.
pub fn compose(world: &mut World) -> Frame {
    let width = world.court.width as u32;
    let height = world.court.height as u32;
    let mut rects = Vec::with_capacity(8 + (world.score.player + world.score.opponent) as usize);

    rects.push(Rect {
        x: 0,
        y: 0,
        w: width,
        h: height,
        color: COLOR_BACKGROUND,
    });
    rects.push(Rect {
        x: width as i32 / 2 - 1,
        y: 0,
        w: 2,
        h: height,
        color: COLOR_NET,
    });

    rects.push(paddle_rect(&world.player, COLOR_PLAYER));
    rects.push(paddle_rect(&world.opponent, COLOR_OPPONENT));

    let size = (world.ball.radius * 2.0) as u32;
    rects.push(Rect {
        x: (world.ball.pos.x - world.ball.radius) as i32,
        y: (world.ball.pos.y - world.ball.radius) as i32,
        w: size,
        h: size,
        color: COLOR_BALL,
    });

    // Player tally, one marker per point, growing toward the right edge
    let mut x = (world.player.width + world.player.pos.x) as i32;
    for _ in 0..world.score.player {
        x += MARKER_STEP;
        rects.push(marker(x, 3, COLOR_PLAYER));
    }
    if x > width as i32 {
        println!("You Win!");
        world.terminate();
    }

    // Opponent tally, growing toward the left edge; the row keeps one
    // marker visible at zero points
    let mut x = (world.opponent.pos.x - world.opponent.width) as i32;
    for _ in 0..=world.score.opponent {
        x -= MARKER_STEP;
        rects.push(marker(x, height as i32 - 6, COLOR_OPPONENT));
    }
    if x <= 0 {
        println!("You Lose!");
        world.terminate();
    }

    Frame {
        width,
        height,
        rects,
    }
}

fn paddle_rect(paddle: &Paddle, color: u32) -> Rect {
    Rect {
        x: (paddle.pos.x - paddle.width / 2.0) as i32,
        y: (paddle.pos.y - paddle.height / 2.0) as i32,
        w: paddle.width as u32,
        h: paddle.height as u32,
        color,
    }
}

fn marker(x: i32, y: i32, color: u32) -> Rect {
    Rect {
        x,
        y,
        w: MARKER_SIZE,
        h: MARKER_SIZE,
        color,
    }
}

impl Frame {
    /// Fill a `surf_w * surf_h` pixel buffer, scaling court coordinates to
    /// the surface and clipping rectangles that stick out.
    pub fn rasterize(&self, buf: &mut [u32], surf_w: u32, surf_h: u32) {
        if surf_w == 0 || surf_h == 0 || self.width == 0 || self.height == 0 {
            return;
        }
        debug_assert!(buf.len() >= (surf_w as usize) * (surf_h as usize));

        let sx = surf_w as f32 / self.width as f32;
        let sy = surf_h as f32 / self.height as f32;

        for rect in &self.rects {
            let x0 = scale_clamp(rect.x, sx, surf_w);
            let y0 = scale_clamp(rect.y, sy, surf_h);
            let x1 = scale_clamp(rect.x + rect.w as i32, sx, surf_w).max(x0);
            let y1 = scale_clamp(rect.y + rect.h as i32, sy, surf_h).max(y0);

            for y in y0..y1 {
                let row = y * surf_w as usize;
                buf[row + x0..row + x1].fill(rect.color);
            }
        }
    }
}

fn scale_clamp(v: i32, scale: f32, max: u32) -> usize {
    ((v as f32 * scale).round() as i64).clamp(0, max as i64) as usize
}
