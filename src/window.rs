//! Window surface and input translation
//!
//! Thin shell over winit and softbuffer. This side never touches the
//! world: key and pointer events become [`Intent`]s posted on a bounded
//! channel drained by the simulation thread, and composed [`Frame`]s
//! arrive on another channel for presentation. A shared exit flag settles
//! shutdown cooperatively.

use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::atomic::{self, AtomicBool};
use std::sync::{Arc, mpsc};

use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::Key;
use winit::window::Window;

use crate::render::Frame;
use crate::sim::Intent;

pub struct WindowApp {
    window: Option<Rc<Window>>,
    context: Option<Rc<Context<Rc<Window>>>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    size: PhysicalSize<u32>,
    /// Court dimensions; pointer positions scale from surface to court
    court: (u32, u32),
    frames: mpsc::Receiver<Frame>,
    last_frame: Option<Frame>,
    intents: mpsc::SyncSender<Intent>,
    exit: Arc<AtomicBool>,
}

impl WindowApp {
    /// Post an intent without ever blocking the event loop. The simulation
    /// drains the queue every tick; a full or closed queue drops the
    /// intent.
    fn post(&self, intent: Intent) {
        let _ = self.intents.try_send(intent);
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, ev_loop: &ActiveEventLoop) {
        let attrs = Window::default_attributes()
            .with_title("Pongo")
            .with_inner_size(LogicalSize::new(self.court.0, self.court.1));
        let win = Rc::new(
            ev_loop
                .create_window(attrs)
                .expect("could not create window"),
        );
        self.size = win.inner_size();
        let ctx = Rc::new(Context::new(win.clone()).expect("could not create render context"));
        let mut sfc = Surface::new(&ctx, win.clone()).expect("could not create render surface");
        if let (Some(w), Some(h)) = (
            NonZeroU32::new(self.size.width),
            NonZeroU32::new(self.size.height),
        ) {
            sfc.resize(w, h).expect("could not size render surface");
        }
        self.window = Some(win);
        self.context = Some(ctx);
        self.surface = Some(sfc);
        log::debug!("window created at {}x{}", self.size.width, self.size.height);
    }

    fn window_event(
        &mut self,
        ev_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.post(Intent::Quit);
                self.exit.store(true, atomic::Ordering::Relaxed);
                ev_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if self.size.width == 0 || self.size.height == 0 {
                    return;
                }
                let Some(surface) = self.surface.as_mut() else {
                    return;
                };
                // Keep only the freshest composed frame
                while let Ok(frame) = self.frames.try_recv() {
                    self.last_frame = Some(frame);
                }
                let mut buffer = surface.buffer_mut().expect("could not get surface buffer");
                if let Some(frame) = &self.last_frame {
                    frame.rasterize(&mut buffer, self.size.width, self.size.height);
                }
                buffer.present().expect("could not present display buffer");
            }
            WindowEvent::Resized(phy_size) => {
                self.size = phy_size;
                if self.size.width != 0 && self.size.height != 0 {
                    if let Some(surface) = self.surface.as_mut() {
                        surface
                            .resize(
                                NonZeroU32::new(self.size.width).unwrap(),
                                NonZeroU32::new(self.size.height).unwrap(),
                            )
                            .expect("could not resize render surface");
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                // Repeats pass through: a held key keeps the paddle moving
                if event.state == ElementState::Pressed {
                    match event.logical_key.as_ref() {
                        Key::Character("j") => self.post(Intent::MoveDown),
                        Key::Character("k") => self.post(Intent::MoveUp),
                        Key::Character("p") => self.post(Intent::TogglePause),
                        Key::Character("q") => self.post(Intent::Quit),
                        _ => {}
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.size.width > 0 && self.size.height > 0 {
                    let x = position.x as f32 * self.court.0 as f32 / self.size.width as f32;
                    let y = position.y as f32 * self.court.1 as f32 / self.size.height as f32;
                    self.post(Intent::PointerTarget { x, y });
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, ev_loop: &ActiveEventLoop) {
        if self.exit.load(atomic::Ordering::Relaxed) {
            ev_loop.exit();
            return;
        }
        // Continuous redraw pump; presentation runs at the poll cadence
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Build the event loop and application shell. Fatal on display failure.
pub fn init(
    court: (u32, u32),
    intents: mpsc::SyncSender<Intent>,
    frames: mpsc::Receiver<Frame>,
    exit: Arc<AtomicBool>,
) -> (EventLoop<()>, WindowApp) {
    let ev_loop = EventLoop::new().expect("could not create windowing event loop");
    ev_loop.set_control_flow(ControlFlow::Poll);
    let app = WindowApp {
        window: None,
        context: None,
        surface: None,
        size: Default::default(),
        court,
        frames,
        last_frame: None,
        intents,
        exit,
    };
    (ev_loop, app)
}
