//! Pongo entry point
//!
//! Wires the two loops together: the winit event loop (input and
//! presentation) stays on the main thread, the fixed-cadence simulation
//! loop runs on its own thread. They share nothing but an intent queue, a
//! frame queue, and an exit flag.

use std::sync::atomic::{self, AtomicBool};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread;

use pongo::config::{Command, Config};
use pongo::consts::TICK_INTERVAL;
use pongo::render::{self, Frame};
use pongo::sim::{Intent, World, tick};
use pongo::window;

fn main() {
    env_logger::init();

    let config = match Config::parse(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{}", Config::usage());
            return;
        }
        Err(err) => {
            eprintln!("pongo: {err}");
            eprint!("{}", Config::usage());
            std::process::exit(2);
        }
    };
    log::info!(
        "starting: {}x{} court, speeds player/enemy/ball {}/{}/{}",
        config.width,
        config.height,
        config.player_speed,
        config.enemy_speed,
        config.ball_speed
    );

    let exit = Arc::new(AtomicBool::new(false));
    let (intent_tx, intent_rx) = mpsc::sync_channel(64);
    let (frame_tx, frame_rx) = mpsc::sync_channel(2);

    let world = World::new(&config);
    let sim_exit = exit.clone();
    let sim = thread::spawn(move || run_sim(world, intent_rx, frame_tx, sim_exit));

    let (ev_loop, mut app) =
        window::init((config.width, config.height), intent_tx, frame_rx, exit);
    ev_loop.run_app(&mut app).expect("window event loop failed");
    drop(app);

    sim.join().expect("simulation thread panicked");
}

/// Fixed-cadence simulation loop: drain intents, advance one tick, compose
/// a frame, sleep. Frame composition doubles as the win/lose check, so the
/// loop condition is re-tested before posting.
fn run_sim(
    mut world: World,
    intents: Receiver<Intent>,
    frames: SyncSender<Frame>,
    exit: Arc<AtomicBool>,
) {
    while world.running && !exit.load(atomic::Ordering::Relaxed) {
        tick(&mut world, intents.try_iter());
        if world.running && !world.paused {
            let frame = render::compose(&mut world);
            // Presentation lag never stalls the simulation
            let _ = frames.try_send(frame);
        }
        thread::sleep(TICK_INTERVAL);
    }
    log::debug!("simulation loop exiting");
    exit.store(true, atomic::Ordering::Relaxed);
}
