//! Runs a field on a worker thread while another thread sweeps the pointer
//! across it, then prints what was drawn.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example headless_field
//! ```

use std::thread;
use std::time::Duration;

use pfield_sim::{
    Bounds2, DrawCommand, FieldConfig, FieldEvent, FieldRunner, PacedFrames, ParticleField,
    RecordingSurface, Vec2,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bounds = Bounds2::new(800.0, 600.0);
    let mut runner = FieldRunner::new(ParticleField::with_seed(FieldConfig::default(), bounds, 7));
    let events = runner.sender();
    let stop = runner.stop_handle();

    let worker = thread::spawn(move || {
        let mut surface = RecordingSurface::new();
        let summary = runner.run(&mut PacedFrames::new(60.0), &mut surface);
        (summary, surface)
    });

    // Drag the pointer diagonally across the surface for about two seconds
    for i in 0..=120 {
        let t = i as f32 / 120.0;
        let pointer = Vec2::new(bounds.width * t, bounds.height * t);
        if events.send(FieldEvent::PointerMoved(pointer)).is_err() {
            break;
        }
        thread::sleep(Duration::from_millis(16));
    }
    stop.stop();

    let Ok((summary, surface)) = worker.join() else {
        log::error!("Field worker panicked");
        return;
    };

    let discs = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { .. }))
        .count();

    println!("frames:        {}", summary.frames);
    println!("pointer moves: {}", summary.events);
    println!("pushes:        {}", summary.repelled);
    println!("links (last):  {}", summary.last_links);
    println!("links (max):   {}", summary.max_links);
    println!("discs (last):  {}", discs);
}
