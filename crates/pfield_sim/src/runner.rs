//! Frame-driven run loop
//!
//! [`FieldRunner`] owns a field and ticks it once per frame handed out by a
//! [`FrameSource`]. Inputs can be sent from any thread through the runner's
//! channel; they are applied between ticks, never during one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::field::{FieldEvent, ParticleField};
use crate::surface::DrawSurface;

/// Default frame interval (60 Hz)
const DEFAULT_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// One frame handed to the runner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Zero-based frame number
    pub index: u64,
    /// Time since the previous frame
    pub elapsed: Duration,
}

/// Source of frames ("call me before the next refresh")
///
/// Returning `None` ends the run.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Frame>;
}

/// A fixed number of frames at a synthetic interval, with no waiting
#[derive(Clone, Debug)]
pub struct FixedFrames {
    total: u64,
    index: u64,
    interval: Duration,
}

impl FixedFrames {
    /// `count` frames at 60 Hz
    pub fn new(count: u64) -> Self {
        Self::with_interval(count, DEFAULT_INTERVAL)
    }

    /// `count` frames, each reporting `interval` as its elapsed time
    pub fn with_interval(count: u64, interval: Duration) -> Self {
        Self {
            total: count,
            index: 0,
            interval,
        }
    }

    /// Frames not yet handed out
    pub fn remaining(&self) -> u64 {
        self.total - self.index
    }
}

impl FrameSource for FixedFrames {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.index >= self.total {
            return None;
        }
        let frame = Frame {
            index: self.index,
            elapsed: self.interval,
        };
        self.index += 1;
        Some(frame)
    }
}

/// Real-time frames paced to a target rate
///
/// Sleeps until the next frame is due, so it never runs ahead of the rate.
/// Unlimited unless a frame limit is set.
#[derive(Debug)]
pub struct PacedFrames {
    interval: Duration,
    last: Instant,
    index: u64,
    limit: Option<u64>,
}

impl PacedFrames {
    /// Frames at `hz` per second
    pub fn new(hz: f32) -> Self {
        let interval = if hz > 0.0 {
            Duration::from_secs_f32(1.0 / hz)
        } else {
            DEFAULT_INTERVAL
        };
        Self {
            interval,
            last: Instant::now(),
            index: 0,
            limit: None,
        }
    }

    /// Stop after `limit` frames
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl FrameSource for PacedFrames {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.limit.is_some_and(|limit| self.index >= limit) {
            return None;
        }

        let due = self.last + self.interval;
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }

        let now = Instant::now();
        let frame = Frame {
            index: self.index,
            elapsed: now - self.last,
        };
        self.last = now;
        self.index += 1;
        Some(frame)
    }
}

/// Cloneable flag that stops a running [`FieldRunner`]
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request the runner to stop after the current frame
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether a stop has been requested
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Totals from a finished run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames ticked
    pub frames: u64,
    /// Input events applied
    pub events: u64,
    /// Links drawn on the final frame
    pub last_links: usize,
    /// Most links drawn on any frame
    pub max_links: usize,
    /// Particle pushes summed over all frames
    pub repelled: u64,
}

/// Owns a field and drives it from a frame source
pub struct FieldRunner {
    field: ParticleField,
    sender: Sender<FieldEvent>,
    events: Receiver<FieldEvent>,
    stop: StopHandle,
}

impl FieldRunner {
    /// Wrap a field
    pub fn new(field: ParticleField) -> Self {
        let (sender, events) = mpsc::channel();
        Self {
            field,
            sender,
            events,
            stop: StopHandle::default(),
        }
    }

    /// Sender for inputs; clone freely and move to other threads
    pub fn sender(&self) -> Sender<FieldEvent> {
        self.sender.clone()
    }

    /// Handle that stops the run
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// The field being driven
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Give the field back
    pub fn into_field(self) -> ParticleField {
        self.field
    }

    /// Tick until the frame source runs dry or a stop is requested
    ///
    /// Pending inputs are drained before every tick.
    pub fn run<F, S>(&mut self, frames: &mut F, surface: &mut S) -> RunSummary
    where
        F: FrameSource + ?Sized,
        S: DrawSurface + ?Sized,
    {
        let mut summary = RunSummary::default();

        while !self.stop.is_stopped() {
            let Some(frame) = frames.next_frame() else {
                break;
            };

            summary.events += self.drain_events();

            let stats = self.field.tick_frame(frame.elapsed, surface);
            summary.frames += 1;
            summary.last_links = stats.links;
            summary.max_links = summary.max_links.max(stats.links);
            summary.repelled += stats.repelled as u64;

            log::trace!("Frame {}: {} links, {} repelled", frame.index, stats.links, stats.repelled);
        }

        log::debug!("Run finished after {} frames", summary.frames);
        summary
    }

    fn drain_events(&mut self) -> u64 {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.field.apply(event);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::particle::Particle;
    use crate::surface::RecordingSurface;
    use pfield_math::{Bounds2, Vec2};

    fn single_particle_runner() -> FieldRunner {
        let particle = Particle::new(Vec2::new(50.0, 50.0), 1.0, 0.5).with_velocity(Vec2::new(0.25, 0.0));
        let mut field = ParticleField::from_particles(vec![particle], Bounds2::new(100.0, 100.0), FieldConfig::default());
        field.set_pointer(Vec2::new(-1000.0, -1000.0));
        FieldRunner::new(field)
    }

    #[test]
    fn test_fixed_frames_count() {
        let mut frames = FixedFrames::new(3);
        assert_eq!(frames.remaining(), 3);
        let indices: Vec<u64> = std::iter::from_fn(|| frames.next_frame()).map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(frames.remaining(), 0);
        assert!(frames.next_frame().is_none());
    }

    #[test]
    fn test_fixed_frames_interval() {
        let mut frames = FixedFrames::with_interval(1, Duration::from_millis(20));
        assert_eq!(frames.next_frame().map(|f| f.elapsed), Some(Duration::from_millis(20)));
    }

    #[test]
    fn test_paced_frames_limit() {
        let mut frames = PacedFrames::new(1000.0).with_limit(2);
        assert!(frames.next_frame().is_some());
        assert!(frames.next_frame().is_some());
        assert!(frames.next_frame().is_none());
    }

    #[test]
    fn test_paced_frames_wait_for_interval() {
        let mut frames = PacedFrames::new(100.0).with_limit(1);
        let frame = frames.next_frame().expect("one frame");
        assert!(frame.elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_run_ticks_every_frame() {
        let mut runner = single_particle_runner();
        let mut surface = RecordingSurface::new();

        let summary = runner.run(&mut FixedFrames::new(4), &mut surface);

        assert_eq!(summary.frames, 4);
        assert_eq!(surface.clear_count(), 4);
        assert_eq!(runner.field().particles()[0].position.x, 51.0);
    }

    #[test]
    fn test_events_applied_before_tick() {
        let mut runner = single_particle_runner();
        let sender = runner.sender();
        sender.send(FieldEvent::Resized { width: 10.0, height: 10.0 }).unwrap();
        sender.send(FieldEvent::PointerMoved(Vec2::new(5.0, 5.0))).unwrap();

        let summary = runner.run(&mut FixedFrames::new(1), &mut RecordingSurface::new());

        assert_eq!(summary.events, 2);
        let field = runner.field();
        assert_eq!(field.pointer(), Vec2::new(5.0, 5.0));
        // Particle is outside the new 10x10 bounds, so the first tick flips it
        assert_eq!(field.particles()[0].velocity.x, -0.25);
    }

    #[test]
    fn test_events_from_another_thread() {
        let mut runner = single_particle_runner();
        let sender = runner.sender();
        std::thread::spawn(move || {
            sender.send(FieldEvent::PointerMoved(Vec2::new(1.0, 2.0))).unwrap();
        })
        .join()
        .unwrap();

        runner.run(&mut FixedFrames::new(1), &mut RecordingSurface::new());
        assert_eq!(runner.field().pointer(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_stop_before_run() {
        let mut runner = single_particle_runner();
        runner.stop_handle().stop();

        let summary = runner.run(&mut FixedFrames::new(10), &mut RecordingSurface::new());
        assert_eq!(summary.frames, 0);
    }

    /// Frame source that stops the runner after a number of frames
    struct StopAfter {
        inner: FixedFrames,
        stop: StopHandle,
        after: u64,
    }

    impl FrameSource for StopAfter {
        fn next_frame(&mut self) -> Option<Frame> {
            let frame = self.inner.next_frame()?;
            if frame.index + 1 == self.after {
                self.stop.stop();
            }
            Some(frame)
        }
    }

    #[test]
    fn test_stop_mid_run() {
        let mut runner = single_particle_runner();
        let mut frames = StopAfter {
            inner: FixedFrames::new(100),
            stop: runner.stop_handle(),
            after: 3,
        };

        let summary = runner.run(&mut frames, &mut RecordingSurface::new());
        assert_eq!(summary.frames, 3);
    }

    #[test]
    fn test_into_field() {
        let runner = single_particle_runner();
        assert_eq!(runner.into_field().particle_count(), 1);
    }
}
