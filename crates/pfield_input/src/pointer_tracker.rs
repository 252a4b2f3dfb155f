//! Pointer and surface-size tracking

use pfield_math::Vec2;
use pfield_sim::FieldEvent;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;

/// Follows the cursor and the window size, emitting field events
///
/// Until the first cursor event the pointer sits at the origin. Leaving the
/// window does not move it; the last reported position keeps repelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    position: Vec2,
    size: PhysicalSize<u32>,
    moves: u64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Last known surface size
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Number of cursor movements seen
    pub fn move_count(&self) -> u64 {
        self.moves
    }

    /// Record a cursor movement
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> FieldEvent {
        self.position = Vec2::new(position.x as f32, position.y as f32);
        self.moves += 1;
        FieldEvent::PointerMoved(self.position)
    }

    /// Record a surface resize
    ///
    /// Zero-sized windows (minimised) keep the previous size and emit nothing.
    pub fn resized(&mut self, size: PhysicalSize<u32>) -> Option<FieldEvent> {
        if size.width == 0 || size.height == 0 {
            return None;
        }
        if size != self.size {
            log::trace!("Pointer tracker surface {}x{}", size.width, size.height);
        }
        self.size = size;
        Some(FieldEvent::Resized {
            width: size.width as f32,
            height: size.height as f32,
        })
    }

    /// Translate a window event, if it concerns the field
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<FieldEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::Resized(size) => self.resized(*size),
            _ => None,
        }
    }
}
