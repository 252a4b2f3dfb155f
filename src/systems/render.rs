//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The shape batch the field draws into
//! - Frame submission

use std::sync::Arc;
use winit::window::Window;
use pfield_render::{ContextError, RenderContext, ShapeBatch, ShapePipeline};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// No GPU adapter can present to the window
    NoAdapter,
    /// Device creation failed
    Device(String),
    /// Surface creation or configuration failed
    Surface(String),
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::NoAdapter => write!(f, "No suitable GPU adapter"),
            RenderError::Device(msg) => write!(f, "Device error: {}", msg),
            RenderError::Surface(msg) => write!(f, "Surface error: {}", msg),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        match e {
            ContextError::NoAdapter => RenderError::NoAdapter,
            ContextError::Device(msg) => RenderError::Device(msg),
            ContextError::Surface(msg) => RenderError::Surface(msg),
            ContextError::UnsupportedSurface => {
                RenderError::Surface("no supported texture format".to_string())
            }
        }
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            e => RenderError::Other(format!("{:?}", e)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
    batch: ShapeBatch,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = ShapePipeline::new(&context.device, context.config.format);
        pipeline.update_viewport(&context.queue, context.config.width, context.config.height);

        Ok(Self {
            context,
            pipeline,
            batch: ShapeBatch::new(),
            clear_color: clear_color(render_config.background_color),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.update_viewport(
            &self.context.queue,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure a lost or outdated surface at its current size
    pub fn recover_surface(&mut self) {
        log::debug!("Reconfiguring surface");
        self.context.reconfigure();
    }

    /// Drawing surface for this frame's field render
    pub fn batch_mut(&mut self) -> &mut ShapeBatch {
        &mut self.batch
    }

    /// Upload the batch and present it
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        self.pipeline.upload(&self.context.device, &self.context.queue, self.batch.vertices());

        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

fn clear_color(bg: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: bg[0] as f64,
        g: bg[1] as f64,
        b: bg[2] as f64,
        a: bg[3] as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Lost), RenderError::SurfaceLost));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Outdated), RenderError::SurfaceLost));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::OutOfMemory), RenderError::OutOfMemory));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Timeout), RenderError::Other(_)));
    }

    #[test]
    fn test_context_error_mapping() {
        assert!(matches!(RenderError::from(ContextError::NoAdapter), RenderError::NoAdapter));
        assert!(matches!(
            RenderError::from(ContextError::UnsupportedSurface),
            RenderError::Surface(_)
        ));
    }

    #[test]
    fn test_clear_color() {
        let c = clear_color([0.5, 0.25, 0.0, 1.0]);
        assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 0.0, 1.0));
    }
}
