//! WGPU context management
//!
//! Owns the instance-derived device, queue and window surface for the field.

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};

/// Errors raised while bringing up the GPU context
#[derive(Debug)]
pub enum ContextError {
    /// No adapter can present to the window surface
    NoAdapter,
    /// The adapter refused to create a device
    Device(String),
    /// The window surface could not be created
    Surface(String),
    /// The surface reports no usable texture format
    UnsupportedSurface,
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextError::NoAdapter => write!(f, "No suitable GPU adapter found"),
            ContextError::Device(msg) => write!(f, "Failed to create device: {}", msg),
            ContextError::Surface(msg) => write!(f, "Failed to create surface: {}", msg),
            ContextError::UnsupportedSurface => write!(f, "Surface has no supported formats"),
        }
    }
}

impl std::error::Error for ContextError {}

/// Device, queue and configured surface for one window
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
}

impl RenderContext {
    /// Create a context presenting to `window`
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| ContextError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Particle Field Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| ContextError::Device(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = preferred_format(&caps.formats).ok_or(ContextError::UnsupportedSurface)?;

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log::debug!("Surface configured: {:?} {}x{}", format, config.width, config.height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigure the surface for a new window size
    ///
    /// Zero-sized windows (minimised) keep the previous configuration.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure with the current size, after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

/// Pick a surface format, preferring non-sRGB so colours blend like a 2D canvas
fn preferred_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat;

    #[test]
    fn test_prefers_linear_format() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(preferred_format(&formats), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn test_falls_back_to_first_format() {
        let formats = [TextureFormat::Rgba8UnormSrgb];
        assert_eq!(preferred_format(&formats), Some(TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn test_no_formats() {
        assert_eq!(preferred_format(&[]), None);
    }

    #[test]
    fn test_context_error_display() {
        assert_eq!(ContextError::NoAdapter.to_string(), "No suitable GPU adapter found");
        assert!(ContextError::Device("lost".into()).to_string().contains("lost"));
    }
}
