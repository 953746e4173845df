//! Error types for cardlet.
//!
//! Failures here are never surfaced to the viewer: a missing GPU degrades
//! the presentation to a headless state machine (no ambient layer), and the
//! app logs a warning instead of crashing.

use std::fmt;

/// Errors that can occur while setting up the rendering surface.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for the window.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create the GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(
                f,
                "No compatible GPU adapter found; running without the ambient layer"
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running a presentation.
#[derive(Debug)]
pub enum PresentationError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// No scenes were configured.
    NoScenes,
}

impl fmt::Display for PresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            PresentationError::Window(e) => write!(f, "Failed to create window: {}", e),
            PresentationError::NoScenes => {
                write!(f, "No scenes configured. Use .with_scenes() to add some.")
            }
        }
    }
}

impl std::error::Error for PresentationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresentationError::EventLoop(e) => Some(e),
            PresentationError::Window(e) => Some(e),
            PresentationError::NoScenes => None,
        }
    }
}

impl From<winit::error::EventLoopError> for PresentationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        PresentationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for PresentationError {
    fn from(e: winit::error::OsError) -> Self {
        PresentationError::Window(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_adapter_message_mentions_degrade() {
        let msg = GpuError::NoAdapter.to_string();
        assert!(msg.contains("without the ambient layer"));
    }

    #[test]
    fn test_no_scenes_display() {
        let msg = PresentationError::NoScenes.to_string();
        assert!(msg.contains("with_scenes"));
    }
}
