//! Error types for plexus.
//!
//! The simulation core is infallible; failures only happen at the host
//! boundary (event loop, window, surface) and when capturing frames.

use std::fmt;

/// Errors that can occur while running the windowed host.
#[derive(Debug)]
pub enum HostError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// Failed to create the raster surface for the window.
    Surface(pixels::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            HostError::Window(e) => write!(f, "Failed to create window: {}", e),
            HostError::Surface(e) => write!(f, "Failed to create raster surface: {}", e),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::EventLoop(e) => Some(e),
            HostError::Window(e) => Some(e),
            HostError::Surface(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for HostError {
    fn from(e: winit::error::EventLoopError) -> Self {
        HostError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for HostError {
    fn from(e: winit::error::OsError) -> Self {
        HostError::Window(e)
    }
}

impl From<pixels::Error> for HostError {
    fn from(e: pixels::Error) -> Self {
        HostError::Surface(e)
    }
}

/// Errors that can occur when writing a frame to disk.
#[derive(Debug)]
pub enum CaptureError {
    /// The frame byte length does not match the stated dimensions.
    FrameSize { expected: usize, actual: usize },
    /// Failed to encode or write the image.
    Image(image::ImageError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::FrameSize { expected, actual } => write!(
                f,
                "Frame is {} bytes but the dimensions call for {}",
                actual, expected
            ),
            CaptureError::Image(e) => write!(f, "Failed to write image: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Image(e) => Some(e),
            CaptureError::FrameSize { .. } => None,
        }
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        CaptureError::Image(e)
    }
}
