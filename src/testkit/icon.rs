//! Icon source fakes.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use image::{ImageBuffer, ImageFormat, Rgba};

use crate::error::IconError;
use crate::port::IconSource;

/// Encode a solid `width`×`height` PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgba([200u8, 160, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode test png");
    out.into_inner()
}

/// Serves the same bytes for every URL and counts requests.
pub struct StaticIconSource {
    body: Vec<u8>,
    calls: Arc<AtomicUsize>,
}

impl StaticIconSource {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared request counter, readable after the source is boxed.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl IconSource for StaticIconSource {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, IconError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

/// Answers every request with `503 Service Unavailable`.
pub struct FailingIconSource {
    calls: Arc<AtomicUsize>,
}

impl FailingIconSource {
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl IconSource for FailingIconSource {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, IconError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(IconError::Status(503))
    }
}

pub fn failing_icon_source() -> FailingIconSource {
    FailingIconSource {
        calls: Arc::new(AtomicUsize::new(0)),
    }
}
