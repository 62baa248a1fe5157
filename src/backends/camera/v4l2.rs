// SPDX-License-Identifier: GPL-3.0-only

//! V4L2 device enumeration and one-shot still capture
//!
//! Capture negotiates MJPG first (cheap to transport, decoded with the
//! `image` crate) and falls back to YUYV with a software conversion.
//! The sensor gets a short warm-up so auto-exposure settles; the next
//! frame after the warm-up window is the one returned.

use crate::backends::camera::types::{CameraDevice, CameraFrame};
use crate::constants::capture::{BUFFER_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH, TIMEOUT, WARMUP};
use crate::errors::CaptureError;
use std::time::Instant;
use tracing::{debug, info, warn};
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

/// Enumerate V4L2 capture devices.
///
/// Scans /dev/video* and keeps nodes that advertise the video-capture
/// capability. Devices that cannot be opened (permissions, in use by
/// another process in exclusive mode) are skipped quietly.
pub fn enumerate_devices() -> Vec<CameraDevice> {
    let mut devices = Vec::new();

    let entries: Vec<_> = std::fs::read_dir("/dev")
        .into_iter()
        .flatten()
        .flatten()
        .filter(|e| {
            e.path()
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("video"))
                .unwrap_or(false)
        })
        .collect();

    for entry in entries {
        let path = entry.path();
        let path_str = path.to_string_lossy().to_string();

        let Ok(dev) = Device::with_path(&path) else {
            continue;
        };

        let Ok(caps) = dev.query_caps() else {
            continue;
        };

        if !caps
            .capabilities
            .contains(v4l::capability::Flags::VIDEO_CAPTURE)
        {
            continue;
        }

        devices.push(CameraDevice {
            name: caps.card.clone(),
            path: path_str,
        });
    }

    // /dev scan order is not stable; sort for deterministic selection
    devices.sort_by(|a, b| a.path.cmp(&b.path));

    info!(count = devices.len(), "Enumerated capture devices");
    devices
}

/// Capture one still frame.
///
/// `preferred` names the device path to use when it is still present;
/// otherwise the first enumerated device is used.
pub fn capture_still(preferred: Option<&str>) -> Result<CameraFrame, CaptureError> {
    let devices = enumerate_devices();
    if devices.is_empty() {
        return Err(CaptureError::NoDeviceFound);
    }

    let device = preferred
        .and_then(|path| devices.iter().find(|d| d.path == path))
        .unwrap_or(&devices[0]);

    info!(name = %device.name, path = %device.path, "Capturing still frame");
    capture_from_path(&device.path)
}

fn capture_from_path(path: &str) -> Result<CameraFrame, CaptureError> {
    let dev = Device::with_path(path)?;
    let format = negotiate_format(&dev)?;

    debug!(
        width = format.width,
        height = format.height,
        fourcc = %format.fourcc,
        "Negotiated capture format"
    );

    let mut stream = Stream::with_buffers(&dev, Type::VideoCapture, BUFFER_COUNT)
        .map_err(|e| CaptureError::OpenFailed(e.to_string()))?;

    // Warm-up: keep replacing the frame until the warm-up window has
    // passed, then use the next good one
    let start = Instant::now();
    let mut raw: Option<Vec<u8>> = None;

    while start.elapsed() < TIMEOUT {
        match stream.next() {
            Ok((buf, meta)) => {
                let used = meta.bytesused as usize;
                let len = if used > 0 { used.min(buf.len()) } else { buf.len() };
                raw = Some(buf[..len].to_vec());

                if start.elapsed() > WARMUP {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "Capture stream error");
                return Err(CaptureError::OpenFailed(e.to_string()));
            }
        }
    }

    let raw = raw.ok_or(CaptureError::Timeout)?;
    convert_frame(&raw, &format)
}

/// Try MJPG first, then YUYV
fn negotiate_format(dev: &Device) -> Result<Format, CaptureError> {
    for fourcc in [b"MJPG", b"YUYV"] {
        let requested = Format::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, FourCC::new(fourcc));
        match dev.set_format(&requested) {
            Ok(actual) if actual.fourcc == FourCC::new(fourcc) => return Ok(actual),
            Ok(_) => continue,
            Err(e) => {
                debug!(fourcc = %FourCC::new(fourcc), error = %e, "Format rejected");
            }
        }
    }

    Err(CaptureError::UnsupportedFormat(
        "device offers neither MJPG nor YUYV".to_string(),
    ))
}

/// Convert the raw buffer to an RGBA frame
fn convert_frame(raw: &[u8], format: &Format) -> Result<CameraFrame, CaptureError> {
    match &format.fourcc.repr {
        b"MJPG" => {
            let img = image::load_from_memory(raw)
                .map_err(|e| CaptureError::ConversionFailed(e.to_string()))?;
            let rgba = img.to_rgba8();
            let (width, height) = (rgba.width(), rgba.height());
            Ok(CameraFrame::from_rgba(width, height, rgba.into_raw()))
        }
        b"YUYV" => {
            let stride = if format.stride > 0 {
                format.stride as usize
            } else {
                format.width as usize * 2
            };
            let rgba = yuyv_to_rgba(raw, format.width, format.height, stride);
            Ok(CameraFrame::from_rgba(format.width, format.height, rgba))
        }
        other => Err(CaptureError::ConversionFailed(format!(
            "unexpected fourcc {:?}",
            other
        ))),
    }
}

/// Convert YUYV (YUV 4:2:2) to RGBA
///
/// YUYV format: Y0 U Y1 V - each 4-byte group encodes 2 pixels.
/// Uses BT.601 coefficients for YUV to RGB conversion.
fn yuyv_to_rgba(data: &[u8], width: u32, height: u32, stride: usize) -> Vec<u8> {
    let width = width as usize;
    let height = height as usize;
    let mut rgba = Vec::with_capacity(width * height * 4);

    for row in 0..height {
        let row_start = row * stride;
        let row_end = (row_start + width * 2).min(data.len());
        let row_data = &data[row_start.min(data.len())..row_end];
        let mut pixels_in_row = 0;

        for chunk in row_data.chunks_exact(4) {
            let y0 = chunk[0] as f32;
            let u = chunk[1] as f32 - 128.0;
            let y1 = chunk[2] as f32;
            let v = chunk[3] as f32 - 128.0;

            for y in [y0, y1] {
                if pixels_in_row >= width {
                    break;
                }
                let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
                let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
                let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;

                rgba.push(r);
                rgba.push(g);
                rgba.push(b);
                rgba.push(255);
                pixels_in_row += 1;
            }
        }

        // Short row (truncated buffer): pad with black
        while pixels_in_row < width {
            rgba.extend_from_slice(&[0, 0, 0, 255]);
            pixels_in_row += 1;
        }
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yuyv_to_rgba_gray_values() {
        // Two pixels, both Y=128 with neutral chroma -> mid gray
        let data = vec![128u8, 128, 128, 128];
        let rgba = yuyv_to_rgba(&data, 2, 1, 4);

        assert_eq!(rgba.len(), 8);
        for pixel in rgba.chunks_exact(4) {
            assert_eq!(pixel[3], 255);
            // Neutral chroma: all channels equal the luma
            assert_eq!(pixel[0], 128);
            assert_eq!(pixel[1], 128);
            assert_eq!(pixel[2], 128);
        }
    }

    #[test]
    fn test_yuyv_to_rgba_respects_stride() {
        // 2x2 frame with 2 padding bytes per row (stride 6)
        let data = vec![
            255u8, 128, 255, 128, 0, 0, // row 0 + padding
            0, 128, 0, 128, 0, 0, // row 1 + padding
        ];
        let rgba = yuyv_to_rgba(&data, 2, 2, 6);

        assert_eq!(rgba.len(), 16);
        assert_eq!(rgba[0], 255); // row 0 is white
        assert_eq!(rgba[8], 0); // row 1 is black
    }

    #[test]
    fn test_yuyv_to_rgba_pads_short_buffer() {
        // Buffer covers only the first of two rows
        let data = vec![128u8, 128, 128, 128];
        let rgba = yuyv_to_rgba(&data, 2, 2, 4);

        assert_eq!(rgba.len(), 16);
        // Second row padded with opaque black
        assert_eq!(&rgba[8..12], &[0, 0, 0, 255]);
    }
}
