// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! This module provides command-line functionality for:
//! - Decoding barcodes in an image file
//! - Listing available capture devices

use snapscan::backends::camera::{CameraFrame, enumerate_devices};
use snapscan::errors::{AppError, ScanError};
use snapscan::scanner::Scanner;
use std::path::Path;

/// Decode barcodes in an image file and print the first payload.
///
/// Exits with status 1 when nothing decoded, so scripts can branch on it.
pub fn scan_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let img = image::open(path)
        .map_err(|e| AppError::from(ScanError::UnreadableImage(e.to_string())))?;

    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let frame = CameraFrame::from_rgba(width, height, rgba.into_raw());

    match Scanner::new().scan_blocking(&frame) {
        Some(payload) => {
            println!("{}", payload);
            Ok(())
        }
        None => {
            eprintln!("No barcode found");
            std::process::exit(1);
        }
    }
}

/// List all available capture devices
pub fn list_devices() -> Result<(), Box<dyn std::error::Error>> {
    let devices = enumerate_devices();

    if devices.is_empty() {
        println!("No capture devices found.");
        return Ok(());
    }

    println!("Available capture devices:");
    println!();
    for (index, device) in devices.iter().enumerate() {
        println!("  [{}] {} ({})", index, device.name, device.path);
    }

    Ok(())
}
