// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Rendering
//!
//! Renders QR text as a PNG (black on white), a PNG data URL, or a block
//! string for terminals.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::render::unicode::Dense1x2;
use qrcode::QrCode;
use thiserror::Error;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Smallest rendered edge in pixels.
const MIN_IMAGE_SIZE: u32 = 256;

/// Errors that can occur while rendering a QR code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("Image encoding failed: {0}")]
    Image(String),
}

fn encode(data: &str) -> Result<QrCode, RenderError> {
    QrCode::new(data.as_bytes()).map_err(|e| RenderError::Encode(e.to_string()))
}

/// Renders `data` as PNG bytes.
pub fn to_png(data: &str) -> Result<Vec<u8>, RenderError> {
    let code = encode(data)?;
    let image = code
        .render::<Luma<u8>>()
        .dark_color(Luma([0x00]))
        .light_color(Luma([0xFF]))
        .min_dimensions(MIN_IMAGE_SIZE, MIN_IMAGE_SIZE)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    Ok(png)
}

/// Renders `data` as a `data:image/png;base64,...` URL.
pub fn to_data_url(data: &str) -> Result<String, RenderError> {
    let png = to_png(data)?;
    Ok(format!("{DATA_URL_PREFIX}{}", BASE64.encode(png)))
}

/// Renders `data` with half-height block characters.
///
/// Colors are inverted so the code scans on dark terminal backgrounds.
pub fn to_terminal_string(data: &str) -> Result<String, RenderError> {
    let code = encode(data)?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .build())
}
