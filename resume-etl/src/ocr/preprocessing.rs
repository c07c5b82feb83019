use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::config::OcrConfig;
use crate::error::{EtlError, Result};

/// Prepare encoded image bytes for the OCR engine.
///
/// Validates dimensions against the configured limits, downscales oversized
/// images while keeping aspect ratio, converts to grayscale, strips any alpha
/// channel, and stretches contrast. Returns PNG bytes.
pub fn preprocess_image(bytes: &[u8], config: &OcrConfig) -> Result<Vec<u8>> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EtlError::Processing(format!("Failed to read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| EtlError::Processing(format!("Failed to decode image: {e}")))?;

    let (width, height) = img.dimensions();
    if width < config.min_image_dimension || height < config.min_image_dimension {
        return Err(EtlError::Processing(format!(
            "Image too small: {}x{}, minimum {}x{}",
            width, height, config.min_image_dimension, config.min_image_dimension
        )));
    }

    let img = resize_if_needed(img, config.max_image_dimension);
    let img = img.grayscale();
    let img = remove_alpha(img);
    let img = enhance_contrast(img);

    let mut output = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| EtlError::Processing(format!("Failed to encode image: {e}")))?;

    Ok(output)
}

/// Downscale to `max_dim` on the longest side, preserving aspect ratio.
fn resize_if_needed(img: DynamicImage, max_dim: u32) -> DynamicImage {
    let (width, height) = img.dimensions();

    if width <= max_dim && height <= max_dim {
        return img;
    }

    let ratio = if width > height {
        max_dim as f32 / width as f32
    } else {
        max_dim as f32 / height as f32
    };

    let new_width = (width as f32 * ratio) as u32;
    let new_height = (height as f32 * ratio) as u32;

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}

/// Drop the alpha channel; Tesseract wants plain luma or RGB input.
fn remove_alpha(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => {
            DynamicImage::ImageRgb8(image::RgbImage::from_fn(
                rgba.width(),
                rgba.height(),
                |x, y| {
                    let pixel = rgba.get_pixel(x, y);
                    image::Rgb([pixel[0], pixel[1], pixel[2]])
                },
            ))
        }
        DynamicImage::ImageLumaA8(luma_a) => {
            DynamicImage::ImageLuma8(image::GrayImage::from_fn(
                luma_a.width(),
                luma_a.height(),
                |x, y| {
                    let pixel = luma_a.get_pixel(x, y);
                    image::Luma([pixel[0]])
                },
            ))
        }
        _ => img,
    }
}

/// Histogram-stretch contrast on the grayscale image.
fn enhance_contrast(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(gray) => {
            DynamicImage::ImageLuma8(enhance_grayscale_contrast(gray))
        }
        DynamicImage::ImageRgb8(rgb) => {
            let gray = DynamicImage::ImageRgb8(rgb).to_luma8();
            DynamicImage::ImageLuma8(enhance_grayscale_contrast(gray))
        }
        _ => img,
    }
}

/// Map the darkest pixel to 0 and the lightest to 255, scaling linearly.
/// Flat images are returned unchanged.
fn enhance_grayscale_contrast(gray: image::GrayImage) -> image::GrayImage {
    let mut min_val = 255u8;
    let mut max_val = 0u8;

    for pixel in gray.pixels() {
        let val = pixel[0];
        if val < min_val {
            min_val = val;
        }
        if val > max_val {
            max_val = val;
        }
    }

    if max_val <= min_val {
        return gray;
    }

    let range = (max_val - min_val) as f32;
    image::GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let pixel = gray.get_pixel(x, y);
        let normalized = (pixel[0] - min_val) as f32 / range;
        image::Luma([(normalized * 255.0) as u8])
    })
}
