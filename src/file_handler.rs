use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{ColorImage, Pos2, Rect, Vec2};
use image::{DynamicImage, RgbaImage};

use crate::command::RenderSurface;
use crate::config::{DEFAULT_SAVE_EXTENSION, IMAGE_EXTENSIONS};
use crate::error::{SketchError, SketchResult};

/// Check if a path names an image we can open, based on its extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Append the default extension when the chosen save path has none
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    }
}

fn decode(path: &Path) -> SketchResult<DynamicImage> {
    if !is_supported_image(path) {
        return Err(SketchError::UnsupportedFormat(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|err| SketchError::image(path, err))?;
    log::debug!("Decoded {}: {}x{}", path.display(), img.width(), img.height());
    Ok(img)
}

fn to_color_image(img: &DynamicImage) -> ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// Scale `img` down so it fits inside `max`, keeping its aspect ratio.
/// Images that already fit are returned untouched.
pub fn fit_within(img: DynamicImage, max: Vec2) -> DynamicImage {
    let (max_w, max_h) = (max.x.max(1.0) as u32, max.y.max(1.0) as u32);
    if img.width() <= max_w && img.height() <= max_h {
        img
    } else {
        img.resize(max_w, max_h, image::imageops::FilterType::Triangle)
    }
}

/// Replace the canvas contents with the image at `path`, placed at the origin
pub fn open_image(path: &Path, surface: &mut dyn RenderSurface) -> SketchResult<()> {
    let img = decode(path)?;
    surface.clear_all();
    surface.place_image(Pos2::ZERO, Arc::new(to_color_image(&img)));
    log::info!("Opened image {}", path.display());
    Ok(())
}

/// Place the image at `path` on top of the current drawing, scaled down to
/// fit a canvas of `canvas_size`.
pub fn insert_image(path: &Path, surface: &mut dyn RenderSurface, canvas_size: Vec2) -> SketchResult<()> {
    let img = fit_within(decode(path)?, canvas_size);
    surface.place_image(Pos2::ZERO, Arc::new(to_color_image(&img)));
    log::info!("Inserted image {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

/// Cut the canvas region out of a full-window screenshot.
pub fn crop_capture(screenshot: &ColorImage, canvas_rect: Rect, pixels_per_point: f32) -> SketchResult<RgbaImage> {
    let [shot_w, shot_h] = screenshot.size;
    let bounds = Rect::from_min_size(
        Pos2::ZERO,
        Vec2::new(shot_w as f32, shot_h as f32) / pixels_per_point,
    );
    let canvas_rect = canvas_rect.intersect(bounds);
    if !canvas_rect.is_positive() {
        return Err(SketchError::EmptyCapture);
    }
    let region = screenshot.region(&canvas_rect, Some(pixels_per_point));
    let [width, height] = region.size;
    if width == 0 || height == 0 {
        return Err(SketchError::EmptyCapture);
    }
    let raw: Vec<u8> = region.pixels.iter().flat_map(|pixel| pixel.to_array()).collect();
    RgbaImage::from_raw(width as u32, height as u32, raw).ok_or(SketchError::EmptyCapture)
}

/// Write a captured canvas to `path`; the format follows the extension.
pub fn save_capture(image: &RgbaImage, path: &Path) -> SketchResult<()> {
    let is_jpeg = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| ext == "jpg" || ext == "jpeg");
    let result = if is_jpeg {
        // JPEG has no alpha channel
        DynamicImage::ImageRgba8(image.clone()).to_rgb8().save(path)
    } else {
        image.save(path)
    };
    result.map_err(|err| SketchError::image(path, err))?;
    log::info!("Saved canvas to {} ({}x{})", path.display(), image.width(), image.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2, vec2};

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("b.JPG")));
        assert!(is_supported_image(Path::new("c.jpeg")));
        assert!(is_supported_image(Path::new("d.gif")));
        assert!(!is_supported_image(Path::new("e.bmp")));
        assert!(!is_supported_image(Path::new("noext")));
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(with_default_extension(PathBuf::from("out")), PathBuf::from("out.png"));
        assert_eq!(with_default_extension(PathBuf::from("out.jpg")), PathBuf::from("out.jpg"));
    }

    #[test]
    fn test_fit_within_keeps_aspect() {
        let img = DynamicImage::new_rgba8(400, 200);
        let fitted = fit_within(img, vec2(100.0, 100.0));
        assert_eq!((fitted.width(), fitted.height()), (100, 50));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        let img = DynamicImage::new_rgba8(10, 20);
        let fitted = fit_within(img, vec2(100.0, 100.0));
        assert_eq!((fitted.width(), fitted.height()), (10, 20));
    }

    #[test]
    fn test_crop_capture_respects_pixels_per_point() {
        let screenshot = ColorImage::new([200, 100], Color32::RED);
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(50.0, 20.0));
        let cropped = crop_capture(&screenshot, rect, 2.0).expect("crop");
        assert_eq!((cropped.width(), cropped.height()), (100, 40));
        assert_eq!(cropped.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_crop_capture_outside_screenshot() {
        let screenshot = ColorImage::new([20, 20], Color32::RED);
        let rect = Rect::from_min_size(pos2(50.0, 50.0), vec2(10.0, 10.0));
        assert!(matches!(crop_capture(&screenshot, rect, 1.0), Err(SketchError::EmptyCapture)));
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let mut surface = crate::command::RecordingSurface::new();
        let err = open_image(Path::new("notes.txt"), &mut surface).unwrap_err();
        assert!(matches!(err, SketchError::UnsupportedFormat(_)));
        assert!(surface.commands.is_empty());
    }
}
