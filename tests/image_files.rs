use eframe_sketch::file_handler::{crop_capture, insert_image, open_image, save_capture};
use eframe_sketch::{RecordingSurface, RenderCommand, SketchError};
use egui::{Color32, ColorImage, Rect, pos2, vec2};
use image::{Rgba, RgbaImage};

fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 255, 255]))
        .save(&path)
        .expect("write test image");
    path
}

#[test]
fn test_open_replaces_contents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_png(dir.path(), "photo.png", 30, 20);
    let mut surface = RecordingSurface::new();

    open_image(&path, &mut surface).expect("open");

    assert_eq!(surface.commands.len(), 2);
    assert_eq!(surface.commands[0], RenderCommand::ClearAll);
    match &surface.commands[1] {
        RenderCommand::PlaceImage { pos, image } => {
            assert_eq!(*pos, pos2(0.0, 0.0));
            assert_eq!(image.size, [30, 20]);
            assert_eq!(image.pixels[0], Color32::from_rgb(0, 0, 255));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_insert_scales_to_canvas() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_png(dir.path(), "wide.png", 400, 100);
    let mut surface = RecordingSurface::new();

    insert_image(&path, &mut surface, vec2(200.0, 200.0)).expect("insert");

    assert_eq!(surface.commands.len(), 1);
    match &surface.commands[0] {
        RenderCommand::PlaceImage { image, .. } => assert_eq!(image.size, [200, 50]),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut surface = RecordingSurface::new();

    let err = open_image(&dir.path().join("absent.png"), &mut surface).unwrap_err();
    assert!(matches!(err, SketchError::Io { .. }));
    assert!(surface.commands.is_empty());
}

#[test]
fn test_capture_saved_as_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("drawing.png");

    let mut screenshot = ColorImage::new([100, 80], Color32::WHITE);
    screenshot[(20, 10)] = Color32::RED;
    let canvas_rect = Rect::from_min_size(pos2(20.0, 10.0), vec2(50.0, 40.0));

    let captured = crop_capture(&screenshot, canvas_rect, 1.0).expect("crop");
    save_capture(&captured, &path).expect("save");

    let reloaded = image::open(&path).expect("reload").to_rgba8();
    assert_eq!(reloaded.dimensions(), (50, 40));
    assert_eq!(reloaded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(reloaded.get_pixel(1, 1).0, [255, 255, 255, 255]);
}

#[test]
fn test_capture_saved_as_jpeg() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("drawing.jpg");
    let screenshot = ColorImage::new([16, 16], Color32::WHITE);

    let captured = crop_capture(&screenshot, Rect::from_min_size(pos2(0.0, 0.0), vec2(16.0, 16.0)), 1.0)
        .expect("crop");
    save_capture(&captured, &path).expect("save jpeg");
    assert!(path.exists());
}
