use std::path::PathBuf;

use crate::config::{DEFAULT_SAVE_NAME, IMAGE_EXTENSIONS};
use crate::file_handler::with_default_extension;

/// Ask for an image to open or insert. `None` when the user cancels.
pub fn pick_image_file(title: &str) -> Option<PathBuf> {
    let path = rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file();
    if path.is_none() {
        log::debug!("{} dialog cancelled", title);
    }
    path
}

/// Ask where to save the canvas. Paths without an extension get `.png`.
pub fn pick_save_path() -> Option<PathBuf> {
    let path = rfd::FileDialog::new()
        .set_title("Save Image")
        .set_file_name(DEFAULT_SAVE_NAME)
        .add_filter("PNG Image", &["png"])
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .save_file();
    match path {
        Some(path) => Some(with_default_extension(path)),
        None => {
            log::debug!("Save dialog cancelled");
            None
        }
    }
}
