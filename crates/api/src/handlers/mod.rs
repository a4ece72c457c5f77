pub mod client;
pub mod contact;
pub mod dashboard;
pub mod project;
pub mod public;
pub mod subscriber;

use crate::forms::UploadedFile;
use crate::upload::ImageStore;

/// Store an optional uploaded image, yielding the path to record.
///
/// A missing or rejected file yields `Ok(None)`.
async fn store_image(
    images: &ImageStore,
    file: Option<&UploadedFile>,
) -> std::io::Result<Option<String>> {
    match file {
        Some(file) => images.save(file).await,
        None => Ok(None),
    }
}

/// Remove an image written for a request whose record change failed.
async fn discard_image(images: &ImageStore, path: Option<&str>) {
    if let Some(path) = path {
        images.remove(path).await;
    }
}

/// Remove a record's previous image after it was replaced by `new_image`.
async fn remove_replaced_image(images: &ImageStore, old: Option<&str>, new_image: Option<&str>) {
    if let (Some(old), Some(new_image)) = (old, new_image) {
        // Same-second re-upload of an identically named file overwrote the
        // old file in place; it is now the new image.
        if old != new_image {
            images.remove(old).await;
        }
    }
}
