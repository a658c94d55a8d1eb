use crate::{log_debug, App, PhotoPreviewState};
use ratatui_image::picker::Picker;
use std::path::PathBuf;

/// Photos larger than this are not decoded (50MB)
const MAX_PHOTO_SIZE: u64 = 50 * 1024 * 1024;

/// Photos are pre-downscaled so no dimension exceeds this before being
/// handed to the terminal graphics protocol
const MAX_PHOTO_DIMENSION: u32 = 1200;

impl App {
    /// Start decoding an item's photo in a background task.
    ///
    /// Results arrive on the preview channel keyed by photo path, so a
    /// decoded photo is reused across repeated detail visits.
    pub fn request_photo_preview(&mut self, item_id: &str) {
        let Some(item) = self.model.catalog.item_by_id(item_id) else {
            return;
        };
        let Some(path) = item.photo_path.clone() else {
            return;
        };
        if self.photo_states.contains_key(&path) {
            return; // Already loading or loaded
        }
        let Some(picker) = self.image_picker.clone() else {
            return; // Preview disabled
        };

        self.photo_states
            .insert(path.clone(), PhotoPreviewState::Loading);

        let tx = self.preview_tx.clone();
        tokio::spawn(async move {
            let state = match decode_photo(PathBuf::from(&path), picker).await {
                Ok(protocol) => PhotoPreviewState::Ready { protocol },
                Err(reason) => {
                    log_debug(&format!("Photo decode failed for {}: {}", path, reason));
                    PhotoPreviewState::Failed { reason }
                }
            };
            let _ = tx.send((path, state));
        });
    }
}

async fn decode_photo(
    path: PathBuf,
    picker: Picker,
) -> Result<ratatui_image::protocol::StatefulProtocol, String> {
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| format!("Cannot read photo: {}", e))?;
    if metadata.len() > MAX_PHOTO_SIZE {
        return Err(format!(
            "Photo too large ({}MB)",
            metadata.len() / (1024 * 1024)
        ));
    }

    // Decode and downscale off the async runtime
    let img = tokio::task::spawn_blocking(move || {
        let img = image::open(&path).map_err(|e| format!("Cannot decode photo: {}", e))?;
        let (w, h) = (img.width(), img.height());
        if w > MAX_PHOTO_DIMENSION || h > MAX_PHOTO_DIMENSION {
            Ok::<_, String>(img.resize(
                MAX_PHOTO_DIMENSION,
                MAX_PHOTO_DIMENSION,
                image::imageops::FilterType::Triangle,
            ))
        } else {
            Ok(img)
        }
    })
    .await
    .map_err(|e| format!("Decode task failed: {}", e))??;

    Ok(picker.new_resize_protocol(img))
}
