use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

// --- Helper: Candidate files for one card, best first ---
// Card N (0-based) is drawn from `NN@2x.png`, falling back to `NN.png`.
pub fn card_image_candidates(dir: &Path, index: usize) -> [PathBuf; 2] {
    let stem = format!("{:02}", index + 1);
    [
        dir.join(format!("{}@2x.png", stem)),
        dir.join(format!("{}.png", stem)),
    ]
}

// --- Load every card; missing or broken images become placeholders (None) ---
pub fn load_card_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    count: usize,
) -> Vec<Option<Texture2D>> {
    (0..count)
        .map(|index| {
            for path in card_image_candidates(dir, index) {
                if !path.is_file() {
                    continue;
                }
                match load_texture_with_exif_rotation(rl, thread, &path) {
                    Ok(texture) => {
                        debug!("Card {} loaded from {:?}", index + 1, path);
                        return Some(texture);
                    }
                    Err(e) => warn!("Error processing image {:?}: {}", path, e),
                }
            }
            warn!("No image for card {} in {:?}, drawing placeholder", index + 1, dir);
            None
        })
        .collect()
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, String> {
    let file_bytes = fs::read(image_path)
        .map_err(|e| format!("Failed to read file {:?}: {}", image_path, e))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // PNG can carry an eXIf chunk too; absence is the normal case
    let orientation = match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(_) => 1,
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| format!("Failed to load image data for {:?}: {}", image_path, e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| format!("Failed to create texture for {:?}: {}", image_path, e))?;

    Ok(texture)
}
