//! Gallery image domain entity

use serde::{Deserialize, Serialize};

/// EXIF metadata displayed alongside a gallery image. Every field is optional;
/// rows synced before the EXIF batch job ran have none of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifInfo {
    pub camera: Option<String>,
    pub lens: Option<String>,
    /// e.g. "f/2.8"
    pub aperture: Option<String>,
    /// e.g. "1/250s"
    pub shutter_speed: Option<String>,
    pub iso: Option<String>,
    /// e.g. "35mm"
    pub focal_length: Option<String>,
}

impl ExifInfo {
    pub fn is_empty(&self) -> bool {
        self.camera.is_none()
            && self.lens.is_none()
            && self.aperture.is_none()
            && self.shutter_speed.is_none()
            && self.iso.is_none()
            && self.focal_length.is_none()
    }

    /// One-line caption, e.g. "Fujifilm X-T4 · 35mm · f/8 · 1/125s · ISO 200"
    pub fn caption(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(camera) = &self.camera {
            parts.push(camera.clone());
        }
        if let Some(lens) = &self.lens {
            parts.push(lens.clone());
        }
        if let Some(focal_length) = &self.focal_length {
            parts.push(focal_length.clone());
        }
        if let Some(aperture) = &self.aperture {
            parts.push(aperture.clone());
        }
        if let Some(shutter_speed) = &self.shutter_speed {
            parts.push(shutter_speed.clone());
        }
        if let Some(iso) = &self.iso {
            parts.push(format!("ISO {iso}"));
        }
        parts.join(" · ")
    }
}

/// A gallery image row from the CMS
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    /// Image URL; rows without one are dropped during normalization
    pub src: String,
    pub alt: String,
    pub name: String,
    /// Capture or publication date, YYYY-MM-DD
    pub date: String,
    pub place: String,
    pub category: String,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif: Option<ExifInfo>,
}
