//! EXIF extraction
//!
//! Reads camera metadata from image files and shapes it the way the gallery
//! database stores it (Camera, Lens, Aperture, ShutterSpeed, ISO,
//! FocalLength as text columns).

use std::path::Path;

use anyhow::{Context, Result};
use exif::{Field, In, Reader, Tag, Value};
use serde_json::{json, Value as JsonValue};

use crate::client::rich_text_value;

#[derive(Debug, Default, Clone)]
pub struct ExifData {
    pub camera: Option<String>,
    pub lens: Option<String>,
    pub aperture: Option<String>,
    pub shutter_speed: Option<String>,
    pub iso: Option<String>,
    pub focal_length: Option<String>,
}

impl ExifData {
    pub fn is_empty(&self) -> bool {
        self.camera.is_none()
            && self.lens.is_none()
            && self.aperture.is_none()
            && self.shutter_speed.is_none()
            && self.iso.is_none()
            && self.focal_length.is_none()
    }

    /// Property patch for a gallery row, covering only the fields present.
    pub fn to_properties(&self) -> JsonValue {
        let mut properties = json!({});
        let fields = [
            ("Camera", &self.camera),
            ("Lens", &self.lens),
            ("Aperture", &self.aperture),
            ("ShutterSpeed", &self.shutter_speed),
            ("ISO", &self.iso),
            ("FocalLength", &self.focal_length),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                properties[key] = rich_text_value(value);
            }
        }
        properties
    }
}

/// Read EXIF from an image file. Files without EXIF yield an empty record
/// rather than an error; unreadable files fail.
pub fn read_exif(path: &Path) -> Result<ExifData> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = std::io::BufReader::new(&file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(ExifData::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to parse EXIF in {}", path.display()))
        }
    };

    let field = |tag| exif.get_field(tag, In::PRIMARY);

    Ok(ExifData {
        camera: camera_name(
            field(Tag::Make).and_then(ascii),
            field(Tag::Model).and_then(ascii),
        ),
        lens: field(Tag::LensModel).and_then(ascii),
        aperture: field(Tag::FNumber).and_then(rational).map(format_aperture),
        shutter_speed: field(Tag::ExposureTime)
            .and_then(rational)
            .map(format_shutter),
        iso: field(Tag::PhotographicSensitivity)
            .and_then(integer)
            .map(|v| v.to_string()),
        focal_length: field(Tag::FocalLength)
            .and_then(rational)
            .map(format_focal_length),
    })
}

fn ascii(field: &Field) -> Option<String> {
    if let Value::Ascii(segments) = &field.value {
        let text = segments
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())?;
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    } else {
        None
    }
}

fn rational(field: &Field) -> Option<f64> {
    if let Value::Rational(values) = &field.value {
        values.first().map(|r| r.to_f64())
    } else {
        None
    }
}

fn integer(field: &Field) -> Option<u32> {
    field.value.get_uint(0)
}

/// "Make Model", dropping the make when the model already carries it
/// (e.g. "NIKON CORPORATION" + "NIKON D850").
fn camera_name(make: Option<String>, model: Option<String>) -> Option<String> {
    match (make, model) {
        (Some(make), Some(model)) => {
            let brand = make.split_whitespace().next().unwrap_or(&make);
            if model.to_lowercase().contains(&brand.to_lowercase()) {
                Some(model)
            } else {
                Some(format!("{} {}", brand, model))
            }
        }
        (None, Some(model)) => Some(model),
        (Some(make), None) => Some(make),
        (None, None) => None,
    }
}

fn format_aperture(f_number: f64) -> String {
    if (f_number - f_number.round()).abs() < 0.05 {
        format!("f/{}", f_number.round() as i64)
    } else {
        format!("f/{:.1}", f_number)
    }
}

fn format_shutter(seconds: f64) -> String {
    if seconds <= 0.0 {
        return "0s".to_string();
    }
    if seconds < 1.0 {
        format!("1/{}s", (1.0 / seconds).round() as i64)
    } else if (seconds - seconds.round()).abs() < 0.005 {
        format!("{}s", seconds.round() as i64)
    } else {
        format!("{:.1}s", seconds)
    }
}

fn format_focal_length(millimeters: f64) -> String {
    format!("{}mm", millimeters.round() as i64)
}

/// Loose key for matching an image filename to a gallery row name:
/// lowercase, alphanumerics only.
pub fn match_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Whether a file stem plausibly refers to a row name (either contains the
/// other once both are reduced to match keys).
pub fn names_match(file_stem: &str, row_name: &str) -> bool {
    let file_key = match_key(file_stem);
    let row_key = match_key(row_name);
    if file_key.is_empty() || row_key.is_empty() {
        return false;
    }
    file_key.contains(&row_key) || row_key.contains(&file_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== formatting =====

    #[test]
    fn aperture_drops_trailing_zero() {
        assert_eq!(format_aperture(8.0), "f/8");
        assert_eq!(format_aperture(2.8), "f/2.8");
        assert_eq!(format_aperture(1.4), "f/1.4");
    }

    #[test]
    fn shutter_speed_formats_fractions_and_long_exposures() {
        assert_eq!(format_shutter(0.004), "1/250s");
        assert_eq!(format_shutter(0.5), "1/2s");
        assert_eq!(format_shutter(2.0), "2s");
        assert_eq!(format_shutter(2.5), "2.5s");
    }

    #[test]
    fn focal_length_rounds_to_whole_millimeters() {
        assert_eq!(format_focal_length(23.0), "23mm");
        assert_eq!(format_focal_length(34.6), "35mm");
    }

    #[test]
    fn camera_name_deduplicates_the_brand() {
        assert_eq!(
            camera_name(
                Some("NIKON CORPORATION".to_string()),
                Some("NIKON D850".to_string())
            )
            .as_deref(),
            Some("NIKON D850")
        );
        assert_eq!(
            camera_name(Some("FUJIFILM".to_string()), Some("X-T4".to_string())).as_deref(),
            Some("FUJIFILM X-T4")
        );
        assert_eq!(camera_name(None, None), None);
    }

    // ===== filename matching =====

    #[test]
    fn file_names_match_row_names_loosely() {
        assert!(names_match("concrete-dreams-final_v2", "Concrete Dreams"));
        assert!(names_match("tokyo geometry", "Tokyo Geometry"));
        assert!(!names_match("DSC01234", "Concrete Dreams"));
        assert!(!names_match("", "Concrete Dreams"));
    }

    #[test]
    fn empty_exif_patch_has_no_properties() {
        let data = ExifData::default();

        assert!(data.is_empty());
        assert_eq!(data.to_properties(), serde_json::json!({}));
    }

    #[test]
    fn patch_covers_only_present_fields() {
        let data = ExifData {
            camera: Some("FUJIFILM X-T4".to_string()),
            iso: Some("160".to_string()),
            ..ExifData::default()
        };

        let properties = data.to_properties();

        assert_eq!(
            properties["Camera"]["rich_text"][0]["text"]["content"],
            serde_json::json!("FUJIFILM X-T4")
        );
        assert!(properties.get("Lens").is_none());
    }
}
