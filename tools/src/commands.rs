//! Batch commands
//!
//! One-off maintenance operations against the content databases. Every
//! command supports `--dry-run`, which reports what would change without
//! writing anything.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::client::{plain_text, rich_text_value, NotionClient};
use crate::exif::{names_match, read_exif};
use crate::text::estimate_read_time;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "webp"];

fn page_name(page: &Value) -> Option<String> {
    plain_text(page, "Title").or_else(|| plain_text(page, "Name"))
}

fn page_id(page: &Value) -> Option<&str> {
    page["id"].as_str()
}

fn database_id_from_env(var: &str) -> Result<String> {
    std::env::var(var).with_context(|| format!("{} not set", var))
}

/// Walk a directory for image files, pairing each gallery row with a file
/// whose name resembles the row name, and push the file's EXIF into the row.
pub async fn sync_exif(client: &NotionClient, dir: &Path, dry_run: bool) -> Result<()> {
    let database_id = database_id_from_env("NOTION_GALLERY_DATABASE_ID")?;

    let images: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    tracing::info!("Found {} image files under {}", images.len(), dir.display());

    let pages = client.query_database(&database_id).await?;
    let mut updated = 0usize;
    let mut skipped = 0usize;

    for page in &pages {
        let Some(name) = page_name(page) else {
            skipped += 1;
            continue;
        };
        let Some(id) = page_id(page) else {
            skipped += 1;
            continue;
        };

        let matched = images.iter().find(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(|stem| names_match(stem, &name))
                .unwrap_or(false)
        });

        let Some(path) = matched else {
            tracing::debug!("No file matches row {:?}", name);
            skipped += 1;
            continue;
        };

        let exif = match read_exif(path) {
            Ok(exif) => exif,
            Err(e) => {
                tracing::warn!("Skipping {:?}: {:#}", name, e);
                skipped += 1;
                continue;
            }
        };
        if exif.is_empty() {
            tracing::warn!("{} carries no EXIF, skipping {:?}", path.display(), name);
            skipped += 1;
            continue;
        }

        if dry_run {
            tracing::info!("Would update {:?} from {}: {:?}", name, path.display(), exif);
        } else if let Err(e) = client.update_page(id, exif.to_properties()).await {
            tracing::warn!("Failed to update {:?}: {:#}", name, e);
            skipped += 1;
            continue;
        } else {
            tracing::info!("Updated {:?} from {}", name, path.display());
        }
        updated += 1;
    }

    tracing::info!("Done: {} updated, {} skipped", updated, skipped);
    Ok(())
}

/// Recompute every post's read time from its content column and rewrite the
/// stored value where it drifted.
pub async fn update_read_times(client: &NotionClient, dry_run: bool) -> Result<()> {
    let database_id = database_id_from_env("NOTION_POSTS_DATABASE_ID")?;
    let pages = client.query_database(&database_id).await?;

    let mut updated = 0usize;
    for page in &pages {
        let Some(id) = page_id(page) else { continue };
        let title = page_name(page).unwrap_or_else(|| "Untitled".to_string());

        let content = ["Content", "Body", "Description", "Text"]
            .iter()
            .find_map(|key| plain_text(page, key))
            .unwrap_or_default();
        let computed = estimate_read_time(&content);
        let stored = plain_text(page, "ReadTime");

        if stored.as_deref() == Some(computed.as_str()) {
            continue;
        }

        if dry_run {
            tracing::info!(
                "Would update {:?}: {:?} -> {:?}",
                title,
                stored.as_deref().unwrap_or("(none)"),
                computed
            );
        } else if let Err(e) = client
            .update_page(id, json!({ "ReadTime": rich_text_value(&computed) }))
            .await
        {
            tracing::warn!("Failed to update {:?}: {:#}", title, e);
            continue;
        } else {
            tracing::info!("Updated {:?} to {:?}", title, computed);
        }
        updated += 1;
    }

    tracing::info!("Done: {} of {} posts updated", updated, pages.len());
    Ok(())
}

/// Re-host CMS-hosted gallery images on Cloudinary and point the rows at the
/// stable URLs. Notion-hosted file links expire hourly; external links don't.
pub async fn migrate_images(client: &NotionClient, cloud: &str, dry_run: bool) -> Result<()> {
    let database_id = database_id_from_env("NOTION_GALLERY_DATABASE_ID")?;
    let api_key = std::env::var("CLOUDINARY_API_KEY").context("CLOUDINARY_API_KEY not set")?;
    let api_secret =
        std::env::var("CLOUDINARY_API_SECRET").context("CLOUDINARY_API_SECRET not set")?;

    let http = reqwest::Client::new();
    let pages = client.query_database(&database_id).await?;

    let mut migrated = 0usize;
    for page in &pages {
        let Some(id) = page_id(page) else { continue };
        let name = page_name(page).unwrap_or_else(|| id.to_string());

        // Only Notion-hosted files need moving; external links are already stable.
        let file = &page["properties"]["Image"]["files"][0];
        let Some(hosted_url) = file["file"]["url"].as_str() else {
            continue;
        };

        if dry_run {
            tracing::info!("Would migrate image for {:?}", name);
            migrated += 1;
            continue;
        }

        let public_id = crate::exif::match_key(&name);
        let stable_url = match upload_to_cloudinary(
            &http,
            cloud,
            &api_key,
            &api_secret,
            hosted_url,
            &public_id,
        )
        .await
        {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Upload failed for {:?}: {:#}", name, e);
                continue;
            }
        };

        let patch = json!({
            "Image": {
                "files": [{
                    "type": "external",
                    "name": name,
                    "external": { "url": stable_url }
                }]
            }
        });
        if let Err(e) = client.update_page(id, patch).await {
            tracing::warn!("Failed to rewrite {:?}: {:#}", name, e);
            continue;
        }
        tracing::info!("Migrated image for {:?}", name);
        migrated += 1;
    }

    tracing::info!("Done: {} of {} rows migrated", migrated, pages.len());
    Ok(())
}

/// Signed upload. Cloudinary fetches the source URL itself, so the image
/// bytes never pass through this tool.
async fn upload_to_cloudinary(
    http: &reqwest::Client,
    cloud: &str,
    api_key: &str,
    api_secret: &str,
    source_url: &str,
    public_id: &str,
) -> Result<String> {
    let timestamp = chrono::Utc::now().timestamp().to_string();
    let params = [
        ("folder".to_string(), "framelight".to_string()),
        ("public_id".to_string(), public_id.to_string()),
        ("timestamp".to_string(), timestamp.clone()),
    ];
    let signature = sign_params(&params, api_secret);

    let mut form: Vec<(String, String)> = params.to_vec();
    form.push(("file".to_string(), source_url.to_string()));
    form.push(("api_key".to_string(), api_key.to_string()));
    form.push(("signature".to_string(), signature));
    form.push(("signature_algorithm".to_string(), "sha256".to_string()));

    let url = format!("https://api.cloudinary.com/v1_1/{}/image/upload", cloud);
    let response = http
        .post(&url)
        .form(&form)
        .send()
        .await
        .context("Cloudinary request failed")?;

    let status = response.status();
    let body: Value = response
        .json()
        .await
        .context("Failed to parse Cloudinary response")?;
    if !status.is_success() {
        anyhow::bail!("Cloudinary error ({}): {}", status, body);
    }

    body["secure_url"]
        .as_str()
        .map(String::from)
        .context("Cloudinary response missing secure_url")
}

/// SHA-256 over the sorted `key=value` pairs joined with `&`, with the API
/// secret appended.
fn sign_params(params: &[(String, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort();

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_deterministic_and_sorted() {
        let forward = [
            ("public_id".to_string(), "tokyo".to_string()),
            ("timestamp".to_string(), "1700000000".to_string()),
        ];
        let reversed = [
            ("timestamp".to_string(), "1700000000".to_string()),
            ("public_id".to_string(), "tokyo".to_string()),
        ];

        assert_eq!(sign_params(&forward, "s"), sign_params(&reversed, "s"));
        assert_ne!(sign_params(&forward, "s"), sign_params(&forward, "other"));
        assert_eq!(sign_params(&forward, "s").len(), 64);
    }
}
