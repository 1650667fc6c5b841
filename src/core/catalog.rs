//! Option catalogs scanned from the asset directories.
//!
//! Two catalogs feed the form's pickers:
//! - lecturer images: `*.png` files whose stem encodes `id_name..._kind`
//! - pattern templates: `pattern*` directories carrying a `config.json`
//!   and a `base.png` preview
//!
//! Both scans skip unreadable or malformed entries with a log line and only
//! fail when the directory itself cannot be read.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::core::PickerOption;

/// Catalog scanning failures. Individual bad entries are skipped, not
/// reported here; only directory-level I/O surfaces as an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One lecturer image, parsed from its filename.
///
/// A stem like `01_Sato_Suzuki_solo` splits into the id (`01`), one or more
/// names (`Sato`, `Suzuki`) and a trailing kind (`solo`). The display label
/// joins the names with `" x "`.
#[derive(Debug, Clone, PartialEq)]
pub struct LecturerImage {
    pub id: String,
    pub names: Vec<String>,
    pub label: String,
    pub kind: String,
    pub filename: String,
    pub path: PathBuf,
}

impl LecturerImage {
    /// Parse a lecturer image from its path. Returns `None` when the stem
    /// has fewer than three `_`-separated parts.
    fn from_path(path: &Path) -> Option<Self> {
        let filename = path.file_name()?.to_str()?.to_string();
        let stem = path.file_stem()?.to_str()?;

        let parts: Vec<&str> = stem.split('_').collect();
        if parts.len() < 3 {
            return None;
        }

        let id = parts[0].to_string();
        let kind = parts[parts.len() - 1].to_string();
        let names: Vec<String> = parts[1..parts.len() - 1]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let label = names.join(" x ");

        Some(Self {
            id,
            names,
            label,
            kind,
            filename,
            path: path.to_path_buf(),
        })
    }

    /// Picker option for this image: the filename is the submitted value.
    pub fn to_option(&self) -> PickerOption {
        PickerOption::with_image(&self.filename, &self.label, &self.path)
    }
}

/// Scan the lecturer image directory, sorted by filename.
pub fn scan_lecturer_images(dir: &Path) -> Result<Vec<LecturerImage>, CatalogError> {
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !is_png(&path) {
            continue;
        }
        match LecturerImage::from_path(&path) {
            Some(image) => images.push(image),
            None => debug!("skipping lecturer image with unparseable name: {:?}", path),
        }
    }

    images.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(images)
}

/// `config.json` carried by each pattern template directory.
#[derive(Debug, Clone, Deserialize)]
struct TemplateConfig {
    name: Option<String>,
    #[serde(default)]
    description: String,
}

/// One pattern template directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternTemplate {
    /// Directory name, e.g. `pattern1`.
    pub dir_name: String,
    /// Pattern name from `config.json`, falling back to the directory name.
    /// This is the value the pattern picker submits.
    pub name: String,
    pub description: String,
    /// The template's `base.png` preview image.
    pub preview: PathBuf,
}

impl PatternTemplate {
    /// Picker option for this template: the pattern name is the value.
    pub fn to_option(&self) -> PickerOption {
        PickerOption::with_image(&self.name, &self.name, &self.preview)
    }
}

/// Scan the template directory for `pattern*` subdirectories, sorted by
/// directory name. Directories without a readable `config.json` are skipped.
pub fn scan_pattern_templates(dir: &Path) -> Result<Vec<PatternTemplate>, CatalogError> {
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut templates = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let dir_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if name.starts_with("pattern") => name.to_string(),
            _ => continue,
        };

        let config_path = path.join("config.json");
        let config = match fs::read_to_string(&config_path) {
            Ok(content) => match serde_json::from_str::<TemplateConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("skipping template {dir_name}: malformed config.json: {e}");
                    continue;
                }
            },
            Err(_) => {
                debug!("skipping template {dir_name}: no config.json");
                continue;
            }
        };

        templates.push(PatternTemplate {
            name: config.name.unwrap_or_else(|| dir_name.clone()),
            description: config.description,
            preview: path.join("base.png"),
            dir_name,
        });
    }

    templates.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(templates)
}

fn is_png(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("png"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecturer_image_parsing() {
        let image = LecturerImage::from_path(Path::new("/a/01_Sato_Suzuki_solo.png")).unwrap();

        assert_eq!(image.id, "01");
        assert_eq!(image.names, vec!["Sato", "Suzuki"]);
        assert_eq!(image.label, "Sato x Suzuki");
        assert_eq!(image.kind, "solo");
        assert_eq!(image.filename, "01_Sato_Suzuki_solo.png");
    }

    #[test]
    fn test_lecturer_image_with_short_stem_is_rejected() {
        assert!(LecturerImage::from_path(Path::new("/a/bad.png")).is_none());
        assert!(LecturerImage::from_path(Path::new("/a/01_only.png")).is_none());
    }

    #[test]
    fn test_scan_lecturer_images_skips_non_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("02_Tanaka_duo.png"), b"png").unwrap();
        std::fs::write(dir.path().join("01_Sato_Suzuki_solo.png"), b"png").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        std::fs::write(dir.path().join("broken.png"), b"png").unwrap();

        let images = scan_lecturer_images(dir.path()).unwrap();

        let filenames: Vec<&str> = images.iter().map(|i| i.filename.as_str()).collect();
        assert_eq!(
            filenames,
            vec!["01_Sato_Suzuki_solo.png", "02_Tanaka_duo.png"]
        );
        assert_eq!(images[1].label, "Tanaka");
    }

    #[test]
    fn test_scan_lecturer_images_missing_dir_is_an_error() {
        let result = scan_lecturer_images(Path::new("/nonexistent/lecturers"));
        assert!(matches!(result, Err(CatalogError::ReadDir { .. })));
    }

    #[test]
    fn test_scan_pattern_templates() {
        let dir = tempfile::tempdir().unwrap();

        let p1 = dir.path().join("pattern1");
        std::fs::create_dir(&p1).unwrap();
        std::fs::write(
            p1.join("config.json"),
            r#"{"name": "パターン1", "description": "two lecturers"}"#,
        )
        .unwrap();

        // No config.json: skipped.
        std::fs::create_dir(dir.path().join("pattern2")).unwrap();

        // Name missing: falls back to the directory name.
        let p3 = dir.path().join("pattern3");
        std::fs::create_dir(&p3).unwrap();
        std::fs::write(p3.join("config.json"), "{}").unwrap();

        // Not a pattern directory: ignored.
        std::fs::create_dir(dir.path().join("drafts")).unwrap();

        let templates = scan_pattern_templates(dir.path()).unwrap();

        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].dir_name, "pattern1");
        assert_eq!(templates[0].name, "パターン1");
        assert_eq!(templates[0].description, "two lecturers");
        assert_eq!(templates[0].preview, p1.join("base.png"));
        assert_eq!(templates[1].name, "pattern3");
    }

    #[test]
    fn test_template_option_uses_name_as_value() {
        let dir = tempfile::tempdir().unwrap();
        let p1 = dir.path().join("pattern1");
        std::fs::create_dir(&p1).unwrap();
        std::fs::write(p1.join("config.json"), r#"{"name": "パターン1"}"#).unwrap();

        let templates = scan_pattern_templates(dir.path()).unwrap();
        let option = templates[0].to_option();

        assert_eq!(option.value, "パターン1");
        assert_eq!(option.image.as_deref(), Some(p1.join("base.png").as_path()));
    }
}
