//! Site data export.
//!
//! Writes the content matrix to disk for the page renderer:
//! ```text
//! <output_dir>/
//! ├── manifest.json
//! ├── sitemap.xml
//! ├── gcse/
//! │   ├── biology.json          (content entry)
//! │   ├── biology.jsonld.json   (Course, BreadcrumbList, FAQPage)
//! │   └── biology.md            (preview, optional)
//! └── ...
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use curriculum_shared::{
    CURRENT_SCHEMA_VERSION, CurriculumError, ExportConfig, Result, SiteConfig,
};

use crate::jsonld::page_json_ld;
use crate::matrix::ContentMatrix;
use crate::related::related_courses;
use crate::render::render_markdown;
use crate::routes::page_path;

/// Metadata for a single exported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    pub sha256: String,
    pub size_bytes: usize,
}

/// The `manifest.json` written at the export root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    pub schema_version: u32,
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
    pub entry_count: usize,
    pub files: Vec<FileMeta>,
}

/// Output of a successful export.
#[derive(Debug)]
pub struct ExportResult {
    pub output_dir: PathBuf,
    pub entry_count: usize,
    pub files_written: usize,
    pub elapsed: std::time::Duration,
}

/// Progress callback for export status.
pub trait ExportProgress: Send + Sync {
    /// Called once before any entry is written.
    fn start(&self, total: usize);
    /// Called after each entry's files are written.
    fn entry_written(&self, path: &str, current: usize, total: usize);
    /// Called when the export completes.
    fn done(&self, result: &ExportResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ExportProgress for SilentProgress {
    fn start(&self, _total: usize) {}
    fn entry_written(&self, _path: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &ExportResult) {}
}

/// Export every entry of `matrix` under `output_dir`.
#[instrument(skip_all, fields(output_dir = %output_dir.display(), entries = matrix.len()))]
pub fn export_site(
    matrix: &ContentMatrix,
    site: &SiteConfig,
    export: &ExportConfig,
    output_dir: &Path,
    tool_version: &str,
    progress: &dyn ExportProgress,
) -> Result<ExportResult> {
    let started = Instant::now();
    // Fail on bad site settings before touching the filesystem.
    site.base()?;
    site.validate_route_prefix()?;

    std::fs::create_dir_all(output_dir).map_err(|e| CurriculumError::io(output_dir, e))?;
    progress.start(matrix.len());

    let mut files = Vec::new();
    let mut page_urls = Vec::with_capacity(matrix.len());

    for (i, entry) in matrix.iter().enumerate() {
        let page = page_path(&site.route_prefix, entry.level, entry.subject);
        let stem = format!("{}/{}", entry.level, entry.subject);

        files.push(write_file(
            output_dir,
            &format!("{stem}.json"),
            &to_json(entry, export.pretty)?,
        )?);
        files.push(write_file(
            output_dir,
            &format!("{stem}.jsonld.json"),
            &to_json(&page_json_ld(entry, site)?, export.pretty)?,
        )?);

        if export.emit_markdown {
            let related = related_courses(&site.route_prefix, entry.level, entry.subject);
            let markdown = render_markdown(entry, &related, &page);
            files.push(write_file(output_dir, &format!("{stem}.md"), &markdown)?);
        }

        page_urls.push(site.absolute(&page)?);
        progress.entry_written(&page, i + 1, matrix.len());
    }

    files.push(write_file(output_dir, "sitemap.xml", &build_sitemap(&page_urls))?);

    let manifest = ExportManifest {
        schema_version: CURRENT_SCHEMA_VERSION,
        tool_version: tool_version.to_string(),
        generated_at: Utc::now(),
        entry_count: matrix.len(),
        files,
    };
    write_file(output_dir, "manifest.json", &to_json(&manifest, true)?)?;

    let result = ExportResult {
        output_dir: output_dir.to_path_buf(),
        entry_count: matrix.len(),
        files_written: manifest.files.len() + 1,
        elapsed: started.elapsed(),
    };

    info!(
        entries = result.entry_count,
        files = result.files_written,
        "site export complete"
    );
    progress.done(&result);

    Ok(result)
}

/// Read back and check a previously exported manifest.
pub fn read_manifest(output_dir: &Path) -> Result<ExportManifest> {
    let path = output_dir.join("manifest.json");
    let content = std::fs::read_to_string(&path).map_err(|e| CurriculumError::io(&path, e))?;
    let manifest: ExportManifest = serde_json::from_str(&content)
        .map_err(|e| CurriculumError::validation(format!("invalid manifest.json: {e}")))?;

    if manifest.schema_version != CURRENT_SCHEMA_VERSION {
        return Err(CurriculumError::validation(format!(
            "unsupported schema_version: {} (expected {})",
            manifest.schema_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(manifest)
}

/// Re-hash every file listed in the manifest and return the paths whose
/// content no longer matches. An empty list means the export is intact.
#[instrument]
pub fn verify_export(output_dir: &Path) -> Result<Vec<String>> {
    let manifest = read_manifest(output_dir)?;
    let mut mismatched = Vec::new();

    for meta in &manifest.files {
        let path = output_dir.join(&meta.path);
        let content = match std::fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                mismatched.push(meta.path.clone());
                continue;
            }
            Err(e) => return Err(CurriculumError::io(&path, e)),
        };
        if content.len() != meta.size_bytes || sha256_hex(&content) != meta.sha256 {
            mismatched.push(meta.path.clone());
        }
    }

    debug!(
        files = manifest.files.len(),
        mismatched = mismatched.len(),
        "verified export"
    );
    Ok(mismatched)
}

/// Build a `sitemap.xml` for the given absolute URLs.
pub fn build_sitemap(urls: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        xml.push_str(&format!("  <url><loc>{}</loc></url>\n", escape_xml(url)));
    }
    xml.push_str("</urlset>\n");
    xml
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn to_json<T: Serialize>(data: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    json.map_err(|e| CurriculumError::Serialization(format!("JSON serialization failed: {e}")))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Write a file atomically (temp file, then rename) and return its metadata.
fn write_file(root: &Path, relative: &str, content: &str) -> Result<FileMeta> {
    let target = root.join(relative);
    let parent = target.parent().unwrap_or(root);
    std::fs::create_dir_all(parent).map_err(|e| CurriculumError::io(parent, e))?;

    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp = parent.join(format!(".{file_name}.tmp"));

    std::fs::write(&temp, content).map_err(|e| CurriculumError::io(&temp, e))?;
    std::fs::rename(&temp, &target).map_err(|e| CurriculumError::io(&target, e))?;

    let hash = sha256_hex(content.as_bytes());

    debug!(path = %relative, size = content.len(), "wrote file");

    Ok(FileMeta {
        path: relative.to_string(),
        sha256: hash,
        size_bytes: content.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
