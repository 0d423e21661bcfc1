//! In-memory list of files selected for preview. Held only for the current
//! run, never persisted. The list is the single source of truth for the
//! preview panel: rendering iterates it in insertion order, so previews can
//! never appear in decode-completion order.

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Stable per-run id; keeps preview URIs unique even when the same file
    /// name is added twice.
    pub id: u64,
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl UploadedFile {
    /// Declared media type first, extension as a fallback for platforms
    /// that hand over files without one.
    pub fn is_image(&self) -> bool {
        if !self.mime.is_empty() {
            return self.mime.starts_with("image/");
        }
        guess_mime(&self.name).starts_with("image/")
    }

    /// URI under which the decoded preview is cached.
    pub fn preview_uri(&self) -> String {
        format!("bytes://upload/{}/{}", self.id, self.name)
    }

    pub fn icon(&self) -> &'static str {
        file_icon(&self.name)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Name for display. egui renders this as literal text, so markup
    /// characters in file names cannot inject anything; long names are
    /// shortened with an ellipsis.
    pub fn display_name(&self, max_chars: usize) -> String {
        if self.name.chars().count() <= max_chars {
            self.name.clone()
        } else {
            let head: String = self.name.chars().take(max_chars.saturating_sub(1)).collect();
            format!("{head}…")
        }
    }
}

#[derive(Default)]
pub struct UploadList {
    files: Vec<UploadedFile>,
    next_id: u64,
}

impl UploadList {
    /// Appends a file. No de-duplication and no size or type limit.
    pub fn push(&mut self, name: impl Into<String>, mime: impl Into<String>, bytes: Arc<[u8]>) {
        let id = self.next_id;
        self.next_id += 1;
        self.files.push(UploadedFile {
            id,
            name: name.into(),
            mime: mime.into(),
            bytes,
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn push_path(&mut self, path: &std::path::Path) -> std::io::Result<()> {
        let bytes: Arc<[u8]> = std::fs::read(path)?.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = guess_mime(&name).to_owned();
        self.push(name, mime, bytes);
        Ok(())
    }

    /// Removes the file at `index`, preserving the relative order of the
    /// rest. Returns the removed file so the caller can evict its preview.
    pub fn remove(&mut self, index: usize) -> Option<UploadedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) -> Vec<UploadedFile> {
        std::mem::take(&mut self.files)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedFile> {
        self.files.iter()
    }
}

/// Media type from the file extension, for hosts that don't declare one.
pub fn guess_mime(name: &str) -> &'static str {
    match extension(name).as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Icon for non-image files; unknown extensions get the generic one.
pub fn file_icon(name: &str) -> &'static str {
    match extension(name).as_str() {
        "pdf" => "📕",
        "doc" | "docx" => "📝",
        "txt" => "📃",
        "xls" | "xlsx" => "📊",
        "ppt" | "pptx" => "📽",
        "zip" | "rar" => "🗜",
        _ => "📄",
    }
}

/// Human-readable size: 1024-based units, at most two decimals.
pub fn format_file_size(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or("").to_lowercase()
}
