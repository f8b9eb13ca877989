//! Optional reference document shown next to the quiz.
//!
//! The document is read on demand and base64-encoded into a `data:` URI so it
//! can be embedded inline in rendered output.

use crate::error::ReferenceError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDocument {
    pub path: PathBuf,
    pub mime: &'static str,
    pub size: usize,
    pub data_uri: String,
}

impl ReferenceDocument {
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let bytes = fs::read(path).map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(path, &bytes))
    }

    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Self {
        let mime = mime_for(path);
        Self {
            path: path.to_path_buf(),
            mime,
            size: bytes.len(),
            data_uri: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        }
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Markup that embeds the document inline.
    pub fn embed_html(&self) -> String {
        format!(
            "<iframe src=\"{}\" width=\"700\" height=\"800\" type=\"{}\"></iframe>",
            self.data_uri, self.mime
        )
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "html" | "htm" => "text/html",
        "txt" | "md" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_bytes_encodes_data_uri() {
        let doc = ReferenceDocument::from_bytes(Path::new("/docs/guide.pdf"), b"hello");
        assert_eq!(doc.mime, "application/pdf");
        assert_eq!(doc.size, 5);
        assert_eq!(doc.data_uri, "data:application/pdf;base64,aGVsbG8=");
        assert_eq!(doc.name(), "guide.pdf");
    }

    #[test]
    fn test_embed_html_wraps_data_uri() {
        let doc = ReferenceDocument::from_bytes(Path::new("notes.PDF"), b"%PDF");
        let html = doc.embed_html();
        assert!(html.starts_with("<iframe src=\"data:application/pdf;base64,"));
        assert!(html.contains("type=\"application/pdf\""));
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let doc = ReferenceDocument::from_bytes(Path::new("blob"), &[0, 1, 2]);
        assert_eq!(doc.mime, "application/octet-stream");
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();
        file.flush().unwrap();

        let doc = ReferenceDocument::load(file.path()).unwrap();
        assert_eq!(doc.size, 8);
        assert_eq!(doc.mime, "application/pdf");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceDocument::load(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, ReferenceError::Io { .. }));
    }
}
