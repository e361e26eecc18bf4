//! Upload rules and object naming for the two storage buckets.
//!
//! Uploading and public-URL issuance belong to the hosted backend; this
//! module only decides whether a file may be uploaded, what object name it
//! gets, and which object a public URL points at when deleting.

use url::Url;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::StorageError;

const MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Pdf,
}

impl UploadKind {
    pub fn bucket(self) -> &'static str {
        match self {
            UploadKind::Image => "website-images",
            UploadKind::Pdf => "magazine-pdfs",
        }
    }

    pub fn default_folder(self) -> &'static str {
        match self {
            UploadKind::Image => "general",
            UploadKind::Pdf => "magazine-pdfs",
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            UploadKind::Image => 10 * MIB,
            UploadKind::Pdf => 50 * MIB,
        }
    }

    fn accepts(self, content_type: &str) -> bool {
        let ct = content_type.trim().to_ascii_lowercase();
        match self {
            UploadKind::Image => ct.starts_with("image/"),
            UploadKind::Pdf => ct == "application/pdf",
        }
    }
}

/// Content type is checked before size.
pub fn validate_upload(kind: UploadKind, content_type: &str, size: u64) -> Result<(), StorageError> {
    if !kind.accepts(content_type) {
        return Err(StorageError::WrongContentType {
            expected: match kind {
                UploadKind::Image => "image",
                UploadKind::Pdf => "PDF",
            },
            actual: content_type.to_string(),
        });
    }
    if size > kind.max_bytes() {
        return Err(StorageError::TooLarge {
            size,
            limit: kind.max_bytes(),
        });
    }
    Ok(())
}

/// `<folder>/<millis>-<hash>.<ext>`; the extension is the lowercased text
/// after the last `.` of `file_name` (the whole name when there is no dot).
pub fn object_name(folder: &str, file_name: &str, now_millis: i64) -> String {
    let ext = file_name.rsplit('.').next().unwrap_or(file_name).to_lowercase();
    let suffix = xxh3_64(format!("{}|{}", file_name, now_millis).as_bytes());
    format!("{}/{}-{:012x}.{}", folder.trim_matches('/'), now_millis, suffix & 0xffff_ffff_ffff, ext)
}

/// Object path inside the bucket that a public URL refers to.
pub fn object_path_from_public_url(kind: UploadKind, public_url: &str) -> Result<String, StorageError> {
    let invalid = || StorageError::InvalidUrl(public_url.to_string(), kind.bucket());
    let parsed = Url::parse(public_url).map_err(|_| invalid())?;
    let marker = format!("{}/", kind.bucket());
    let path = parsed.path();
    let idx = path.find(&marker).ok_or_else(invalid)?;
    let object = &path[idx + marker.len()..];
    if object.is_empty() {
        return Err(invalid());
    }
    Ok(object.to_string())
}
