// models/src/medical/attachment.rs

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// Largest accepted attachment, in bytes (5 MB).
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

/// The attachment types the practice accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Image(ImageFormat),
    Pdf,
}

impl AttachmentKind {
    /// Looks a MIME type up on the allow-list.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(AttachmentKind::Image(ImageFormat::Png)),
            "image/jpeg" | "image/jpg" => Some(AttachmentKind::Image(ImageFormat::Jpeg)),
            "image/gif" => Some(AttachmentKind::Image(ImageFormat::Gif)),
            "image/webp" => Some(AttachmentKind::Image(ImageFormat::Webp)),
            "application/pdf" => Some(AttachmentKind::Pdf),
            _ => None,
        }
    }

    /// Derives the kind from a file name's extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(AttachmentKind::Image(ImageFormat::Png)),
            "jpg" | "jpeg" => Some(AttachmentKind::Image(ImageFormat::Jpeg)),
            "gif" => Some(AttachmentKind::Image(ImageFormat::Gif)),
            "webp" => Some(AttachmentKind::Image(ImageFormat::Webp)),
            "pdf" => Some(AttachmentKind::Pdf),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            AttachmentKind::Image(ImageFormat::Png) => "image/png",
            AttachmentKind::Image(ImageFormat::Jpeg) => "image/jpeg",
            AttachmentKind::Image(ImageFormat::Gif) => "image/gif",
            AttachmentKind::Image(ImageFormat::Webp) => "image/webp",
            AttachmentKind::Pdf => "application/pdf",
        }
    }
}

/// A file inlined into its incident as a base64 `data:` URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
}

impl FileAttachment {
    /// Validates and inlines raw file content.
    pub fn from_bytes(name: &str, mime: &str, bytes: &[u8]) -> ValidationResult<Self> {
        let kind = AttachmentKind::from_mime(mime).ok_or_else(|| {
            ValidationError::DisallowedAttachmentType {
                name: name.to_string(),
                mime: mime.to_string(),
            }
        })?;
        let size = bytes.len() as u64;
        check_size(name, size)?;
        Ok(FileAttachment {
            name: name.to_string(),
            url: format!("data:{};base64,{}", kind.mime(), STANDARD.encode(bytes)),
            mime_type: kind.mime().to_string(),
            size,
        })
    }

    /// The attachment's kind. Records written before the `type` field was
    /// kept carry an empty MIME type; for those the file name decides.
    pub fn kind(&self) -> Option<AttachmentKind> {
        if self.mime_type.trim().is_empty() {
            AttachmentKind::from_file_name(&self.name)
        } else {
            AttachmentKind::from_mime(&self.mime_type)
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.kind().is_none() {
            return Err(ValidationError::DisallowedAttachmentType {
                name: self.name.clone(),
                mime: self.mime_type.clone(),
            });
        }
        check_size(&self.name, self.size)
    }

    /// Decodes the inlined payload. `None` when the url is not a base64 data URL.
    pub fn decode_data(&self) -> Option<Vec<u8>> {
        let (header, payload) = self.url.strip_prefix("data:")?.split_once(',')?;
        if !header.ends_with(";base64") {
            return None;
        }
        STANDARD.decode(payload).ok()
    }
}

pub(crate) fn check_size(name: &str, size: u64) -> ValidationResult<()> {
    if size > MAX_ATTACHMENT_BYTES {
        return Err(ValidationError::AttachmentTooLarge {
            name: name.to_string(),
            size,
            limit: MAX_ATTACHMENT_BYTES,
        });
    }
    Ok(())
}
