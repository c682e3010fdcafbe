// lib/src/attachments.rs

//! Reading files from disk into validated incident attachments.

use std::path::Path;

use futures::future::join_all;
use log::{debug, warn};
use tokio::fs;

use models::{AttachmentKind, FileAttachment, ValidationError, MAX_ATTACHMENT_BYTES};

use crate::errors::Result;

/// Reads one file and inlines it. The MIME type comes from the extension;
/// oversized files are rejected from their metadata before being read.
pub async fn ingest_file(path: impl AsRef<Path>) -> Result<FileAttachment> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let kind = AttachmentKind::from_file_name(&name).ok_or_else(|| {
        ValidationError::DisallowedAttachmentType {
            name: name.clone(),
            mime: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    })?;

    let size = fs::metadata(path).await?.len();
    if size > MAX_ATTACHMENT_BYTES {
        return Err(ValidationError::AttachmentTooLarge {
            name,
            size,
            limit: MAX_ATTACHMENT_BYTES,
        }
        .into());
    }

    let bytes = fs::read(path).await?;
    debug!("Read attachment {} ({} bytes)", name, bytes.len());
    Ok(FileAttachment::from_bytes(&name, kind.mime(), &bytes)?)
}

/// Reads every file concurrently. Results line up with `paths`; one bad file
/// does not affect the others.
pub async fn ingest_files<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<FileAttachment>> {
    let results = join_all(paths.iter().map(|path| ingest_file(path.as_ref()))).await;
    for (path, result) in paths.iter().zip(&results) {
        if let Err(e) = result {
            warn!("Rejected attachment {}: {}", path.as_ref().display(), e);
        }
    }
    results
}
