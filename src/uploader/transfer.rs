use crate::api::error::ApiError;
use crate::api::types::{DocumentRef, UploadSlot};
use crate::api::ExtractionApi;

use anyhow::Context;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};

/// A document queued for transfer: the local file joined with the slot its
/// bytes will be pushed to.
struct PendingUpload {
    name: String,
    path: PathBuf,
    slot: UploadSlot,
}

/// Upload every file in `dir` and return one [`DocumentRef`] per file, in
/// listing order.
///
/// An empty directory short-circuits to an empty sequence without
/// contacting the service.
pub async fn upload_directory<A>(api: &A, dir: &Path) -> anyhow::Result<Vec<DocumentRef>>
where
    A: ExtractionApi + ?Sized,
{
    let names = list_documents(dir).await?;
    if names.is_empty() {
        tracing::warn!("No documents found in {}", dir.display());
        return Ok(Vec::new());
    }

    let slots = api.upload_slots(names.len()).await?;
    let pending = pair_with_slots(dir, names, slots)?;

    tracing::info!(
        "Uploading {} documents from {}",
        pending.len(),
        dir.display()
    );

    let transfers = pending.into_iter().map(|upload| push_document(api, upload));
    let documents = try_join_all(transfers).await?;

    Ok(documents)
}

/// Non-recursive listing of the documents directory, sorted by file name.
///
/// Platform `read_dir` order is not stable; sorting keeps the file/slot
/// pairing deterministic.
async fn list_documents(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read documents directory {}", dir.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(names)
}

/// Combine file names and slots positionally. A count mismatch would
/// silently misassign documents, so it is rejected here.
fn pair_with_slots(
    dir: &Path,
    names: Vec<String>,
    slots: Vec<UploadSlot>,
) -> Result<Vec<PendingUpload>, ApiError> {
    if names.len() != slots.len() {
        return Err(ApiError::SlotCountMismatch {
            requested: names.len(),
            received: slots.len(),
        });
    }

    let pending = names
        .into_iter()
        .zip(slots)
        .map(|(name, slot)| PendingUpload {
            path: dir.join(&name),
            name,
            slot,
        })
        .collect();

    Ok(pending)
}

async fn push_document<A>(api: &A, upload: PendingUpload) -> anyhow::Result<DocumentRef>
where
    A: ExtractionApi + ?Sized,
{
    let bytes = tokio::fs::read(&upload.path)
        .await
        .with_context(|| format!("failed to read {}", upload.path.display()))?;

    api.upload_document(&upload.slot, bytes)
        .await
        .with_context(|| format!("failed to upload {}", upload.name))?;

    tracing::debug!("Uploaded {} to {}", upload.name, upload.slot.url);

    Ok(DocumentRef {
        name: upload.name,
        url: upload.slot.url,
    })
}
