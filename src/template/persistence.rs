//! Background persistence worker for template definitions.
//!
//! The worker receives full template snapshots via channel and writes them
//! to snapshot storage as a single JSON file, debouncing rapid saves into
//! one write.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::storage::SnapshotStorage;
use crate::template::models::Template;

pub const TEMPLATES_FILE: &str = "templates.json";
const DEBOUNCE_MS: u64 = 500;

/// Load the persisted template snapshot, if any.
///
/// A missing or unreadable snapshot is not an error; the service starts
/// with an empty store. A corrupt snapshot is logged and skipped.
pub async fn load_snapshot(storage: &dyn SnapshotStorage) -> Vec<Template> {
    match storage.download_file(TEMPLATES_FILE).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<Template>>(&bytes) {
            Ok(templates) => {
                log::info!("Loaded {} template(s) from snapshot", templates.len());
                templates
            }
            Err(e) => {
                log::error!("Template snapshot is corrupt, starting empty: {}", e);
                Vec::new()
            }
        },
        Err(_) => {
            log::info!("No template snapshot found, starting empty");
            Vec::new()
        }
    }
}

/// Starts the background persistence worker.
///
/// Uses debouncing to batch multiple writes within a short time window,
/// so a burst of saves produces a single snapshot write.
pub async fn start_persistence_worker(
    mut receiver: mpsc::Receiver<Vec<Template>>,
    storage: Arc<dyn SnapshotStorage + Send + Sync>,
) {
    log::info!("Template persistence worker started");

    while let Some(templates) = receiver.recv().await {
        // Debounce: drain any pending snapshots to get the latest
        let mut latest = templates;
        while let Ok(newer) = receiver.try_recv() {
            log::debug!("Batching pending template snapshot");
            latest = newer;
        }

        tokio::time::sleep(tokio::time::Duration::from_millis(DEBOUNCE_MS)).await;

        // Drain again after the delay to capture writes during the wait
        while let Ok(newer) = receiver.try_recv() {
            log::debug!("Batching template snapshot after debounce delay");
            latest = newer;
        }

        match serde_json::to_vec(&latest) {
            Ok(json_data) => {
                if let Err(e) = storage.upload_file(TEMPLATES_FILE, &json_data).await {
                    log::error!("Failed to persist templates to storage: {}", e);
                } else {
                    log::info!("Persisted {} template(s) to storage", latest.len());
                }
            }
            Err(e) => {
                log::error!("Failed to serialize templates for persistence: {}", e);
            }
        }
    }

    log::info!("Template persistence worker stopped");
}
