use std::sync::Arc;

use tokio::sync::mpsc;

use crate::storage::SnapshotStorage;
use crate::template::models::Template;
use crate::template::persistence;
use crate::template::store::TemplateStore;
use crate::user::store::UserStore;

/// Shared application state: the in-memory stores plus the channel feeding
/// the background snapshot persistence worker.
pub struct AppState {
    pub templates: TemplateStore,
    pub users: UserStore,
    template_persist_sender: mpsc::Sender<Vec<Template>>,
}

impl AppState {
    /// Build the state, loading any persisted template snapshot and
    /// spawning the background persistence worker.
    pub async fn new(storage: Arc<dyn SnapshotStorage + Send + Sync>) -> Self {
        let templates = TemplateStore::new();
        let snapshot = persistence::load_snapshot(storage.as_ref()).await;
        if !snapshot.is_empty() {
            templates.replace_all(snapshot);
        }

        let (template_persist_sender, receiver) = mpsc::channel(100);
        tokio::spawn(persistence::start_persistence_worker(receiver, storage));

        Self {
            templates,
            users: UserStore::new(),
            template_persist_sender,
        }
    }

    /// Queue the current template snapshot for background persistence.
    ///
    /// Each message carries the full snapshot, so a dropped message is
    /// superseded by the next successful save.
    pub async fn persist_templates(&self) {
        if let Err(e) = self
            .template_persist_sender
            .send(self.templates.snapshot())
            .await
        {
            log::error!("Failed to queue template snapshot for persistence: {}", e);
        } else {
            log::debug!("Template snapshot queued for background persistence");
        }
    }
}
