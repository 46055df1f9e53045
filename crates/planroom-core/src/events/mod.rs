//! Domain events emitted by browsing operations.
//!
//! Events are broadcast per project through [`EventBus`] so sibling UI
//! (e.g., a separate sidebar tree) can refresh its own copy of folders
//! and drawing sets without prop-drilling shared state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::types::ProjectId;

/// What changed on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// File records changed (upload, move, delete).
    Files,
    /// The declared folder-path list changed.
    Folders,
    /// Drawing sets or their sheets changed.
    DrawingSets,
    /// The current navigation view changed.
    Navigation,
}

/// A project-scoped change notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The project the change belongs to.
    pub project_id: ProjectId,
    /// What changed.
    pub kind: ChangeKind,
}

impl BrowserEvent {
    /// Create a new change event.
    pub fn new(project_id: ProjectId, kind: ChangeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            project_id,
            kind,
        }
    }
}

/// In-memory per-project broadcast bus.
#[derive(Debug)]
pub struct EventBus {
    /// Project → broadcast sender.
    channels: RwLock<HashMap<ProjectId, broadcast::Sender<BrowserEvent>>>,
    /// Buffer size for new channels.
    buffer_size: usize,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            buffer_size: buffer_size.max(1),
        }
    }

    /// Publish an event to its project channel.
    ///
    /// Dropped silently when the project has no subscribers.
    pub async fn publish(&self, event: BrowserEvent) {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(&event.project_id) {
            let _ = tx.send(event);
        }
    }

    /// Subscribe to a project channel, returns a receiver.
    pub async fn subscribe(&self, project_id: ProjectId) -> broadcast::Receiver<BrowserEvent> {
        let mut channels = self.channels.write().await;
        let tx = channels
            .entry(project_id)
            .or_insert_with(|| broadcast::channel(self.buffer_size).0);
        tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_project_subscribers() {
        let bus = EventBus::new(16);
        let project = ProjectId::new();
        let mut rx = bus.subscribe(project).await;

        bus.publish(BrowserEvent::new(project, ChangeKind::Files))
            .await;

        let event = rx.recv().await.expect("event");
        assert_eq!(event.project_id, project);
        assert_eq!(event.kind, ChangeKind::Files);
    }

    #[tokio::test]
    async fn test_publish_is_scoped_per_project() {
        let bus = EventBus::new(16);
        let a = ProjectId::new();
        let b = ProjectId::new();
        let mut rx_b = bus.subscribe(b).await;

        bus.publish(BrowserEvent::new(a, ChangeKind::Folders)).await;

        assert!(matches!(
            rx_b.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
