//! # Outbound Ports
//!
//! What the sync service needs from the wire layer.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{BlockHash, SyncError};

/// Peer connection able to carry a `getheaders` request.
///
/// The wire layer owns framing and the stop hash (always zero here).
#[async_trait]
pub trait HeaderRequestSink: Send + Sync {
    /// Send `getheaders` with the given locator.
    async fn send_get_headers(&self, locator: Vec<BlockHash>) -> Result<(), SyncError>;

    /// Peer identifier (for logging).
    fn peer_id(&self) -> &str;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock peer that records every locator it is asked to send.
#[derive(Clone)]
pub struct MockPeer {
    /// Peer identifier.
    pub id: String,
    /// Locators sent, oldest first.
    pub sent: Arc<Mutex<Vec<Vec<BlockHash>>>>,
    /// Should sends fail?
    pub should_fail: bool,
}

impl Default for MockPeer {
    fn default() -> Self {
        Self {
            id: "mock-peer-1".to_string(),
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }
}

impl MockPeer {
    /// Number of requests recorded so far.
    pub async fn request_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Most recent locator sent.
    pub async fn last_locator(&self) -> Option<Vec<BlockHash>> {
        self.sent.lock().await.last().cloned()
    }
}

#[async_trait]
impl HeaderRequestSink for MockPeer {
    async fn send_get_headers(&self, locator: Vec<BlockHash>) -> Result<(), SyncError> {
        if self.should_fail {
            return Err(SyncError::Network("Mock failure".to_string()));
        }
        self.sent.lock().await.push(locator);
        Ok(())
    }

    fn peer_id(&self) -> &str {
        &self.id
    }
}
