//! # Store Configuration
//!
//! Per-process configuration for the settlement service, constructed once
//! at startup and injected. Nothing here is read from globals.

use serde::{Deserialize, Serialize};

use optica_core::DEFAULT_TENANT_ID;

/// Configuration for one clinic location running the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Tenant everything committed by this process is stamped with.
    pub tenant_id: String,

    /// Store name printed on receipts.
    pub store_name: String,

    /// Two-character device code embedded in order numbers.
    pub device_code: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            store_name: "Optica".to_string(),
            device_code: "01".to_string(),
        }
    }
}
