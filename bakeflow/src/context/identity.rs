//! Run identity for tracking chain executions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a chain run with correlation IDs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunIdentity {
    /// The unique ID for this chain run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,

    /// The request ID (for request-scoped tracking).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
}

impl RunIdentity {
    /// Creates a new run identity with a generated run ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_id: Some(Uuid::new_v4()),
            ..Default::default()
        }
    }

    /// Creates a run identity with a specific run ID.
    #[must_use]
    pub fn with_run_id(run_id: Uuid) -> Self {
        Self {
            run_id: Some(run_id),
            ..Default::default()
        }
    }

    /// Sets the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Returns the run ID as a string, or None.
    #[must_use]
    pub fn run_id_str(&self) -> Option<String> {
        self.run_id.map(|id| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_identity_new() {
        let identity = RunIdentity::new();
        assert!(identity.run_id.is_some());
        assert!(identity.request_id.is_none());
    }

    #[test]
    fn test_run_identity_builder() {
        let request_id = Uuid::new_v4();
        let identity = RunIdentity::new().with_request_id(request_id);

        assert_eq!(identity.request_id, Some(request_id));
    }

    #[test]
    fn test_run_identity_serialization() {
        let identity = RunIdentity::new();
        let json = serde_json::to_string(&identity).unwrap();
        let deserialized: RunIdentity = serde_json::from_str(&json).unwrap();

        assert_eq!(identity.run_id, deserialized.run_id);
    }
}
