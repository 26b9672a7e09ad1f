//! Client request - a customer service ticket (custom order, repair, exchange, pre-order).

use super::Karat;
use serde::{Deserialize, Serialize};

/// What the customer is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Made-to-order piece
    Custom,
    /// Repair of an existing piece
    Repair,
    /// Trade an old piece for a new one
    Exchange,
    /// Reserve an item before it is in stock
    Preorder,
}

/// Request status. Always `Pending` at creation; nothing transitions it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Saved but not sent to the shop
    #[default]
    Pending,
    /// Sent to the shop
    Sent,
}

/// Caller-supplied fields of a new request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    /// Request type
    pub kind: RequestKind,
    /// Free-form category, conventionally a product category name
    pub category: String,
    /// Approximate weight in grams, 0 when unspecified
    pub weight_approx: f64,
    /// Requested purity
    pub karat: Karat,
    /// Free-text notes
    pub notes: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            kind: RequestKind::Custom,
            category: "ring".to_string(),
            weight_approx: 0.0,
            karat: Karat::K21,
            notes: String::new(),
        }
    }
}

/// Stored client request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    /// Timestamp-derived identifier
    pub id: String,
    /// Request type
    #[serde(rename = "type")]
    pub kind: RequestKind,
    /// Free-form category
    pub category: String,
    /// Approximate weight in grams, 0 when unspecified
    #[serde(default)]
    pub weight_approx: f64,
    /// Requested purity
    pub karat: Karat,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
    /// Creation date, formatted for display
    pub date: String,
    /// Current status
    #[serde(default)]
    pub status: RequestStatus,
}

impl ClientRequest {
    /// Stamps a draft with an id, today's date and `Pending` status.
    ///
    /// Non-finite or negative weights are stored as 0 (unspecified).
    #[must_use]
    pub fn from_draft(draft: RequestDraft) -> Self {
        let now = chrono::Local::now();
        let weight_approx = if draft.weight_approx.is_finite() && draft.weight_approx > 0.0 {
            draft.weight_approx
        } else {
            0.0
        };

        Self {
            id: now.timestamp_millis().to_string(),
            kind: draft.kind,
            category: draft.category,
            weight_approx,
            karat: draft.karat,
            notes: draft.notes,
            date: now.format("%-d/%-m/%Y").to_string(),
            status: RequestStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_from_draft_stamps_pending_request() {
        let request = ClientRequest::from_draft(RequestDraft {
            kind: RequestKind::Repair,
            notes: "Broken clasp".to_string(),
            ..RequestDraft::default()
        });

        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.kind, RequestKind::Repair);
        assert_eq!(request.karat, Karat::K21);
        assert!(request.id.parse::<i64>().is_ok());
        assert_eq!(request.date.split('/').count(), 3);
        assert_eq!(request.weight_approx, 0.0);
    }

    #[test]
    fn test_from_draft_normalizes_bad_weight() {
        let request = ClientRequest::from_draft(RequestDraft {
            weight_approx: f64::NAN,
            ..RequestDraft::default()
        });
        assert_eq!(request.weight_approx, 0.0);
    }

    #[test]
    fn test_request_json_shape() {
        let request = ClientRequest::from_draft(RequestDraft {
            kind: RequestKind::Preorder,
            weight_approx: 12.5,
            ..RequestDraft::default()
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "preorder");
        assert_eq!(json["weightApprox"], 12.5);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["karat"], 21);
    }
}
