use serde::Deserialize;

/// Envelope used by the backend for wrapped responses
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// A list endpoint body, either a bare array or wrapped in [`ApiResponse`]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Enveloped(ApiResponse<Vec<T>>),
}

impl<T> ListPayload<T> {
    /// Unwrap into the list of items; a wrapped response without data is empty
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Enveloped(envelope) => {
                if !envelope.success {
                    tracing::warn!(
                        "Backend reported an unsuccessful list response: {}",
                        envelope.message.as_deref().unwrap_or("no message")
                    );
                }
                envelope.data.unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array_payload() {
        let payload: ListPayload<i64> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(payload.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn test_enveloped_payload() {
        let payload: ListPayload<i64> =
            serde_json::from_str(r#"{"success": true, "data": [4, 5]}"#).unwrap();
        assert_eq!(payload.into_items(), vec![4, 5]);
    }

    #[test]
    fn test_envelope_without_data_is_empty() {
        let payload: ListPayload<i64> =
            serde_json::from_str(r#"{"success": false, "message": "boom"}"#).unwrap();
        assert!(payload.into_items().is_empty());
    }
}
