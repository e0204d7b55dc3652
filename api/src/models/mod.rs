// API request/response models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Uniform response envelope: `{success, data?, count?, message?, error?}`.
/// Absent fields are omitted from the JSON output entirely.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying only data
    pub fn data(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            error: None,
        }
    }

    /// Successful response carrying data plus a message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            count: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
            error: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful list response; `count` mirrors the number of rows
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        ApiResponse {
            success: true,
            data: Some(data),
            count: Some(count),
            message: None,
            error: None,
        }
    }
}

/// Query parameters for GET /api/dashboard/search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Request body for client create/update
#[derive(Debug, Deserialize)]
pub struct ClientPayload {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub correo: Option<String>,
    pub numero_identificacion: Option<String>,
    pub telefono: Option<String>,
    pub id_platform: Option<String>,
}

/// Request body for invoice create/update
#[derive(Debug, Deserialize)]
pub struct InvoicePayload {
    pub id_client: Option<String>,
    pub billing_period: Option<String>,
    pub invoiced_amount: Option<Decimal>,
    pub amount_paid: Option<Decimal>,
}

/// Request body for transaction create/update
#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    pub id_client: Option<String>,
    pub date_time_transaction: Option<DateTime<Utc>>,
    pub amount_transaction: Option<Decimal>,
    pub status_transaction: Option<String>,
    pub type_transaction: Option<String>,
}

/// Request body for platform create/update
#[derive(Debug, Deserialize)]
pub struct PlatformPayload {
    pub platform_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_omits_absent_fields() {
        let body = serde_json::to_value(ApiResponse::data(json!({"id": "1"}))).unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"], json!({"id": "1"}));
        assert!(body.get("count").is_none());
        assert!(body.get("message").is_none());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn list_envelope_counts_rows() {
        let body = serde_json::to_value(ApiResponse::list(vec![1, 2, 3])).unwrap();
        assert_eq!(body["count"], json!(3));
        assert_eq!(body["data"], json!([1, 2, 3]));
    }

    #[test]
    fn message_envelope_has_no_data() {
        let body =
            serde_json::to_value(ApiResponse::<()>::message("Client deleted successfully"))
                .unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!("Client deleted successfully"));
        assert!(body.get("data").is_none());
    }
}
