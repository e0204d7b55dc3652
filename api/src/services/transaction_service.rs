// Transaction service — CRUD business logic and summary statistics

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::Set;

use crate::db::repositories::transaction_repository::{TransactionStats, TransactionWithClient};
use crate::entity::transactions;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::ids;
use crate::models::TransactionPayload;

/// Client, amount, status and type are mandatory; the timestamp defaults
/// to the time of the request.
fn validate_payload(
    payload: TransactionPayload,
) -> ApiResult<(String, DateTime<Utc>, Decimal, String, String)> {
    match (
        payload.id_client,
        payload.amount_transaction,
        payload.status_transaction,
        payload.type_transaction,
    ) {
        (Some(id_client), Some(amount), Some(status), Some(type_transaction))
            if !id_client.trim().is_empty()
                && !status.trim().is_empty()
                && !type_transaction.trim().is_empty() =>
        {
            Ok((
                id_client,
                payload.date_time_transaction.unwrap_or_else(Utc::now),
                amount,
                status,
                type_transaction,
            ))
        }
        _ => Err(ApiError::Validation(
            "Client, amount, status and transaction type are required fields".to_string(),
        )),
    }
}

pub async fn list_transactions(state: &AppState) -> ApiResult<Vec<TransactionWithClient>> {
    state.transactions.find_all().await.map_err(Into::into)
}

pub async fn get_transaction(state: &AppState, id: &str) -> ApiResult<TransactionWithClient> {
    state
        .transactions
        .find_by_id_with_client(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Transaction {} not found", id)))
}

pub async fn create_transaction(
    state: &AppState,
    payload: TransactionPayload,
) -> ApiResult<transactions::Model> {
    let (id_client, date_time, amount, status, type_transaction) = validate_payload(payload)?;

    let model = transactions::ActiveModel {
        id_transaction: Set(ids::new_transaction_id()),
        id_client: Set(id_client),
        date_time_transaction: Set(date_time),
        amount_transaction: Set(amount),
        status_transaction: Set(status),
        type_transaction: Set(type_transaction),
    };

    state.transactions.insert(model).await.map_err(Into::into)
}

/// Full-row replace by key
pub async fn update_transaction(
    state: &AppState,
    id: &str,
    payload: TransactionPayload,
) -> ApiResult<transactions::Model> {
    let (id_client, date_time, amount, status, type_transaction) = validate_payload(payload)?;

    if state.transactions.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Transaction {} not found", id)));
    }

    let model = transactions::ActiveModel {
        id_transaction: Set(id.to_string()),
        id_client: Set(id_client),
        date_time_transaction: Set(date_time),
        amount_transaction: Set(amount),
        status_transaction: Set(status),
        type_transaction: Set(type_transaction),
    };

    state.transactions.update(model).await.map_err(Into::into)
}

pub async fn delete_transaction(state: &AppState, id: &str) -> ApiResult<()> {
    if state.transactions.delete(id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Transaction {} not found", id)))
    }
}

pub async fn stats_summary(state: &AppState) -> ApiResult<TransactionStats> {
    state.transactions.stats_summary().await.map_err(Into::into)
}

pub async fn transactions_by_status(
    state: &AppState,
    status: &str,
) -> ApiResult<Vec<TransactionWithClient>> {
    state
        .transactions
        .find_by_status(status)
        .await
        .map_err(Into::into)
}

pub async fn transactions_by_type(
    state: &AppState,
    type_transaction: &str,
) -> ApiResult<Vec<TransactionWithClient>> {
    state
        .transactions
        .find_by_type(type_transaction)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(status: Option<&str>) -> TransactionPayload {
        TransactionPayload {
            id_client: Some("client-1".to_string()),
            date_time_transaction: None,
            amount_transaction: Some(Decimal::new(500, 0)),
            status_transaction: status.map(String::from),
            type_transaction: Some("Invoice Payment".to_string()),
        }
    }

    #[test]
    fn missing_status_is_rejected() {
        assert!(matches!(
            validate_payload(payload(None)),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn timestamp_defaults_to_now() {
        let before = Utc::now();
        let (_, date_time, amount, status, _) = validate_payload(payload(Some("Completed"))).unwrap();
        assert!(date_time >= before && date_time <= Utc::now());
        assert_eq!(amount, Decimal::new(500, 0));
        assert_eq!(status, "Completed");
    }
}
