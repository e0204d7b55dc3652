// Invoice service — CRUD business logic and summary statistics

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::Set;

use crate::db::repositories::invoice_repository::{InvoiceStats, InvoiceWithClient};
use crate::entity::invoices;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::ids;
use crate::models::InvoicePayload;

/// Client, billing period and invoiced amount are mandatory; amount_paid
/// defaults to zero. Nothing is inserted when validation fails.
fn validate_payload(payload: InvoicePayload) -> ApiResult<(String, String, Decimal, Decimal)> {
    match (payload.id_client, payload.billing_period, payload.invoiced_amount) {
        (Some(id_client), Some(billing_period), Some(invoiced_amount))
            if !id_client.trim().is_empty() && !billing_period.trim().is_empty() =>
        {
            Ok((
                id_client,
                billing_period,
                invoiced_amount,
                payload.amount_paid.unwrap_or_default(),
            ))
        }
        _ => Err(ApiError::Validation(
            "Client, billing period and invoiced amount are required fields".to_string(),
        )),
    }
}

pub async fn list_invoices(state: &AppState) -> ApiResult<Vec<InvoiceWithClient>> {
    state.invoices.find_all().await.map_err(Into::into)
}

pub async fn get_invoice(state: &AppState, invoice_number: &str) -> ApiResult<InvoiceWithClient> {
    state
        .invoices
        .find_by_number_with_client(invoice_number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Invoice {} not found", invoice_number)))
}

pub async fn create_invoice(
    state: &AppState,
    payload: InvoicePayload,
) -> ApiResult<invoices::Model> {
    let (id_client, billing_period, invoiced_amount, amount_paid) = validate_payload(payload)?;

    let model = invoices::ActiveModel {
        invoice_number: Set(ids::new_invoice_number()),
        id_client: Set(id_client),
        billing_period: Set(billing_period),
        invoiced_amount: Set(invoiced_amount),
        amount_paid: Set(amount_paid),
        created_at: Set(Utc::now()),
    };

    state.invoices.insert(model).await.map_err(Into::into)
}

/// Full-row replace by key; the creation timestamp is kept
pub async fn update_invoice(
    state: &AppState,
    invoice_number: &str,
    payload: InvoicePayload,
) -> ApiResult<invoices::Model> {
    let (id_client, billing_period, invoiced_amount, amount_paid) = validate_payload(payload)?;

    if state.invoices.find_by_number(invoice_number).await?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Invoice {} not found",
            invoice_number
        )));
    }

    let model = invoices::ActiveModel {
        invoice_number: Set(invoice_number.to_string()),
        id_client: Set(id_client),
        billing_period: Set(billing_period),
        invoiced_amount: Set(invoiced_amount),
        amount_paid: Set(amount_paid),
        ..Default::default()
    };

    state.invoices.update(model).await.map_err(Into::into)
}

pub async fn delete_invoice(state: &AppState, invoice_number: &str) -> ApiResult<()> {
    if state.invoices.delete(invoice_number).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!(
            "Invoice {} not found",
            invoice_number
        )))
    }
}

pub async fn stats_summary(state: &AppState) -> ApiResult<InvoiceStats> {
    state.invoices.stats_summary().await.map_err(Into::into)
}

pub async fn invoices_by_period(
    state: &AppState,
    period: &str,
) -> ApiResult<Vec<InvoiceWithClient>> {
    state
        .invoices
        .find_by_period(period)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(
        id_client: Option<&str>,
        invoiced_amount: Option<Decimal>,
    ) -> InvoicePayload {
        InvoicePayload {
            id_client: id_client.map(String::from),
            billing_period: Some("2025-07".to_string()),
            invoiced_amount,
            amount_paid: None,
        }
    }

    #[test]
    fn missing_client_is_rejected_before_insert() {
        let result = validate_payload(payload(None, Some(Decimal::new(100, 0))));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn missing_amount_is_rejected() {
        let result = validate_payload(payload(Some("client-1"), None));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn amount_paid_defaults_to_zero() {
        let (_, _, invoiced, paid) =
            validate_payload(payload(Some("client-1"), Some(Decimal::new(100, 0)))).unwrap();
        assert_eq!(invoiced, Decimal::new(100, 0));
        assert_eq!(paid, Decimal::ZERO);
    }
}
