// Client service — CRUD business logic with referential delete guard

use sea_orm::Set;

use crate::db::repositories::client_repository::ClientWithPlatform;
use crate::db::repositories::GuardedDelete;
use crate::entity::{clients, invoices, transactions};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::ids;
use crate::models::ClientPayload;

/// Checks the required fields and splits the payload into its parts.
/// Name and platform are mandatory; the contact fields are free.
fn validate_payload(payload: ClientPayload) -> ApiResult<(String, String, ClientPayload)> {
    match (payload.nombre.clone(), payload.id_platform.clone()) {
        (Some(nombre), Some(id_platform))
            if !nombre.trim().is_empty() && !id_platform.trim().is_empty() =>
        {
            Ok((nombre, id_platform, payload))
        }
        _ => Err(ApiError::Validation(
            "Name and platform are required fields".to_string(),
        )),
    }
}

pub async fn list_clients(state: &AppState) -> ApiResult<Vec<ClientWithPlatform>> {
    state.clients.find_all().await.map_err(Into::into)
}

pub async fn get_client(state: &AppState, id: &str) -> ApiResult<ClientWithPlatform> {
    state
        .clients
        .find_by_id_with_platform(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Client {} not found", id)))
}

pub async fn create_client(state: &AppState, payload: ClientPayload) -> ApiResult<clients::Model> {
    let (nombre, id_platform, payload) = validate_payload(payload)?;

    let model = clients::ActiveModel {
        id: Set(ids::new_client_id()),
        nombre: Set(nombre),
        direccion: Set(payload.direccion),
        correo: Set(payload.correo),
        numero_identificacion: Set(payload.numero_identificacion),
        telefono: Set(payload.telefono),
        id_platform: Set(Some(id_platform)),
    };

    state.clients.insert(model).await.map_err(Into::into)
}

/// Full-row replace by key
pub async fn update_client(
    state: &AppState,
    id: &str,
    payload: ClientPayload,
) -> ApiResult<clients::Model> {
    let (nombre, id_platform, payload) = validate_payload(payload)?;

    if state.clients.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Client {} not found", id)));
    }

    let model = clients::ActiveModel {
        id: Set(id.to_string()),
        nombre: Set(nombre),
        direccion: Set(payload.direccion),
        correo: Set(payload.correo),
        numero_identificacion: Set(payload.numero_identificacion),
        telefono: Set(payload.telefono),
        id_platform: Set(Some(id_platform)),
    };

    state.clients.update(model).await.map_err(Into::into)
}

pub async fn delete_client(state: &AppState, id: &str) -> ApiResult<()> {
    match state.clients.delete_guarded(id).await? {
        GuardedDelete::Deleted => Ok(()),
        GuardedDelete::Missing => Err(ApiError::NotFound(format!("Client {} not found", id))),
        GuardedDelete::Blocked => Err(ApiError::Conflict(
            "Client cannot be deleted while invoices or transactions reference it".to_string(),
        )),
    }
}

pub async fn client_invoices(state: &AppState, id: &str) -> ApiResult<Vec<invoices::Model>> {
    state
        .clients
        .invoices_for_client(id)
        .await
        .map_err(Into::into)
}

pub async fn client_transactions(
    state: &AppState,
    id: &str,
) -> ApiResult<Vec<transactions::Model>> {
    state
        .clients
        .transactions_for_client(id)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nombre: Option<&str>, id_platform: Option<&str>) -> ClientPayload {
        ClientPayload {
            nombre: nombre.map(String::from),
            direccion: None,
            correo: None,
            numero_identificacion: None,
            telefono: None,
            id_platform: id_platform.map(String::from),
        }
    }

    #[test]
    fn payload_without_name_is_rejected() {
        assert!(matches!(
            validate_payload(payload(None, Some("p1"))),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn payload_without_platform_is_rejected() {
        assert!(matches!(
            validate_payload(payload(Some("Acme"), None)),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_payload(payload(Some("Acme"), Some("  "))),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn complete_payload_passes() {
        let (nombre, id_platform, _) =
            validate_payload(payload(Some("Acme"), Some("p1"))).unwrap();
        assert_eq!(nombre, "Acme");
        assert_eq!(id_platform, "p1");
    }
}
