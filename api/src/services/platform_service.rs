// Platform service — CRUD business logic with referential delete guard

use sea_orm::Set;

use crate::db::repositories::client_repository::ClientWithPlatform;
use crate::db::repositories::platform_repository::PlatformStats;
use crate::db::repositories::GuardedDelete;
use crate::entity::platforms;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::ids;
use crate::models::PlatformPayload;

fn validate_payload(payload: PlatformPayload) -> ApiResult<String> {
    match payload.platform_name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ApiError::Validation(
            "Platform name is a required field".to_string(),
        )),
    }
}

pub async fn list_platforms(state: &AppState) -> ApiResult<Vec<platforms::Model>> {
    state.platforms.find_all().await.map_err(Into::into)
}

pub async fn get_platform(state: &AppState, id: &str) -> ApiResult<platforms::Model> {
    state
        .platforms
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Platform {} not found", id)))
}

pub async fn platform_clients(state: &AppState, id: &str) -> ApiResult<Vec<ClientWithPlatform>> {
    state
        .platforms
        .clients_for_platform(id)
        .await
        .map_err(Into::into)
}

pub async fn platform_stats(state: &AppState, id: &str) -> ApiResult<PlatformStats> {
    state
        .platforms
        .stats(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Platform {} not found", id)))
}

pub async fn create_platform(
    state: &AppState,
    payload: PlatformPayload,
) -> ApiResult<platforms::Model> {
    let platform_name = validate_payload(payload)?;

    let model = platforms::ActiveModel {
        id: Set(ids::new_platform_id()),
        platform_name: Set(platform_name),
    };

    state.platforms.insert(model).await.map_err(Into::into)
}

pub async fn update_platform(
    state: &AppState,
    id: &str,
    payload: PlatformPayload,
) -> ApiResult<platforms::Model> {
    let platform_name = validate_payload(payload)?;

    if state.platforms.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Platform {} not found", id)));
    }

    let model = platforms::ActiveModel {
        id: Set(id.to_string()),
        platform_name: Set(platform_name),
    };

    state.platforms.update(model).await.map_err(Into::into)
}

pub async fn delete_platform(state: &AppState, id: &str) -> ApiResult<()> {
    match state.platforms.delete_guarded(id).await? {
        GuardedDelete::Deleted => Ok(()),
        GuardedDelete::Missing => Err(ApiError::NotFound(format!("Platform {} not found", id))),
        GuardedDelete::Blocked => Err(ApiError::Conflict(
            "Platform cannot be deleted while clients reference it".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_platform_name_is_rejected() {
        assert!(matches!(
            validate_payload(PlatformPayload {
                platform_name: None
            }),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_payload(PlatformPayload {
                platform_name: Some("   ".to_string())
            }),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn named_platform_passes() {
        let name = validate_payload(PlatformPayload {
            platform_name: Some("Stripe".to_string()),
        })
        .unwrap();
        assert_eq!(name, "Stripe");
    }
}
