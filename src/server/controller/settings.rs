use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        settings::{SettingsDto, UpdateSettingsDto, UpdateSettingsResultDto},
    },
    server::{
        error::AppError, model::settings::UpdateSettingsParam,
        service::settings::SettingsService, state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get the current runtime settings.
///
/// # Arguments
/// - `state` - Application state containing the settings store
///
/// # Returns
/// - `200 OK` - Every setting with its current value
#[utoipa::path(
    get,
    path = "/api/config",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Current settings", body = SettingsDto),
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.settings, state.gateway.as_ref(), &state.presence);

    let settings = service.get().await;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update runtime settings and refresh every guild's verification prompt.
///
/// Keys omitted from the payload keep their current value, but the channel names,
/// role name and button text must always be supplied. The response is sent after
/// all guilds have been reconciled against the new settings.
///
/// # Arguments
/// - `state` - Application state containing the settings store and Discord gateway
/// - `payload` - Settings to change
///
/// # Returns
/// - `200 OK` - Settings stored and guilds reconciled
/// - `400 Bad Request` - The body was not a JSON object of strings, or a required key
///   was missing or blank
#[utoipa::path(
    post,
    path = "/api/config",
    tag = SETTINGS_TAG,
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = UpdateSettingsResultDto),
        (status = 400, description = "Malformed body or a required setting is missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSettingsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let service = SettingsService::new(&state.settings, state.gateway.as_ref(), &state.presence);

    let message = service.update(UpdateSettingsParam::from(payload)).await?;

    Ok((
        StatusCode::OK,
        Json(UpdateSettingsResultDto {
            success: true,
            message,
        }),
    ))
}
