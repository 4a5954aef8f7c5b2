use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::status::StatusDto,
    server::{error::AppError, state::AppState},
};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Report whether the bot is connected.
///
/// # Returns
/// - `200 OK` - Connection state, bot username, guild count and process start time
#[utoipa::path(
    get,
    path = "/api/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Bot status", body = StatusDto),
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let identity = state.presence.identity().await;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            bot_online: identity.is_some(),
            username: identity.map(|bot| bot.username),
            guild_count: state.gateway.guild_ids().len(),
            started_at: state.presence.started_at(),
            uptime_seconds: state.presence.uptime_seconds(),
        }),
    ))
}
