use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness summary returned by `GET /api/status`.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    pub bot_online: bool,
    pub username: Option<String>,
    pub guild_count: usize,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
}
