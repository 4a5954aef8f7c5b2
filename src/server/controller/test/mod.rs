use std::{path::Path, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serenity::all::UserId;
use tower::ServiceExt;

use crate::{
    model::{
        api::ErrorDto,
        settings::{SettingsDto, UpdateSettingsResultDto},
        status::StatusDto,
    },
    server::{
        data::fake::{guild_snapshot, FakeGuildGateway},
        model::settings::BotSettings,
        router::router,
        service::{presence::PresenceService, settings::SettingsStore},
        state::AppState,
    },
};


const BOT_USER_ID: u64 = 1;

struct TestPanel {
    app: Router,
    settings: SettingsStore,
    presence: PresenceService,
    gateway: Arc<FakeGuildGateway>,
}

impl TestPanel {
    fn new() -> Self {
        let gateway = Arc::new(FakeGuildGateway::new(BOT_USER_ID).with_guild(guild_snapshot(
            100,
            &[(300, "Member")],
            &[(200, "verify")],
            None,
        )));
        let settings = SettingsStore::new(BotSettings {
            verify_channel_name: "verify".to_string(),
            log_channel_name: "welcome-log".to_string(),
            member_role_name: "Member".to_string(),
            verify_button_text: "Verify".to_string(),
            verify_message: "Press to verify".to_string(),
            success_message: "Verified!".to_string(),
        });
        let presence = PresenceService::new();

        let app = router(Path::new("does-not-exist")).with_state(AppState::new(
            settings.clone(),
            presence.clone(),
            gateway.clone(),
        ));

        Self {
            app,
            settings,
            presence,
            gateway,
        }
    }

    async fn mark_bot_ready(&self) {
        self.presence
            .mark_ready(UserId::new(BOT_USER_ID), "gatekeeper".to_string())
            .await;
    }

    async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }
}
