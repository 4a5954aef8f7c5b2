mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    bot,
    config::Config,
    data::{
        avatar::{AvatarSource, HttpAvatarSource},
        discord::SerenityGateway,
    },
    error::AppError,
    router::router,
    service::{presence::PresenceService, settings::SettingsStore},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let settings = SettingsStore::new(config.default_settings.clone());
    let presence = PresenceService::new();
    let avatars: Arc<dyn AvatarSource> =
        Arc::new(HttpAvatarSource::new(startup::setup_reqwest_client()?));

    // Build the Discord client first so the panel can share its HTTP client and cache
    let bot_client =
        bot::start::init_bot(&config, settings.clone(), presence.clone(), avatars).await?;
    let gateway = Arc::new(SerenityGateway::new(
        bot_client.http.clone(),
        bot_client.cache.clone(),
    ));
    let shard_manager = bot_client.shard_manager.clone();

    // Start Discord bot in a separate task
    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let app = router(&config.panel_static_dir).with_state(AppState::new(
        settings,
        presence.clone(),
        gateway,
    ));

    let listener = tokio::net::TcpListener::bind(config.panel_addr).await?;
    tracing::info!("Configuration panel listening on http://{}", config.panel_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Panel stopped, disconnecting from Discord");

    shard_manager.shutdown_all().await;
    presence.mark_offline().await;

    if let Err(e) = bot_task.await {
        tracing::error!("Discord bot task failed: {}", e);
    }

    Ok(())
}
