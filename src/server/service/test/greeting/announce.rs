use super::*;

/// Tests that a join posts a welcome banner to the log channel.
///
/// Expected: Ok(Some(log channel)) with one welcome.png attachment sent
#[tokio::test]
async fn posts_welcome_banner_to_log_channel() -> Result<(), AppError> {
    let gateway = FakeGuildGateway::new(BOT_USER_ID).with_guild(guild_snapshot(
        GUILD_ID,
        &[],
        &[(LOG_CHANNEL_ID, "welcome-log"), (SYSTEM_CHANNEL_ID, "general")],
        Some(SYSTEM_CHANNEL_ID),
    ));
    let avatars = FakeAvatarSource::unreachable();
    let service = GreetingService::new(&gateway, &avatars);

    let destination = service
        .announce(
            GuildId::new(GUILD_ID),
            &test_member(10, false),
            BannerKind::Welcome,
            &test_settings(),
        )
        .await?;

    assert_eq!(destination, Some(ChannelId::new(LOG_CHANNEL_ID)));

    let banners = gateway.banners();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].0, ChannelId::new(LOG_CHANNEL_ID));
    assert_eq!(banners[0].1.file_name, "welcome.png");
    assert!(!banners[0].1.png.is_empty());

    Ok(())
}

/// Tests that a leave falls back to the system channel without a log channel.
///
/// Expected: Ok(Some(system channel)) with leave.png sent
#[tokio::test]
async fn falls_back_to_system_channel() -> Result<(), AppError> {
    let gateway = FakeGuildGateway::new(BOT_USER_ID).with_guild(guild_snapshot(
        GUILD_ID,
        &[],
        &[(SYSTEM_CHANNEL_ID, "general")],
        Some(SYSTEM_CHANNEL_ID),
    ));
    let avatars = FakeAvatarSource::with_bytes(solid_png(32, [0x00, 0x80, 0x00]));
    let service = GreetingService::new(&gateway, &avatars);

    let destination = service
        .announce(
            GuildId::new(GUILD_ID),
            &test_member(10, false),
            BannerKind::Leave,
            &test_settings(),
        )
        .await?;

    assert_eq!(destination, Some(ChannelId::new(SYSTEM_CHANNEL_ID)));
    assert_eq!(gateway.banners()[0].1.file_name, "leave.png");

    Ok(())
}

/// Tests that nothing is sent when neither a log nor a system channel exists.
///
/// Expected: Ok(None) and no messages
#[tokio::test]
async fn skips_guild_without_destination() -> Result<(), AppError> {
    let gateway = FakeGuildGateway::new(BOT_USER_ID).with_guild(guild_snapshot(
        GUILD_ID,
        &[],
        &[(VERIFY_CHANNEL_ID, "verify")],
        None,
    ));
    let avatars = FakeAvatarSource::unreachable();
    let service = GreetingService::new(&gateway, &avatars);

    let destination = service
        .announce(
            GuildId::new(GUILD_ID),
            &test_member(10, false),
            BannerKind::Welcome,
            &test_settings(),
        )
        .await?;

    assert_eq!(destination, None);
    assert!(gateway.banners().is_empty());

    Ok(())
}
