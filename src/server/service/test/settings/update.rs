use super::*;

/// Tests that a valid update is stored and re-posts the prompt with new values.
///
/// Verifies that the merged settings are visible through the store, the new role is
/// created and the fresh prompt carries the new button label and role name.
///
/// Expected: Ok with a message summarizing the reconciled guilds
#[tokio::test]
async fn stores_update_and_reconciles() -> Result<(), AppError> {
    let gateway = FakeGuildGateway::new(BOT_USER_ID).with_guild(guild_snapshot(
        GUILD_ID,
        &[(MEMBER_ROLE_ID, "Member")],
        &[(VERIFY_CHANNEL_ID, "verify")],
        None,
    ));
    let store = SettingsStore::new(test_settings());
    let presence = PresenceService::new();
    presence
        .mark_ready(UserId::new(BOT_USER_ID), "gatekeeper".to_string())
        .await;

    let message = SettingsService::new(&store, &gateway, &presence)
        .update(complete_update())
        .await?;

    assert!(message.contains("1 of 1"));

    let current = store.snapshot().await;
    assert_eq!(current.member_role_name, "Verified");
    assert_eq!(current.verify_button_text, "Let me in");
    assert_eq!(current.verify_message, "Press to verify");

    assert_eq!(
        gateway.created_roles(),
        vec![(GuildId::new(GUILD_ID), "Verified".to_string())]
    );
    assert_eq!(
        gateway.prompts().last().map(|(_, content, label)| (content.clone(), label.clone())),
        Some((
            "Press to verify **Verified**".to_string(),
            "Let me in".to_string()
        ))
    );

    Ok(())
}

/// Tests that an update missing the role name is rejected and stores nothing.
///
/// Expected: Err(AppError::BadRequest) with settings unchanged and no Discord calls
#[tokio::test]
async fn rejects_missing_role_name() {
    let gateway = FakeGuildGateway::new(BOT_USER_ID).with_guild(guild_snapshot(
        GUILD_ID,
        &[(MEMBER_ROLE_ID, "Member")],
        &[(VERIFY_CHANNEL_ID, "verify")],
        None,
    ));
    let store = SettingsStore::new(test_settings());
    let presence = PresenceService::new();
    presence
        .mark_ready(UserId::new(BOT_USER_ID), "gatekeeper".to_string())
        .await;

    let result = SettingsService::new(&store, &gateway, &presence)
        .update(UpdateSettingsParam {
            member_role_name: None,
            ..complete_update()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(store.snapshot().await, test_settings());
    assert!(gateway.prompts().is_empty());
}

/// Tests that settings are stored while the bot is offline.
///
/// Expected: Ok with settings applied and no reconciliation
#[tokio::test]
async fn stores_update_while_offline() -> Result<(), AppError> {
    let gateway = FakeGuildGateway::new(BOT_USER_ID).with_guild(guild_snapshot(
        GUILD_ID,
        &[],
        &[(VERIFY_CHANNEL_ID, "verify")],
        None,
    ));
    let store = SettingsStore::new(test_settings());
    let presence = PresenceService::new();

    let message = SettingsService::new(&store, &gateway, &presence)
        .update(complete_update())
        .await?;

    assert!(message.contains("offline"));
    assert_eq!(store.snapshot().await.member_role_name, "Verified");
    assert!(gateway.prompts().is_empty());
    assert!(gateway.created_roles().is_empty());

    Ok(())
}

/// Tests that a snapshot taken before an update keeps its values.
///
/// Expected: old snapshot unchanged after the store is updated
#[tokio::test]
async fn earlier_snapshot_is_unaffected() -> Result<(), AppError> {
    let gateway = FakeGuildGateway::new(BOT_USER_ID);
    let store = SettingsStore::new(test_settings());
    let presence = PresenceService::new();

    let before = store.snapshot().await;
    SettingsService::new(&store, &gateway, &presence)
        .update(complete_update())
        .await?;

    assert_eq!(before.member_role_name, "Member");
    assert_eq!(store.snapshot().await.member_role_name, "Verified");

    Ok(())
}
