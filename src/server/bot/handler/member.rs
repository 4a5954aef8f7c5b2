use serenity::all::{Context, GuildId, Member, User};

use crate::server::{
    bot::handler::gateway,
    data::avatar::AvatarSource,
    model::{banner::BannerKind, member::MemberIdentity},
    service::{greeting::GreetingService, settings::SettingsStore},
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(
    settings: &SettingsStore,
    avatars: &dyn AvatarSource,
    ctx: Context,
    new_member: Member,
) {
    announce(
        settings,
        avatars,
        &ctx,
        new_member.guild_id,
        &new_member.user,
        BannerKind::Welcome,
    )
    .await;
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    settings: &SettingsStore,
    avatars: &dyn AvatarSource,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    announce(settings, avatars, &ctx, guild_id, &user, BannerKind::Leave).await;
}

async fn announce(
    settings: &SettingsStore,
    avatars: &dyn AvatarSource,
    ctx: &Context,
    guild_id: GuildId,
    user: &User,
    kind: BannerKind,
) {
    let settings = settings.snapshot().await;
    let gateway = gateway(ctx);
    let member = MemberIdentity::from(user);

    if let Err(e) = GreetingService::new(&gateway, avatars)
        .announce(guild_id, &member, kind, &settings)
        .await
    {
        tracing::error!(
            "Failed to post {:?} banner for {} in guild {}: {}",
            kind,
            member.username,
            guild_id,
            e
        );
    }
}
