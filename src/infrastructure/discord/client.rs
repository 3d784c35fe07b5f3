//! Discord Client 构建

use serenity::model::gateway::GatewayIntents;
use serenity::Client;
use songbird::{SerenityInit, Songbird};
use std::sync::Arc;

use super::VoiceEventHandler;

/// 需要的网关 intents：服务器、语音状态、成员（用于显示名）
pub fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES | GatewayIntents::GUILD_MEMBERS
}

/// 构建 serenity 客户端并注册 songbird
pub async fn build_client(
    token: &str,
    handler: VoiceEventHandler,
    songbird: Arc<Songbird>,
) -> Result<Client, serenity::Error> {
    Client::builder(token, gateway_intents())
        .event_handler(handler)
        .register_songbird_with(songbird)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_intents() {
        let intents = gateway_intents();
        assert!(intents.contains(GatewayIntents::GUILD_VOICE_STATES));
        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
        assert!(intents.contains(GatewayIntents::GUILDS));
        assert!(!intents.contains(GatewayIntents::MESSAGE_CONTENT));
    }
}
