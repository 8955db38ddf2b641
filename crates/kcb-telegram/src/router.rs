use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use kcb_core::{
    config::Config,
    intake::{KeywordMonitor, MessageIntake},
    match_log::{BoundedMatchLog, MatchLog, MemoryMatchLog},
    messaging::port::MessagingPort,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<dyn MessageIntake>,
}

pub fn build_match_log(cfg: &Config) -> Arc<dyn MatchLog> {
    match cfg.match_log_capacity {
        Some(capacity) => Arc::new(BoundedMatchLog::new(capacity)),
        None => Arc::new(MemoryMatchLog::new()),
    }
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        tracing::info!(bot = %me.username(), "kcb started");
    }
    tracing::info!(
        keywords = cfg.keywords.len(),
        reply_on_match = cfg.reply_on_match,
        match_log_capacity = ?cfg.match_log_capacity,
        "Keyword checker bot starting with long polling..."
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let monitor = KeywordMonitor::new(
        Arc::new(cfg.keywords.clone()),
        build_match_log(&cfg),
        messenger,
    )
    .with_reply_on_match(cfg.reply_on_match);

    let state = Arc::new(AppState {
        intake: Arc::new(monitor),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(capacity: Option<usize>) -> Config {
        Config::from_lookup(|k| match k {
            "BOT_TOKEN" => Some("123:abc".to_string()),
            "MATCH_LOG_CAPACITY" => capacity.map(|c| c.to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn bounded_log_when_capacity_configured() {
        use kcb_core::{
            domain::{ChatId, ChatInfo, Sender, UserId},
            match_log::MatchRecord,
        };

        let log = build_match_log(&cfg(Some(2)));
        for n in 0..5 {
            log.append(MatchRecord::now(
                Sender {
                    id: UserId(1),
                    display_name: None,
                },
                ChatInfo::new(ChatId(1), None, None),
                format!("hoy {n}"),
                vec!["hoy".to_string()],
            ))
            .await
            .unwrap();
        }
        assert_eq!(log.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn unbounded_log_by_default() {
        let log = build_match_log(&cfg(None));
        assert!(log.is_empty().await.unwrap());
    }
}
