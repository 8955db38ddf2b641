//! Entry point for incoming chat updates.
//!
//! Adapters translate platform updates into `IncomingUpdate` and hand them to a
//! `MessageIntake`. `KeywordMonitor` is the bot's implementation: it matches
//! text messages against the keyword set, records hits, and answers commands.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    commands::{
        format_keywords, format_match_reply, format_recent_matches, BotCommand, HELP_TEXT,
    },
    domain::MessageRef,
    formatting::split_text_chunks,
    keywords::KeywordSet,
    match_log::{MatchLog, MatchRecord, RECENT_MATCHES_LIMIT},
    messaging::{
        port::MessagingPort,
        types::{Command, IncomingUpdate, TextMessage},
    },
    Result,
};

#[async_trait]
pub trait MessageIntake: Send + Sync {
    /// Handle a non-command text message. Returns the record if one was made.
    async fn on_text_message(&self, msg: TextMessage) -> Result<Option<MatchRecord>>;

    async fn on_command(&self, cmd: Command) -> Result<()>;

    async fn dispatch(&self, update: IncomingUpdate) -> Result<()> {
        match update {
            IncomingUpdate::Text(msg) => self.on_text_message(msg).await.map(|_| ()),
            IncomingUpdate::Command(cmd) => self.on_command(cmd).await,
        }
    }
}

pub struct KeywordMonitor {
    keywords: Arc<KeywordSet>,
    log: Arc<dyn MatchLog>,
    messenger: Arc<dyn MessagingPort>,
    reply_on_match: bool,
}

impl KeywordMonitor {
    pub fn new(
        keywords: Arc<KeywordSet>,
        log: Arc<dyn MatchLog>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self {
            keywords,
            log,
            messenger,
            reply_on_match: true,
        }
    }

    pub fn with_reply_on_match(mut self, enabled: bool) -> Self {
        self.reply_on_match = enabled;
        self
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Reply in as many messages as the messenger's length limit requires.
    /// Delivery failures are logged, never returned.
    async fn reply(&self, to: MessageRef, text: &str) {
        let limit = self.messenger.capabilities().max_message_len;
        for chunk in split_text_chunks(text, limit) {
            if let Err(e) = self.messenger.reply_text(to, &chunk).await {
                tracing::error!(chat_id = to.chat_id.0, error = %e, "Error replying to message");
                return;
            }
        }
    }
}

#[async_trait]
impl MessageIntake for KeywordMonitor {
    async fn on_text_message(&self, msg: TextMessage) -> Result<Option<MatchRecord>> {
        let matched = self.keywords.matches(msg.text.as_deref());
        if matched.is_empty() {
            return Ok(None);
        }
        let text = msg.text.unwrap_or_default();

        let record = MatchRecord::now(msg.sender, msg.chat, text, matched);
        self.log.append(record.clone()).await?;

        tracing::info!(
            timestamp = %record.timestamp,
            chat_id = record.chat.id.0,
            user_id = record.user.id.0,
            kws = ?record.matched_keywords,
            text = %record.text,
            "Keyword match"
        );

        if self.reply_on_match {
            let reply = format_match_reply(&record.matched_keywords, &record.text);
            self.reply(msg.message, &reply).await;
        }

        Ok(Some(record))
    }

    async fn on_command(&self, cmd: Command) -> Result<()> {
        let text = match BotCommand::from_name(&cmd.name) {
            BotCommand::Start => HELP_TEXT.to_string(),
            BotCommand::Keywords => format_keywords(&self.keywords),
            BotCommand::LastMatches => {
                format_recent_matches(&self.log.recent(RECENT_MATCHES_LIMIT).await?)
            }
            BotCommand::Unknown(name) => {
                tracing::debug!(
                    chat_id = cmd.chat.id.0,
                    command = %name,
                    "Ignoring unknown command"
                );
                return Ok(());
            }
        };

        self.reply(cmd.message, &text).await;
        Ok(())
    }
}
