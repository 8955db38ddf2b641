//! Telegram update handlers.
//!
//! Each handler translates a teloxide `Message` into a `kcb-core` update and
//! hands it to the `MessageIntake`. Non-text messages are ignored.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{MessageEntity, MessageEntityKind},
};

use kcb_core::domain::{ChatId, ChatInfo, MessageId, MessageRef, Sender, UserId};

use crate::router::AppState;

mod commands;
mod text;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if msg.text().is_none() {
        return Ok(());
    }

    if starts_with_bot_command(msg.entities()) {
        return commands::handle_command(msg, state).await;
    }

    text::handle_text(msg, state).await
}

/// Telegram tags `/cmd` at the very start of a message as a `bot_command`
/// entity. Anything else, even text that begins with `/`, is scanned for keywords.
fn starts_with_bot_command(entities: Option<&[MessageEntity]>) -> bool {
    entities
        .unwrap_or_default()
        .iter()
        .any(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))
}

fn message_ref(msg: &Message) -> MessageRef {
    MessageRef {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
    }
}

fn chat_info(msg: &Message) -> ChatInfo {
    ChatInfo::new(ChatId(msg.chat.id.0), msg.chat.title(), msg.chat.first_name())
}

fn sender(user: &teloxide::types::User) -> Sender {
    Sender {
        id: UserId(user.id.0 as i64),
        display_name: Some(user.first_name.clone()).filter(|s| !s.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_entity_at_start_is_a_command() {
        let entities = [MessageEntity::new(MessageEntityKind::BotCommand, 0, 12)];
        assert!(starts_with_bot_command(Some(&entities)));
    }

    #[test]
    fn slash_text_without_command_entity_is_scanned() {
        // e.g. "/ 50% de descuento, paga hoy"
        assert!(!starts_with_bot_command(None));
        assert!(!starts_with_bot_command(Some(&[])));
    }

    #[test]
    fn command_later_in_text_is_not_a_command() {
        let entities = [
            MessageEntity::new(MessageEntityKind::Bold, 0, 4),
            MessageEntity::new(MessageEntityKind::BotCommand, 10, 9),
        ];
        assert!(!starts_with_bot_command(Some(&entities)));
    }
}
