use std::sync::Arc;

use teloxide::prelude::*;

use kcb_core::{
    intake::MessageIntake,
    messaging::types::{IncomingUpdate, TextMessage},
};

use crate::router::AppState;

use super::{chat_info, message_ref, sender};

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let update = IncomingUpdate::Text(TextMessage {
        message: message_ref(&msg),
        chat: chat_info(&msg),
        sender: sender(user),
        text: msg.text().map(str::to_string),
    });

    if let Err(e) = state.intake.dispatch(update).await {
        tracing::error!(chat_id = msg.chat.id.0, error = %e, "Failed to process text message");
    }
    Ok(())
}
