use std::sync::Arc;

use teloxide::prelude::*;

use kcb_core::{
    commands::parse_command,
    intake::MessageIntake,
    messaging::types::{Command, IncomingUpdate},
};

use crate::router::AppState;

use super::{chat_info, message_ref, sender};

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (name, args) = parse_command(text);
    let update = IncomingUpdate::Command(Command {
        message: message_ref(&msg),
        chat: chat_info(&msg),
        sender: sender(user),
        name,
        args,
    });

    if let Err(e) = state.intake.dispatch(update).await {
        tracing::error!(chat_id = msg.chat.id.0, error = %e, "Failed to handle command");
    }
    Ok(())
}
