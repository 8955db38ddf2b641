use crate::domain::{ChatInfo, MessageRef, Sender};

/// Cross-messenger incoming update model.
///
/// Telegram-specific fields should live in the Telegram adapter.
#[derive(Clone, Debug)]
pub enum IncomingUpdate {
    Command(Command),
    Text(TextMessage),
}

/// A `/name args` message.
#[derive(Clone, Debug)]
pub struct Command {
    pub message: MessageRef,
    pub chat: ChatInfo,
    pub sender: Sender,
    pub name: String,
    pub args: String,
}

/// Any non-command text message.
#[derive(Clone, Debug)]
pub struct TextMessage {
    pub message: MessageRef,
    pub chat: ChatInfo,
    pub sender: Sender,
    pub text: Option<String>,
}

/// Capabilities / limits of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub max_message_len: usize,
}
