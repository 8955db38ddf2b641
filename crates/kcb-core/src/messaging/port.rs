use async_trait::async_trait;

use crate::{
    domain::MessageRef,
    messaging::types::MessagingCapabilities,
    Result,
};

/// Outbound side of a messenger.
///
/// Texts are sent as plain text; callers are responsible for splitting anything
/// longer than `capabilities().max_message_len`.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    fn capabilities(&self) -> MessagingCapabilities;

    /// Send `text` to the chat of `to`, quoting that message.
    async fn reply_text(&self, to: MessageRef, text: &str) -> Result<MessageRef>;
}
