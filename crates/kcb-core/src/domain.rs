use std::fmt;

/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a Telegram message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// Message sender as shown in match records: `id (first name)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    pub id: UserId,
    pub display_name: Option<String>,
}

/// Chat as shown in match records: `id (title)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatInfo {
    pub id: ChatId,
    pub display_name: Option<String>,
}

impl ChatInfo {
    /// Groups carry a title; private chats only have the peer's first name.
    pub fn new(id: ChatId, title: Option<&str>, first_name: Option<&str>) -> Self {
        let display_name = title
            .or(first_name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { id, display_name }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labelled(f, self.id.0, self.display_name.as_deref())
    }
}

impl fmt::Display for ChatInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labelled(f, self.id.0, self.display_name.as_deref())
    }
}

fn write_labelled(f: &mut fmt::Formatter<'_>, id: i64, name: Option<&str>) -> fmt::Result {
    match name {
        Some(name) => write!(f, "{id} ({name})"),
        None => write!(f, "{id}"),
    }
}
