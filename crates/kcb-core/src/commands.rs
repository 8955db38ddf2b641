//! Bot commands and the texts they produce.

use crate::{keywords::KeywordSet, match_log::MatchRecord};

pub const HELP_TEXT: &str = "👋 Hola! Soy el Keyword Checker Bot.\n\
En este chat revisaré mensajes que contengan palabras clave.\n\
Usa /keywords para ver las palabras configuradas\n\
Usa /lastmatches para ver las últimas coincidencias detectadas.";

pub const NO_MATCHES_TEXT: &str = "Aún no se han detectado coincidencias.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Keywords,
    LastMatches,
    Unknown(String),
}

impl BotCommand {
    /// Names are matched case-sensitively, as Telegram clients send them.
    pub fn from_name(name: &str) -> Self {
        match name {
            "start" => Self::Start,
            "keywords" => Self::Keywords,
            "lastmatches" => Self::LastMatches,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Split `/cmd@botname arg1 ...` into (`cmd`, `arg1 ...`).
pub fn parse_command(text: &str) -> (String, String) {
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_string();

    (cmd, rest)
}

pub fn format_keywords(keywords: &KeywordSet) -> String {
    let list = keywords
        .iter()
        .map(|k| format!("- {k}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("📌 Palabras clave actuales:\n\n{list}")
}

/// Render records (already limited, oldest first) for `/lastmatches`.
pub fn format_recent_matches(records: &[MatchRecord]) -> String {
    if records.is_empty() {
        return NO_MATCHES_TEXT.to_string();
    }

    let entries = records
        .iter()
        .map(|r| {
            format!(
                "[{}] Chat: {}, User: {}\n  Keywords: {}\n  Text: {}\n",
                r.timestamp,
                r.chat,
                r.user,
                r.matched_keywords.join(", "),
                r.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("🕒 Últimas coincidencias:\n\n{entries}")
}

pub fn format_match_reply(matched_keywords: &[String], text: &str) -> String {
    format!(
        "🔎 Detecté palabras clave: {}\nMensaje: {text}",
        matched_keywords.join(", ")
    )
}
