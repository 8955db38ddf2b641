use std::{env, fs, path::Path};

use crate::{errors::Error, keywords::KeywordSet, Result};

/// Typed configuration for the bot.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub keywords: KeywordSet,
    pub reply_on_match: bool,
    /// `None` keeps every match for the lifetime of the process.
    pub match_log_capacity: Option<usize>,
}

impl Config {
    /// Read `.env` (without overriding the real environment), then the environment.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("BOT_TOKEN environment variable is required".to_string())
            })?;

        let keywords = match parse_csv_lower(lookup("KEYWORDS")) {
            custom if !custom.is_empty() => KeywordSet::new(custom),
            _ => KeywordSet::default(),
        };

        let reply_on_match = lookup("REPLY_ON_MATCH")
            .map(|s| parse_bool(&s))
            .unwrap_or(true);

        let match_log_capacity = lookup("MATCH_LOG_CAPACITY")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0);

        Ok(Self {
            bot_token,
            keywords,
            reply_on_match,
            match_log_capacity,
        })
    }
}

/// Export `KEY=value` lines from `path` into the process environment.
/// Variables that are already set win. A missing file is not an error.
pub fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_csv_lower(v: Option<String>) -> Vec<String> {
    v.unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn missing_token_is_fatal() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    fn blank_token_is_fatal() {
        assert!(load(&[("BOT_TOKEN", "   ")]).is_err());
    }

    #[test]
    fn defaults() {
        let cfg = load(&[("BOT_TOKEN", "123:abc")]).unwrap();
        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.keywords, KeywordSet::default());
        assert!(cfg.reply_on_match);
        assert_eq!(cfg.match_log_capacity, None);
    }

    #[test]
    fn overrides() {
        let cfg = load(&[
            ("BOT_TOKEN", "t"),
            ("KEYWORDS", " Nequi, paga hoy ,,"),
            ("REPLY_ON_MATCH", "off"),
            ("MATCH_LOG_CAPACITY", "50"),
        ])
        .unwrap();
        assert!(cfg.keywords.iter().eq(["nequi", "paga hoy"]));
        assert!(!cfg.reply_on_match);
        assert_eq!(cfg.match_log_capacity, Some(50));
    }

    #[test]
    fn zero_or_garbage_capacity_means_unbounded() {
        let cfg = load(&[("BOT_TOKEN", "t"), ("MATCH_LOG_CAPACITY", "0")]).unwrap();
        assert_eq!(cfg.match_log_capacity, None);
        let cfg = load(&[("BOT_TOKEN", "t"), ("MATCH_LOG_CAPACITY", "lots")]).unwrap();
        assert_eq!(cfg.match_log_capacity, None);
    }

    #[test]
    fn empty_keyword_override_falls_back_to_defaults() {
        let cfg = load(&[("BOT_TOKEN", "t"), ("KEYWORDS", " , ")]).unwrap();
        assert_eq!(cfg.keywords.len(), 39);
    }

    #[test]
    fn dotenv_file_fills_environment_without_overriding() {
        let path = std::env::temp_dir().join(format!("kcb-dotenv-{}.env", std::process::id()));
        fs::write(
            &path,
            "KCB_TEST_DOTENV_LOG=debug\nKCB_TEST_DOTENV_KEPT=from_file\n",
        )
        .unwrap();
        env::set_var("KCB_TEST_DOTENV_KEPT", "from_env");

        load_dotenv_if_present(&path);

        assert_eq!(env::var("KCB_TEST_DOTENV_LOG").unwrap(), "debug");
        assert_eq!(env::var("KCB_TEST_DOTENV_KEPT").unwrap(), "from_env");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_dotenv_file_is_ignored() {
        load_dotenv_if_present(Path::new("/nonexistent/kcb/.env"));
    }

    #[test]
    fn dotenv_parsing_skips_comments_and_strips_quotes() {
        let parsed =
            parse_dotenv("# token\nBOT_TOKEN=\"123:abc\"\n\nbad line\nREPLY_ON_MATCH = 'no'\n");
        assert_eq!(
            parsed,
            vec![
                ("BOT_TOKEN".to_string(), "123:abc".to_string()),
                ("REPLY_ON_MATCH".to_string(), "no".to_string()),
            ]
        );
    }
}
