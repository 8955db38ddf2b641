//! Plain-text helpers for outgoing chat messages.

/// Split `text` into chunks of at most `limit` UTF-16 code units.
///
/// Telegram measures message length in UTF-16 units, so an emoji counts as two.
/// Breaks on line boundaries where possible; a single line longer than `limit`
/// is hard-split on a char boundary. Trailing newlines are dropped from each
/// chunk and empty chunks are skipped.
pub fn split_text_chunks(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(2);
    if utf16_len(text) <= limit {
        return vec![text.to_string()];
    }

    let mut out: Vec<String> = Vec::new();
    let mut chunk = String::new();
    let mut chunk_len = 0usize;

    for line in text.split_inclusive('\n') {
        let mut rest = line;
        loop {
            let rest_len = utf16_len(rest);
            if chunk_len + rest_len <= limit {
                chunk.push_str(rest);
                chunk_len += rest_len;
                break;
            }
            if chunk_len > 0 {
                flush_chunk(&mut out, &mut chunk);
                chunk_len = 0;
                continue;
            }
            let (head, tail) = split_utf16_prefix(rest, limit);
            out.push(head.to_string());
            rest = tail;
        }
    }

    flush_chunk(&mut out, &mut chunk);
    out
}

fn flush_chunk(out: &mut Vec<String>, chunk: &mut String) {
    let trimmed = chunk.trim_end_matches('\n');
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    chunk.clear();
}

pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn split_utf16_prefix(s: &str, max_units: usize) -> (&str, &str) {
    let mut units = 0usize;
    for (idx, ch) in s.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return (&s[..idx], &s[idx..]);
        }
    }
    (s, "")
}
