//! One-shot support assistant query.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use levelup_core::assistant::{self, Topic};

use super::Result;

/// Reply printed by `ask --json`.
#[derive(Debug, Serialize)]
struct AskReply<'a> {
    /// `null` when the fallback reply was used.
    topic: Option<Topic>,
    reply: &'a str,
}

/// Print the assistant's reply to `question`.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn ask(question: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let reply = AskReply {
        topic: assistant::classify(question),
        reply: assistant::select_response(question),
    };
    info!(topic = ?reply.topic, "Assistant reply selected");

    if json {
        serde_json::to_writer_pretty(&mut *out, &reply)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", reply.reply)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use levelup_core::assistant::FALLBACK_REPLY;

    use super::*;

    #[test]
    fn test_ask_text() {
        let mut out = Vec::new();
        ask("ПРИВЕТ", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Привет!"));
    }

    #[test]
    fn test_ask_json_topic() {
        let mut out = Vec::new();
        ask("Хочу разместить объявление", true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["topic"], "selling");
    }

    #[test]
    fn test_ask_json_fallback() {
        let mut out = Vec::new();
        ask("???", true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["topic"].is_null());
        assert_eq!(value["reply"], FALLBACK_REPLY);
    }
}
