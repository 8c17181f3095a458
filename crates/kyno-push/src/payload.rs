//! Push payload parsing
//!
//! Decodes the JSON body delivered with a push event. Parsing is lenient:
//! a malformed payload degrades to a default notification instead of
//! failing the event.

use serde_json::{Map, Value};

/// Notification title used when the payload carries none.
pub const DEFAULT_TITLE: &str = "Kyno";

/// Fields the worker understands. Whatever else the sender put under
/// `data` is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PushPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tag: Option<String>,
    pub url: Option<String>,
    pub data: Map<String, Value>,
}

impl PushPayload {
    /// Decode raw push bytes. Never fails: anything that is not a JSON
    /// object becomes a default-title notification carrying the raw text
    /// as its body.
    pub fn parse(raw: &[u8]) -> Self {
        let text = String::from_utf8_lossy(raw);
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(fields)) => Self::from_fields(fields),
            Ok(_) => Self::default(),
            Err(_) => Self {
                title: Some(DEFAULT_TITLE.to_string()),
                body: Some(text.into_owned()),
                ..Self::default()
            },
        }
    }

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let data = match fields.remove("data") {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        Self {
            title: string_field(&fields, "title"),
            body: string_field(&fields, "body"),
            tag: string_field(&fields, "tag"),
            url: string_field(&fields, "url"),
            data,
        }
    }

    /// The click target named by the payload, if any. The top-level `url`
    /// wins over `data.url`.
    pub fn click_target(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
            .or_else(|| non_empty(self.data.get("url").and_then(Value::as_str)))
    }

    /// Title with the default applied.
    pub fn title_or_default(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(DEFAULT_TITLE)
    }
}

/// A field is only taken if it is a string; wrong-typed fields count as
/// absent.
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
