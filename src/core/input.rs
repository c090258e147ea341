//! Coercion of loosely typed request input into conversation references.

use crate::core::error::ValidationError;
use crate::infrastructure::entities::ConversationKey;
use serde_json::{Map, Value};

/// Body of an echo request, as sent by the client.
///
/// Both fields are kept untyped so that wrong types can be reported as
/// validation failures rather than body rejections.
#[derive(Debug, Default, Clone)]
pub struct EchoRequest {
    pub message: Value,
    pub conversation_id: Value,
}

impl EchoRequest {
    pub fn new(message: impl Into<String>, conversation_id: Option<ConversationKey>) -> Self {
        EchoRequest {
            message: Value::String(message.into()),
            conversation_id: conversation_id.map_or(Value::Null, |key| key.0),
        }
    }

    /// Reads `message` and `conversationId` from a JSON object body.
    ///
    /// A missing, unreadable or non-object body carries no fields, so it fails
    /// later as a non-string message.
    pub fn from_body(body: Option<Value>) -> Self {
        match body {
            Some(Value::Object(mut fields)) => EchoRequest {
                message: take(&mut fields, "message"),
                conversation_id: take(&mut fields, "conversationId"),
            },
            _ => EchoRequest::default(),
        }
    }

    /// Splits the request into message text and the conversation to append to.
    ///
    /// `None` means a new conversation must be opened. Any other supplied
    /// reference is passed on untouched for the store to resolve.
    pub fn into_parts(self) -> Result<(String, Option<ConversationKey>), ValidationError> {
        let Value::String(message) = self.message else {
            return Err(ValidationError::MessageNotString);
        };

        let conversation = (!is_falsy(&self.conversation_id))
            .then(|| ConversationKey(self.conversation_id));

        Ok((message, conversation))
    }
}

fn take(fields: &mut Map<String, Value>, key: &str) -> Value {
    fields.remove(key).unwrap_or_default()
}

/// `null`, `false`, `0` and `""` select a new conversation.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Parses a conversation id taken from a URL path segment.
///
/// Accepts anything that reads as a finite number: decimals with optional
/// sign, fraction and exponent, `0x`/`0o`/`0b` literals, surrounding
/// whitespace, and blank text (zero). Integral values within `i64` become
/// integer references; others stay fractional and simply match nothing.
pub fn parse_conversation_id(raw: &str) -> Result<ConversationKey, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::InvalidConversationId);
    }

    let number = numeric_value(raw)
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::InvalidConversationId)?;

    // 2^63: the first integral f64 outside i64
    let value = if number.fract() == 0.0 && number.abs() < 9_223_372_036_854_775_808.0 {
        Value::from(number as i64)
    } else {
        Value::from(number)
    };

    Ok(ConversationKey(value))
}

fn numeric_value(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_value(&text[2..], radix);
    }

    // keeps `inf`, `nan` and friends away from the float parser
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

fn radix_value(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
