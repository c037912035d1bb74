#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Role::User => return String::from("You"),
            Role::Assistant => return String::from("Eagles AI"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MessageType {
    #[default]
    Normal,
    Error,
}

/// One entry of the chat transcript. Messages are only ever appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    mtype: MessageType,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Message {
        return Message {
            role,
            content: content.to_string(),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(role: Role, mtype: MessageType, content: &str) -> Message {
        return Message {
            role,
            content: content.to_string(),
            mtype,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }
}

/// Conversation state owned by the backend. It is stored and replayed as-is,
/// never inspected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationContext(Value);

impl Default for ConversationContext {
    fn default() -> ConversationContext {
        return ConversationContext(Value::Array(vec![]));
    }
}

impl ConversationContext {
    pub fn new(value: Value) -> ConversationContext {
        return ConversationContext(value);
    }

    pub fn as_value(&self) -> &Value {
        return &self.0;
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => return true,
            Value::Array(items) => return items.is_empty(),
            Value::Object(fields) => return fields.is_empty(),
            Value::String(text) => return text.is_empty(),
            _ => return false,
        }
    }
}
