//! Session domain entities

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Who authored a stored message
///
/// `Background` messages carry context that must survive context-length
/// eviction; they are sent to the model as user turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    User,
    Assistant,
    Background,
}

impl Actor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::User => "user",
            Actor::Assistant => "assistant",
            Actor::Background => "background",
        }
    }

    /// Role this actor takes in an outbound request
    pub fn outbound_role(&self) -> Role {
        match self {
            Actor::Assistant => Role::Assistant,
            Actor::User | Actor::Background => Role::User,
        }
    }

    /// Whether the eviction policy may drop this actor's messages from requests
    pub fn is_evictable(&self) -> bool {
        !matches!(self, Actor::Background)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Actor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Actor::User),
            "assistant" => Ok(Actor::Assistant),
            "background" => Ok(Actor::Background),
            other => Err(DomainError::UnknownActor(other.to_string())),
        }
    }
}

/// Role of a turn in a chat-completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of an outbound chat-completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A stored message in a conversation (Entity)
///
/// Messages are never removed. Eviction only clears `sendable`, which keeps
/// the message in history but out of every later request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub actor: Actor,
    pub message: String,
    pub sendable: bool,
}

impl Message {
    pub fn new(actor: Actor, message: impl Into<String>) -> Self {
        Self {
            actor,
            message: message.into(),
            sendable: true,
        }
    }
}

/// Full state of one conversation (Entity)
///
/// Field order matches the persisted JSON layout:
/// `{ "instructions", "messages": [{ "actor", "message", "sendable" }], "model" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub instructions: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    pub model: Model,
}

impl SessionState {
    pub fn new(instructions: impl Into<String>, model: Model) -> Self {
        Self {
            instructions: instructions.into(),
            messages: Vec::new(),
            model,
        }
    }

    /// Store a message as sendable, in insertion order
    pub fn push(&mut self, actor: Actor, text: impl Into<String>) {
        self.messages.push(Message::new(actor, text));
    }

    /// Build the request turns: system instructions, every sendable message,
    /// then `pending` as a final user turn if given.
    pub fn outbound_turns(&self, pending: Option<&str>) -> Vec<ChatTurn> {
        let mut turns = Vec::with_capacity(self.messages.len() + 2);
        turns.push(ChatTurn::system(self.instructions.clone()));
        turns.extend(
            self.messages
                .iter()
                .filter(|m| m.sendable)
                .map(|m| ChatTurn {
                    role: m.actor.outbound_role(),
                    content: m.message.clone(),
                }),
        );
        if let Some(text) = pending {
            turns.push(ChatTurn::user(text));
        }
        turns
    }

    /// Mark the oldest sendable, evictable message as no longer sendable.
    ///
    /// Returns the index of the evicted message, or `None` when nothing is
    /// left to evict.
    pub fn evict_oldest(&mut self) -> Option<usize> {
        let index = self
            .messages
            .iter()
            .position(|m| m.sendable && m.actor.is_evictable())?;
        self.messages[index].sendable = false;
        Some(index)
    }

    pub fn sendable_count(&self) -> usize {
        self.messages.iter().filter(|m| m.sendable).count()
    }
}
