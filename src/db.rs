use std::{cmp::Reverse, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

pub type DbHandle = Arc<RwLock<Db>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    /// Unix millis.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    /// `[creator, participant]`
    pub participants: [String; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
}

impl Conversation {
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    fn last_activity(&self) -> i64 {
        self.last_message.as_ref().map_or(0, |m| m.timestamp)
    }
}

/// A conversation as one participant sees it in their list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    #[serde(flatten)]
    pub conversation: Conversation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    Yes,
    No,
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::now_v7().simple())
}

/// Process-wide store. Users are fixed, conversations and messages only grow.
#[derive(Debug)]
pub struct Db {
    users: Vec<User>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}

impl Db {
    pub fn new() -> Self {
        let users = [
            ("user_1", "Alice (You)"),
            ("user_2", "Bob"),
            ("user_3", "Charlie"),
        ]
        .into_iter()
        .map(|(id, name)| User { id: id.to_owned(), name: name.to_owned() })
        .collect();

        Self {
            users,
            conversations: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn into_handle(self) -> DbHandle {
        Arc::new(RwLock::new(self))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Conversations `user_id` takes part in, most recently active first.
    /// Conversations without messages sort last, ties keep insertion order.
    pub fn conversations_for(&self, user_id: &str) -> Vec<ConversationView> {
        let mut views: Vec<ConversationView> = self
            .conversations
            .iter()
            .filter(|c| c.has_participant(user_id))
            .map(|c| {
                let other_user = c
                    .participants
                    .iter()
                    .find(|p| *p != user_id)
                    .and_then(|p| self.user(p))
                    .cloned();

                ConversationView {
                    conversation: c.clone(),
                    other_user,
                }
            })
            .collect();

        views.sort_by_key(|v| Reverse(v.conversation.last_activity()));
        views
    }

    pub fn find_conversation_between(&self, a: &str, b: &str) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.has_participant(a) && c.has_participant(b))
    }

    pub fn find_or_create_conversation(
        &mut self,
        user_id: &str,
        participant_id: &str,
    ) -> (Conversation, Created) {
        if let Some(existing) = self.find_conversation_between(user_id, participant_id) {
            return (existing.clone(), Created::No);
        }

        let conversation = Conversation {
            id: new_id("conv"),
            participants: [user_id.to_owned(), participant_id.to_owned()],
            last_message: None,
        };
        tracing::debug!(id = %conversation.id, user_id, participant_id, "conversation created");

        self.conversations.push(conversation.clone());
        (conversation, Created::Yes)
    }

    /// Messages of a conversation, oldest first.
    pub fn messages_in(&self, conversation_id: &str) -> Vec<Message> {
        let mut msgs: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect();

        msgs.sort_by_key(|m| m.timestamp);
        msgs
    }

    /// Appends a message and makes it the conversation's last message.
    /// `None` if the conversation doesn't exist.
    pub fn append_message(
        &mut self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
        timestamp: i64,
    ) -> Option<Message> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)?;

        let message = Message {
            id: new_id("msg"),
            conversation_id: conversation_id.to_owned(),
            sender_id: sender_id.to_owned(),
            content: content.to_owned(),
            timestamp,
        };

        conversation.last_message = Some(message.clone());
        self.messages.push(message.clone());

        tracing::debug!(id = %message.id, conversation_id, sender_id, "message appended");
        Some(message)
    }
}
