//! Chat-session records and their persisted collection.
//!
//! Sessions mirror what the chat client keeps: an ordered list of
//! conversations, each an ordered list of turns. The whole collection is
//! read and written wholesale - there is exactly one writer, so no partial
//! updates or locking are needed. A missing store file reads as an empty
//! collection.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::Result;

/// Fixed namespace the collection is stored under.
pub const SESSION_STORE_FILE: &str = "code_mentor_sessions.json";

/// Shown to the user when the transport to the backend itself fails; the
/// session is left intact so they can retry.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Sorry, there was an error connecting to the AI. Please try again.";

const TITLE_MAX_CHARS: usize = 40;
const RECENT_SESSIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
}

impl ChatTurn {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: now_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<ChatTurn>,
}

impl ChatSession {
    fn new(first_message: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: derive_title(first_message),
            messages: Vec::new(),
        }
    }
}

/// Title rule: the first characters of the conversation's opening message.
fn derive_title(text: &str) -> String {
    let prefix: String = text.chars().take(TITLE_MAX_CHARS).collect();
    format!("{prefix}...")
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The persisted list of conversations.
pub struct SessionStore {
    path: PathBuf,
    sessions: Vec<ChatSession>,
}

impl SessionStore {
    /// Open the store at `path`. A missing file is an empty collection; a
    /// present-but-unreadable one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let sessions = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, sessions })
    }

    /// Start a conversation with its opening user message. Returns the new
    /// session's id.
    pub fn start_session(&mut self, first_message: &str) -> String {
        let mut session = ChatSession::new(first_message);
        session
            .messages
            .push(ChatTurn::new(Sender::User, first_message));
        let id = session.id.clone();
        self.sessions.push(session);
        id
    }

    /// Append a turn to an existing session and refresh its title from the
    /// opening message. Unknown ids are ignored.
    pub fn append(&mut self, session_id: &str, sender: Sender, text: &str) {
        if let Some(session) = self.sessions.iter_mut().find(|s| s.id == session_id) {
            session.messages.push(ChatTurn::new(sender, text));
            if let Some(first) = session.messages.first() {
                session.title = derive_title(&first.text);
            }
        }
    }

    pub fn get(&self, session_id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// The most recent conversations, oldest first (at most eight).
    pub fn recent(&self) -> &[ChatSession] {
        let start = self.sessions.len().saturating_sub(RECENT_SESSIONS);
        &self.sessions[start..]
    }

    /// Explicitly delete a conversation.
    pub fn remove(&mut self, session_id: &str) {
        self.sessions.retain(|s| s.id != session_id);
    }

    /// Evict everything but the `keep` most recent conversations.
    pub fn retain_recent(&mut self, keep: usize) {
        let excess = self.sessions.len().saturating_sub(keep);
        self.sessions.drain(..excess);
    }

    /// Write the whole collection back to disk.
    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string(&self.sessions)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
