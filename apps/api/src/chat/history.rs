//! Conversation history — bounded trailing window of turns per chat session.
//!
//! Only the remote completion path reads this; the local responder is stateless.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_HISTORY_WINDOW: usize = 10;
const MAX_SESSIONS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// Keeps at most `window` of the most recent turns.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    turns: VecDeque<ConversationTurn>,
    window: usize,
    last_active: DateTime<Utc>,
}

impl ConversationHistory {
    pub fn new(window: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(window),
            window,
            last_active: Utc::now(),
        }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.last_active = turn.at;
        self.turns.push_back(turn);
        while self.turns.len() > self.window {
            self.turns.pop_front();
        }
    }

    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.turns.iter().cloned().collect()
    }
}

/// Per-session histories shared across handlers.
///
/// Holds at most `MAX_SESSIONS` sessions; the least recently active one is
/// dropped when a new session would exceed that.
///
/// Reads and writes take separate locks. Concurrent turns on one session may
/// both see the same window, and their exchanges land in completion order.
#[derive(Clone)]
pub struct ConversationStore {
    sessions: Arc<RwLock<HashMap<Uuid, ConversationHistory>>>,
    window: usize,
    max_sessions: usize,
}

impl ConversationStore {
    pub fn new(window: usize) -> Self {
        Self::with_capacity(window, MAX_SESSIONS)
    }

    pub fn with_capacity(window: usize, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            window,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Trailing window for `session`, oldest first. Unknown sessions are empty.
    pub async fn recent(&self, session: Uuid) -> Vec<ConversationTurn> {
        self.sessions
            .read()
            .await
            .get(&session)
            .map(ConversationHistory::turns)
            .unwrap_or_default()
    }

    /// Appends a completed user/assistant exchange.
    pub async fn record_exchange(&self, session: Uuid, user: &str, assistant: &str) {
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(&session) && sessions.len() >= self.max_sessions {
            let stalest = sessions
                .iter()
                .min_by_key(|(_, h)| h.last_active)
                .map(|(id, _)| *id);
            if let Some(id) = stalest {
                debug!("Evicting idle chat session {id}");
                sessions.remove(&id);
            }
        }

        let history = sessions
            .entry(session)
            .or_insert_with(|| ConversationHistory::new(self.window));
        history.push(ConversationTurn::new(Role::User, user));
        history.push(ConversationTurn::new(Role::Assistant, assistant));
        debug!("{} active chat sessions", sessions.len());
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keeps_trailing_window() {
        let mut h = ConversationHistory::new(3);
        for i in 0..5 {
            h.push(ConversationTurn::new(Role::User, format!("m{i}")));
        }
        let contents: Vec<_> = h.turns().into_iter().map(|t| t.content).collect();
        assert_eq!(contents, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        assert_eq!(Role::User.as_str(), "user");
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let store = ConversationStore::new(DEFAULT_HISTORY_WINDOW);
        assert!(store.recent(Uuid::new_v4()).await.is_empty());
    }

    #[tokio::test]
    async fn test_record_exchange_appends_user_then_assistant() {
        let store = ConversationStore::new(DEFAULT_HISTORY_WINDOW);
        let id = Uuid::new_v4();
        store.record_exchange(id, "hi", "hello").await;

        let turns = store.recent(id).await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "hi");
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "hello");
    }

    #[tokio::test]
    async fn test_store_bounds_turns_per_session() {
        let store = ConversationStore::new(4);
        let id = Uuid::new_v4();
        for i in 0..5 {
            store.record_exchange(id, &format!("q{i}"), &format!("a{i}")).await;
        }
        let turns = store.recent(id).await;
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].content, "q3");
        assert_eq!(turns[3].content, "a4");
    }

    #[tokio::test]
    async fn test_store_evicts_stalest_session() {
        let store = ConversationStore::with_capacity(4, 2);
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let third = Uuid::new_v4();

        store.record_exchange(first, "a", "b").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.record_exchange(second, "c", "d").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.record_exchange(third, "e", "f").await;

        assert_eq!(store.session_count().await, 2);
        assert!(store.recent(first).await.is_empty());
        assert_eq!(store.recent(third).await.len(), 2);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = ConversationStore::new(DEFAULT_HISTORY_WINDOW);
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.record_exchange(a, "qa", "aa").await;
        assert!(store.recent(b).await.is_empty());
        assert_eq!(store.recent(a).await.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_exchanges_share_window_and_both_land() {
        let store = ConversationStore::new(DEFAULT_HISTORY_WINDOW);
        let id = Uuid::new_v4();

        let (seen_a, seen_b) = tokio::join!(store.recent(id), store.recent(id));
        assert!(seen_a.is_empty() && seen_b.is_empty());

        tokio::join!(
            store.record_exchange(id, "qa", "aa"),
            store.record_exchange(id, "qb", "ab"),
        );

        let turns = store.recent(id).await;
        assert_eq!(turns.len(), 4);
        // each exchange stays contiguous: user immediately followed by its answer
        for pair in turns.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
            assert_eq!(&pair[0].content[1..], &pair[1].content[1..]);
        }
    }
}
