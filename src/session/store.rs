// src/session/store.rs
use crate::controller::FormController;
use crate::errors::ServerError;
use crate::session::token::{issue_token, SessionKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

struct Entry {
    controller: Arc<Mutex<FormController>>,
    last_seen: Instant,
}

/// A live session handed to a request.
pub struct Session {
    pub token: String,
    /// The caller must send the token back as a cookie.
    pub is_new: bool,
    pub controller: Arc<Mutex<FormController>>,
}

/// Limits applied to the session table.
#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    /// Idle time after which a session is forgotten.
    pub ttl: Duration,
    /// Live sessions kept at most; the least recently seen one is evicted
    /// to make room.
    pub max_sessions: usize,
}

/// In-memory form state per browser. Nothing is written to disk, so a
/// restart forgets every session.
///
/// The table lock is held only for lookup and insert. Each controller has
/// its own lock, which serialises one browser's requests without blocking
/// other browsers during a slow backend call.
pub struct SessionStore {
    limits: SessionLimits,
    scroll_delay: Duration,
    sessions: Mutex<HashMap<SessionKey, Entry>>,
}

impl SessionStore {
    pub fn new(limits: SessionLimits, scroll_delay: Duration) -> Self {
        Self {
            limits,
            scroll_delay,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Resume the session named by `token`, or start a new one when the
    /// token is missing, unknown, or idle past the TTL.
    pub fn open(&self, token: Option<&str>) -> Result<Session, ServerError> {
        let now = Instant::now();
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ServerError::Internal("session table lock poisoned".into()))?;

        let before = sessions.len();
        sessions.retain(|_, e| now.duration_since(e.last_seen) < self.limits.ttl);
        if sessions.len() != before {
            debug!(expired = before - sessions.len(), "pruned idle sessions");
        }

        if let Some(token) = token {
            if let Some(entry) = sessions.get_mut(&SessionKey::of(token)) {
                entry.last_seen = now;
                return Ok(Session {
                    token: token.to_string(),
                    is_new: false,
                    controller: Arc::clone(&entry.controller),
                });
            }
        }

        while sessions.len() >= self.limits.max_sessions.max(1) {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, e)| e.last_seen)
                .map(|(key, _)| *key);
            match oldest {
                Some(key) => {
                    sessions.remove(&key);
                    warn!(max = self.limits.max_sessions, "session table full, evicted oldest");
                }
                None => break,
            }
        }

        let token = issue_token();
        let controller = Arc::new(Mutex::new(FormController::new(self.scroll_delay)));
        sessions.insert(
            SessionKey::of(&token),
            Entry {
                controller: Arc::clone(&controller),
                last_seen: now,
            },
        );
        debug!(live = sessions.len(), "started form session");

        Ok(Session {
            token,
            is_new: true,
            controller,
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}
