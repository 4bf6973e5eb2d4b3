// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::window::ViewMode;

pub(crate) const EVENT_STORAGE_PREFIX: &str = "huddle_events_";
pub(crate) const VIEW_STORAGE_KEY: &str = "huddle_calendar_view";

/// The persistence collaborator: a per-key raw string store.
///
/// The core treats any read failure as "no data"; implementations should
/// return `None` rather than propagate errors.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`Storage`], used by tests and as a throwaway default.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// The authenticated user, as supplied by the auth collaborator.
/// The core never validates credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub owner_id: String,
    pub display_name: String,
}

pub(crate) fn events_key(user_id: &str) -> String {
    format!("{EVENT_STORAGE_PREFIX}{user_id}")
}

/// The persisted view-mode preference; any unrecognized stored value is
/// treated as absent and defaults to month.
pub fn load_view_mode<S: Storage + ?Sized>(storage: &S) -> ViewMode {
    match storage.get(VIEW_STORAGE_KEY) {
        Some(raw) => raw.parse().unwrap_or_else(|()| {
            tracing::warn!(raw, "unrecognized stored view mode, defaulting");
            ViewMode::default()
        }),
        None => ViewMode::default(),
    }
}

pub fn persist_view_mode<S: Storage + ?Sized>(storage: &mut S, mode: ViewMode) {
    storage.set(VIEW_STORAGE_KEY, mode.as_ref());
}
