//! Persistence for the bearer token and the cached user profile.
//!
//! The token is stored raw; the profile is stored as JSON. Login, register,
//! and logout write or clear both keys together. Only a successful
//! revalidation rewrites the profile key alone.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use crate::config::ClientConfig;
use crate::net::types::UserProfile;

use super::storage::KeyValueStore;

#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    storage: S,
    token_key: String,
    profile_key: String,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S, config: &ClientConfig) -> Self {
        Self {
            storage,
            token_key: config.token_key.clone(),
            profile_key: config.profile_key.clone(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(&self.token_key)
            .filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set_item(&self.token_key, token);
    }

    pub fn remove_token(&self) {
        self.storage.remove_item(&self.token_key);
    }

    /// Cached profile, or `None` if absent or unreadable.
    pub fn cached_profile(&self) -> Option<UserProfile> {
        let raw = self.storage.get_item(&self.profile_key)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                leptos::logging::warn!("token store: ignoring malformed cached profile: {e}");
                None
            }
        }
    }

    pub fn set_cached_profile(&self, profile: &UserProfile) {
        let Ok(raw) = serde_json::to_string(profile) else {
            return;
        };
        self.storage.set_item(&self.profile_key, &raw);
    }

    pub fn remove_cached_profile(&self) {
        self.storage.remove_item(&self.profile_key);
    }

    /// Write token and profile as a pair.
    pub fn save_session(&self, token: &str, profile: &UserProfile) {
        self.set_token(token);
        self.set_cached_profile(profile);
    }

    /// Clear token and profile as a pair.
    pub fn clear(&self) {
        self.remove_token();
        self.remove_cached_profile();
    }
}
