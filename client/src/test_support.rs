//! Fixtures shared by unit tests: sample users, a scripted transport, and
//! recording session effects.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::net::types::UserProfile;
use crate::state::notice::Notice;
use crate::state::session::SessionEffects;
use crate::util::storage::MemoryStorage;
use crate::util::token_store::TokenStore;

pub fn user(id: i64, role: &str) -> UserProfile {
    UserProfile {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.org"),
        first_name: None,
        last_name: None,
        role: role.to_owned(),
        created_at: "2024-01-01T00:00:00.000Z".to_owned(),
    }
}

pub fn auth_body(user: &UserProfile, token: &str) -> String {
    serde_json::json!({ "user": user, "token": token }).to_string()
}

pub fn me_body(user: &UserProfile) -> String {
    serde_json::json!({ "user": user }).to_string()
}

pub fn store(storage: &MemoryStorage) -> TokenStore<MemoryStorage> {
    TokenStore::new(storage.clone(), &ClientConfig::default())
}

/// Transport that replays queued replies in order and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: impl Into<String>) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.into() }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

/// Effects sink that records redirects and notices.
#[derive(Clone, Default)]
pub struct RecordingEffects {
    redirects: Rc<RefCell<Vec<String>>>,
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl SessionEffects for RecordingEffects {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
