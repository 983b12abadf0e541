//! Injectable state containers, provided to the component tree through
//! sycamore's context. Each store wraps an `RcSignal` so views subscribe
//! by reading and stores mutate by setting; no store calls another.

use std::cell::Cell;
use std::rc::Rc;

use common::user::ANONYMOUS_ID;
use common::{ApiError, User};
use gloo_console::log;
use gloo_storage::{SessionStorage, Storage};
use sycamore::prelude::*;

use crate::api;

/// Session-storage key holding the serialized profile.
const USER_KEY: &str = "user";

/// The visitor's identity. Restored from session storage at startup,
/// persisted on every successful mutation, collapsed back to the
/// anonymous sentinel on reset.
#[derive(Clone)]
pub struct UserStore {
    user: RcSignal<User>,
}

impl UserStore {
    /// Restore the persisted profile; absent or malformed data yields
    /// the anonymous sentinel.
    pub fn load() -> Self {
        let user = SessionStorage::get::<User>(USER_KEY).unwrap_or_else(|_| User::anonymous());
        UserStore {
            user: create_rc_signal(user),
        }
    }

    pub fn user(&self) -> &RcSignal<User> {
        &self.user
    }

    /// Untracked snapshot of the current profile.
    pub fn current(&self) -> User {
        (*self.user.get_untracked()).clone()
    }

    fn replace(&self, user: User) {
        if let Err(err) = SessionStorage::set(USER_KEY, &user) {
            log!(format!("failed to persist profile: {err}"));
        }
        self.user.set(user);
    }

    /// Look the account up by email. On `NotFound` the profile is left
    /// untouched; the caller decides whether to offer registration.
    pub async fn fetch_by_email(&self, email: &str) -> Result<(), ApiError> {
        let raw = api::lookup_user(email).await?;
        self.replace(User::from(raw));
        Ok(())
    }

    /// Create an account. A `BadRequest` carries the server's validation
    /// message so the form can show it as-is.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        referral_code: Option<&str>,
    ) -> Result<(), ApiError> {
        let raw = api::register_user(name, email, referral_code).await?;
        self.replace(User::from(raw));
        Ok(())
    }

    /// Fire-and-forget; the outcome surfaces as a notice only, never as
    /// a state change.
    pub async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        api::resend_verification(email).await
    }

    /// Re-sync the profile with the server. Callers collapse to the
    /// sentinel when this fails, rather than keeping stale identity.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let email = self.current().email;
        self.fetch_by_email(&email).await
    }

    /// Remember the email typed into the lookup form so the register
    /// dialog can pre-fill it. In-memory only, never persisted.
    pub fn set_provisional_email(&self, email: &str) {
        let mut user = self.current();
        user.email = email.to_string();
        self.user.set(user);
    }

    /// Clear the persisted profile and return to the anonymous sentinel.
    pub fn reset(&self) {
        SessionStorage::delete(USER_KEY);
        self.user.set(User::anonymous());
    }
}

/// The user's rank on the waitlist. Never persisted; scoped to the
/// currently loaded user id and cleared on reset.
#[derive(Clone)]
pub struct PositionStore {
    position: RcSignal<u64>,
}

impl PositionStore {
    pub fn new() -> Self {
        PositionStore {
            position: create_rc_signal(0),
        }
    }

    /// 0 means "no rank loaded".
    pub fn position(&self) -> &RcSignal<u64> {
        &self.position
    }

    /// Fetch the rank for `user_id`. Must not be called with the
    /// anonymous sentinel. A 404 means the user is not ranked yet and
    /// clears the rank instead of erroring.
    pub async fn fetch(&self, user_id: u64) -> Result<(), ApiError> {
        if user_id == ANONYMOUS_ID {
            return Err(ApiError::Transport("no account loaded".to_string()));
        }
        match api::fetch_position(user_id).await {
            Ok(position) => {
                self.position.set(position);
                Ok(())
            }
            Err(ApiError::NotFound) => {
                self.position.set(0);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub fn clear(&self) {
        self.position.set(0);
    }
}

/// Visibility of the registration dialog.
#[derive(Clone)]
pub struct DialogStore {
    register_open: RcSignal<bool>,
}

impl DialogStore {
    pub fn new() -> Self {
        DialogStore {
            register_open: create_rc_signal(false),
        }
    }

    pub fn register_open(&self) -> &RcSignal<bool> {
        &self.register_open
    }

    pub fn set(&self, open: bool) {
        self.register_open.set(open);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Danger,
}

/// A dismissible transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
    pub tone: Tone,
}

/// Notification store backing the overlay in the corner of the page.
#[derive(Clone)]
pub struct Notices {
    items: RcSignal<Vec<Notice>>,
    next_id: Rc<Cell<u32>>,
}

impl Notices {
    pub fn new() -> Self {
        Notices {
            items: create_rc_signal(Vec::new()),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn items(&self) -> &RcSignal<Vec<Notice>> {
        &self.items
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(text.into(), Tone::Info);
    }

    pub fn danger(&self, text: impl Into<String>) {
        self.push(text.into(), Tone::Danger);
    }

    fn push(&self, text: String, tone: Tone) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let mut items = (*self.items.get_untracked()).clone();
        items.push(Notice { id, text, tone });
        self.items.set(items);
    }

    pub fn dismiss(&self, id: u32) {
        let items = self
            .items
            .get_untracked()
            .iter()
            .filter(|notice| notice.id != id)
            .cloned()
            .collect();
        self.items.set(items);
    }
}
