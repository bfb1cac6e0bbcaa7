pub use role_override::{derive_effective_user, FieldOverride, RoleOverride};

mod role_override;

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::{authclient::User, roles};

/// Observable session state.
///
/// Holds the real user behind the session cookie, whether a fetch is in
/// flight, the admin preview override, and the effective user derived from
/// the two. Each piece can be read as a snapshot or subscribed to. Clones
/// share the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

struct Inner {
    user: watch::Sender<Option<User>>,
    loading: watch::Sender<bool>,
    role_override: watch::Sender<Option<RoleOverride>>,
    effective: watch::Sender<Option<User>>,
    // held across an input update and the recompute so `effective` never
    // lags behind `user` and `role_override`
    write_lock: Mutex<()>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Starts without a user and with `loading` set, since nothing is known
    /// until the first fetch completes.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                user: watch::Sender::new(None),
                loading: watch::Sender::new(true),
                role_override: watch::Sender::new(None),
                effective: watch::Sender::new(None),
                write_lock: Mutex::new(()),
            }),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.inner.user.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        *self.inner.loading.borrow()
    }

    pub fn role_override(&self) -> Option<RoleOverride> {
        self.inner.role_override.borrow().clone()
    }

    pub fn effective_user(&self) -> Option<User> {
        self.inner.effective.borrow().clone()
    }

    pub fn subscribe_user(&self) -> watch::Receiver<Option<User>> {
        self.inner.user.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.inner.loading.subscribe()
    }

    pub fn subscribe_role_override(&self) -> watch::Receiver<Option<RoleOverride>> {
        self.inner.role_override.subscribe()
    }

    pub fn subscribe_effective_user(&self) -> watch::Receiver<Option<User>> {
        self.inner.effective.subscribe()
    }

    pub(crate) fn set_user(&self, user: Option<User>) {
        let _guard = self.write_guard();
        self.inner.user.send_replace(user);
        self.recompute();
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.inner.loading.send_replace(loading);
    }

    /// Sets the preview override. It only takes effect while the real user
    /// is an admin.
    pub fn set_role_override(&self, role_override: Option<RoleOverride>) {
        let _guard = self.write_guard();
        if role_override.is_some()
            && !self
                .inner
                .user
                .borrow()
                .as_ref()
                .is_some_and(|user| user.is_admin)
        {
            log::debug!("Role override set without an admin session, ignoring it for now");
        }
        self.inner.role_override.send_replace(role_override);
        self.recompute();
    }

    pub fn clear_role_override(&self) {
        self.set_role_override(None);
    }

    /// Whether the effective user ranks at least `required_role`. No user
    /// means no role.
    pub fn has_role(&self, required_role: &str) -> bool {
        let effective = self.inner.effective.borrow();
        let role = effective
            .as_ref()
            .and_then(|user| user.highest_role.as_deref());
        roles::has_required_role(role, required_role)
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .effective
            .borrow()
            .as_ref()
            .is_some_and(|user| user.is_admin)
    }

    fn write_guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.inner
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn recompute(&self) {
        let effective = derive_effective_user(
            self.inner.user.borrow().as_ref(),
            self.inner.role_override.borrow().as_ref(),
        );
        self.inner.effective.send_replace(effective);
    }
}
