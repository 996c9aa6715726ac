//! Authentication contexts for the two actor kinds.
//!
//! One [`SessionHandle`] per kind is provided at the app root and read by
//! every view through [`use_auth`] / [`use_admin_auth`] — the single source
//! of truth for "is this actor authenticated" within a render pass. The
//! handle writes through to the platform session store on login/logout, so
//! the persisted state and the signal can never disagree after a mutation.
//!
//! The user and admin handles share no state: distinct storage keys,
//! distinct login routes, distinct context entries. Both may be
//! authenticated at once.

use dioxus::prelude::*;

use api::{ApiConfig, AuthorizedApi, Role};
use store::{Actor, KeyValueStorage, Session, SessionKeys, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_storage() -> store::LocalStorage {
    store::LocalStorage::new()
}

/// Process-wide in-memory fallback, so the session contract also holds off
/// the web platform (and in tests).
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn platform_storage() -> store::MemoryStorage {
    use std::sync::OnceLock;
    static STORAGE: OnceLock<store::MemoryStorage> = OnceLock::new();
    STORAGE.get_or_init(store::MemoryStorage::new).clone()
}

fn session_store(keys: SessionKeys) -> SessionStore<impl KeyValueStorage> {
    SessionStore::new(platform_storage(), keys)
}

/// Read/write access to one actor kind's session.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: Signal<Session>,
    keys: SessionKeys,
    role: Role,
    login_path: &'static str,
}

impl SessionHandle {
    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn actor(&self) -> Option<Actor> {
        self.session.read().actor().cloned()
    }

    /// Login view for this actor kind.
    pub fn login_path(&self) -> &'static str {
        self.login_path
    }

    /// Overwrite the session with the given pair, persisting both fields.
    /// Guards re-rendering after this call observe the new session.
    pub fn login(&self, actor: &Actor, token: &str) {
        let session = session_store(self.keys).login(actor, token);
        let mut signal = self.session;
        signal.set(session);
    }

    /// Clear the session (memory and storage) and land on this kind's
    /// login view.
    pub fn logout(&self, nav: Navigator) {
        session_store(self.keys).logout();
        let mut signal = self.session;
        signal.set(Session::Anonymous);
        nav.push(self.login_path);
    }

    /// An authorized client for the current credential, if any.
    pub fn api(&self) -> Option<AuthorizedApi> {
        self.session.read().token().map(|token| {
            AuthorizedApi::new(ApiConfig::default(), self.role, token.to_string())
        })
    }
}

#[derive(Clone, Copy)]
struct UserAuth(SessionHandle);

#[derive(Clone, Copy)]
struct AdminAuth(SessionHandle);

/// The end-user session handle.
pub fn use_auth() -> SessionHandle {
    use_context::<UserAuth>().0
}

/// The admin session handle.
pub fn use_admin_auth() -> SessionHandle {
    use_context::<AdminAuth>().0
}

/// Provider component that manages the end-user session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(|| session_store(SessionKeys::USER).current());
    use_context_provider(|| {
        UserAuth(SessionHandle {
            session,
            keys: SessionKeys::USER,
            role: Role::User,
            login_path: "/login",
        })
    });

    rsx! {
        {children}
    }
}

/// Provider component that manages the admin session.
#[component]
pub fn AdminAuthProvider(children: Element) -> Element {
    let session = use_signal(|| session_store(SessionKeys::ADMIN).current());
    use_context_provider(|| {
        AdminAuth(SessionHandle {
            session,
            keys: SessionKeys::ADMIN,
            role: Role::Admin,
            login_path: "/admin/login",
        })
    });

    rsx! {
        {children}
    }
}
