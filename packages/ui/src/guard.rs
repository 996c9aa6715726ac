//! Route guards for protected views.
//!
//! A guard reads its session context synchronously on every render. Anything
//! short of a full session renders a redirect to the fallback path instead
//! of the wrapped content — the children are never mounted for an anonymous
//! actor.

use dioxus::prelude::*;

use crate::auth::{use_admin_auth, use_auth};

/// Gate a subtree on the end-user session.
#[component]
pub fn ProtectedRoute(
    #[props(default = "/login".to_string())] redirect_path: String,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth.is_authenticated() {
        tracing::debug!("anonymous user, redirecting to {redirect_path}");
        nav.replace(redirect_path.as_str());
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Gate a subtree on the admin session.
#[component]
pub fn AdminProtectedRoute(
    #[props(default = "/admin/login".to_string())] redirect_path: String,
    children: Element,
) -> Element {
    let auth = use_admin_auth();
    let nav = use_navigator();

    if !auth.is_authenticated() {
        tracing::debug!("anonymous admin, redirecting to {redirect_path}");
        nav.replace(redirect_path.as_str());
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
