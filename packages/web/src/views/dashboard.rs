use dioxus::prelude::*;
use ui::{use_admin_auth, use_toasts, AdminDest, AdminSidebar};

use crate::views::spawn_logout;
use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let admin = use_admin_auth();
    let nav = use_navigator();
    let toasts = use_toasts();

    let on_navigate = move |dest: AdminDest| {
        match dest {
            AdminDest::OurCourses => nav.push(Route::OurCourses {}),
            AdminDest::CreateCourse => nav.push(Route::CourseCreate {}),
            AdminDest::Home => nav.push(Route::Home {}),
        };
    };

    let greeting = admin
        .actor()
        .map(|actor| format!("Welcome, {}", actor.full_name()))
        .unwrap_or_default();

    rsx! {
        div {
            class: "layout",
            AdminSidebar {
                on_navigate: on_navigate,
                on_logout: move |_| spawn_logout(admin, nav, toasts),
            }
            main {
                class: "layout__main",
                header {
                    class: "layout__header",
                    h1 { "Dashboard" }
                }
                p { class: "dashboard__greeting", "{greeting}" }
                p { "Manage your listings from the sidebar." }
            }
        }
    }
}
