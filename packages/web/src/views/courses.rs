use api::{ApiConfig, Course, PublicApi};
use dioxus::prelude::*;
use ui::{
    push_toast, use_auth, use_toasts, CourseCard, SidebarDest, StorefrontSidebar, ToastLevel,
};

use crate::views::spawn_logout;
use crate::Route;

/// The public catalog. One fetch on mount, no automatic retry.
#[component]
pub fn Courses() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut courses = use_signal(Vec::<Course>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let client = PublicApi::new(ApiConfig::default());
        match client.courses().await {
            Ok(list) => courses.set(list),
            Err(err) => {
                tracing::error!("failed to fetch courses: {err}");
                push_toast(toasts, ToastLevel::Error, "Error fetching courses");
            }
        }
        loading.set(false);
    });

    let on_navigate = move |dest: SidebarDest| {
        match dest {
            SidebarDest::Home => nav.push(Route::Home {}),
            SidebarDest::Courses => nav.push(Route::Courses {}),
            SidebarDest::Purchases => nav.push(Route::Purchases {}),
            SidebarDest::Login => nav.push(Route::Login {}),
        };
    };

    rsx! {
        div {
            class: "layout",
            StorefrontSidebar {
                active: SidebarDest::Courses,
                logged_in: auth.is_authenticated(),
                on_navigate: on_navigate,
                on_logout: move |_| spawn_logout(auth, nav, toasts),
            }
            main {
                class: "layout__main",
                header {
                    class: "layout__header",
                    h1 { "Courses" }
                }
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if courses().is_empty() {
                    p { class: "empty-state", "No course posted yet by admin" }
                } else {
                    div {
                        class: "course-grid",
                        for course in courses() {
                            CourseCard {
                                key: "{course.id}",
                                course: course.clone(),
                                on_buy: move |id: String| {
                                    nav.push(Route::Buy { course_id: id });
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
