use api::{Course, CourseDraft};
use dioxus::prelude::*;
use ui::{
    push_toast, use_admin_auth, use_toasts, AdminDest, AdminSidebar, CourseForm, CourseFormValue,
    ToastLevel,
};

use crate::views::spawn_logout;
use crate::Route;

/// Edit an existing listing. Same form as create, pre-filled once the
/// course detail has loaded.
#[component]
pub fn CourseUpdate(course_id: String) -> Element {
    let admin = use_admin_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut course = use_signal(|| Option::<Course>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let detail_id = course_id.clone();
    let _loader = use_resource(move || {
        let course_id = detail_id.clone();
        async move {
            let Some(client) = admin.api() else {
                return;
            };
            match client.course(&course_id).await {
                Ok(detail) => course.set(Some(detail)),
                Err(err) => {
                    tracing::error!("failed to load course {course_id}: {err}");
                    load_error.set(Some(err.message()));
                }
            }
        }
    });

    let update_id = course_id.clone();
    let handle_submit = move |value: CourseFormValue| {
        let course_id = update_id.clone();
        spawn(async move {
            let Some(client) = admin.api() else {
                nav.push(Route::AdminLogin {});
                return;
            };
            busy.set(true);
            let draft = CourseDraft {
                title: value.title,
                description: value.description,
                price: value.price,
                image: value.image,
            };
            let result = client.update_course(&course_id, draft).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Course updated successfully".to_string()
                    } else {
                        response.message.clone()
                    };
                    push_toast(toasts, ToastLevel::Success, &message);
                    nav.push(Route::OurCourses {});
                }
                Err(err) => {
                    tracing::error!("course update failed: {err}");
                    push_toast(toasts, ToastLevel::Error, &err.message());
                }
            }
        });
    };

    let on_navigate = move |dest: AdminDest| {
        match dest {
            AdminDest::OurCourses => nav.push(Route::OurCourses {}),
            AdminDest::CreateCourse => nav.push(Route::CourseCreate {}),
            AdminDest::Home => nav.push(Route::Home {}),
        };
    };

    rsx! {
        div {
            class: "layout",
            AdminSidebar {
                on_navigate: on_navigate,
                on_logout: move |_| spawn_logout(admin, nav, toasts),
            }
            main {
                class: "layout__main",
                if let Some(message) = load_error() {
                    div { class: "form-error", "{message}" }
                } else if let Some(detail) = course() {
                    CourseForm {
                        heading: "Update Course",
                        submit_label: "Update Course",
                        initial_title: detail.title,
                        initial_description: detail.description,
                        initial_price: Some(detail.price),
                        busy: busy(),
                        on_submit: handle_submit,
                    }
                } else {
                    p { class: "empty-state", "Loading..." }
                }
            }
        }
    }
}
