use api::CourseDraft;
use dioxus::prelude::*;
use ui::{
    push_toast, use_admin_auth, use_toasts, AdminDest, AdminSidebar, CourseForm, CourseFormValue,
    ToastLevel,
};

use crate::views::spawn_logout;
use crate::Route;

/// Publish a new listing: multipart form with a client-side image preview.
#[component]
pub fn CourseCreate() -> Element {
    let admin = use_admin_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut busy = use_signal(|| false);

    let handle_submit = move |value: CourseFormValue| {
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
            let result = client.create_course(draft).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Course created successfully".to_string()
                    } else {
                        response.message.clone()
                    };
                    push_toast(toasts, ToastLevel::Success, &message);
                    nav.push(Route::OurCourses {});
                }
                Err(err) => {
                    tracing::error!("course creation failed: {err}");
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
                CourseForm {
                    heading: "Create Course",
                    submit_label: "Create Course",
                    busy: busy(),
                    on_submit: handle_submit,
                }
            }
        }
    }
}
