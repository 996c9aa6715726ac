use api::Course;
use dioxus::prelude::*;
use ui::{
    push_toast, truncate_description, use_admin_auth, use_toasts, AdminDest, AdminSidebar,
    ToastLevel,
};

use crate::views::spawn_logout;
use crate::Route;

/// The admin's own listings, with update and delete actions.
#[component]
pub fn OurCourses() -> Element {
    let admin = use_admin_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut courses = use_signal(Vec::<Course>::new);
    let mut loading = use_signal(|| true);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        // re-runs whenever a delete bumps the refresh counter
        let _ = refresh();
        let Some(client) = admin.api() else {
            return;
        };
        match client.admin_courses().await {
            Ok(list) => courses.set(list),
            Err(err) => {
                tracing::error!("failed to fetch admin courses: {err}");
                push_toast(toasts, ToastLevel::Error, &err.message());
            }
        }
        loading.set(false);
    });

    let handle_delete = move |course_id: String| {
        spawn(async move {
            let Some(client) = admin.api() else {
                return;
            };
            match client.delete_course(&course_id).await {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Course deleted".to_string()
                    } else {
                        response.message.clone()
                    };
                    push_toast(toasts, ToastLevel::Success, &message);
                    let mut refresh = refresh;
                    refresh += 1;
                }
                Err(err) => {
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

    let cards: Vec<_> = courses()
        .into_iter()
        .map(|course| {
            let image = course.image_url().to_string();
            let short = truncate_description(&course.description, 100);
            (course.id, course.title, short, course.price, image)
        })
        .collect();

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
                    h1 { "Our Courses" }
                }
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if cards.is_empty() {
                    p { class: "empty-state", "You have not posted any course yet" }
                } else {
                    div {
                        class: "course-grid",
                        for (id, title, description, price, image) in cards {
                            div {
                                key: "{id}",
                                class: "course-card",
                                img {
                                    class: "course-card__image",
                                    src: "{image}",
                                    alt: "{title}",
                                }
                                h2 { class: "course-card__title", "{title}" }
                                p { class: "course-card__description", "{description}" }
                                span { class: "course-card__price", "\u{20b9}{price}" }
                                div {
                                    class: "course-card__actions",
                                    button {
                                        class: "button button--solid",
                                        onclick: {
                                            let course_id = id.clone();
                                            move |_| {
                                                nav.push(Route::CourseUpdate {
                                                    course_id: course_id.clone(),
                                                });
                                            }
                                        },
                                        "Update"
                                    }
                                    button {
                                        class: "button button--danger",
                                        onclick: {
                                            let course_id = id.clone();
                                            move |_| handle_delete(course_id.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
