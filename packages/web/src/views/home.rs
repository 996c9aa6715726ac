use api::{ApiConfig, Course, PublicApi};
use dioxus::prelude::*;
use ui::{use_auth, use_toasts, CourseCard};

use crate::views::spawn_logout;
use crate::Route;

/// Landing view: hero, auth-aware header and a strip of catalog cards.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut courses = use_signal(Vec::<Course>::new);

    // The strip is decoration here; a fetch failure just leaves it empty.
    let _loader = use_resource(move || async move {
        let client = PublicApi::new(ApiConfig::default());
        match client.courses().await {
            Ok(list) => courses.set(list),
            Err(err) => tracing::error!("failed to fetch courses: {err}"),
        }
    });

    rsx! {
        div {
            class: "home",
            header {
                class: "home__header",
                h1 { class: "brand", "CourseDeck" }
                div {
                    class: "home__actions",
                    if auth.is_authenticated() {
                        button {
                            class: "button button--outline",
                            onclick: move |_| spawn_logout(auth, nav, toasts),
                            "Logout"
                        }
                    } else {
                        Link { class: "button button--outline", to: Route::Login {}, "Login" }
                        Link { class: "button button--solid", to: Route::Signup {}, "Sign Up" }
                    }
                }
            }

            section {
                class: "home__hero",
                h2 { "Welcome to CourseDeck" }
                p { "Your one-stop solution for online courses" }
                Link {
                    class: "button button--solid",
                    to: Route::Courses {},
                    "Explore Courses"
                }
            }

            section {
                class: "home__strip",
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
