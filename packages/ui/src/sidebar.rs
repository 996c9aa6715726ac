use dioxus::prelude::*;

/// Destinations the storefront sidebar can send the user to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SidebarDest {
    Home,
    Courses,
    Purchases,
    Login,
}

/// Destinations the admin sidebar can send the admin to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AdminDest {
    OurCourses,
    CreateCourse,
    Home,
}

/// Navigation sidebar shared by the admin management views.
#[component]
pub fn AdminSidebar(on_navigate: EventHandler<AdminDest>, on_logout: EventHandler<()>) -> Element {
    rsx! {
        aside {
            class: "sidebar sidebar--admin",
            div {
                class: "sidebar__identity",
                h2 { "I'm Admin" }
            }
            nav {
                ul {
                    li {
                        button {
                            class: "sidebar__entry",
                            onclick: move |_| on_navigate.call(AdminDest::OurCourses),
                            "Our Courses"
                        }
                    }
                    li {
                        button {
                            class: "sidebar__entry",
                            onclick: move |_| on_navigate.call(AdminDest::CreateCourse),
                            "Create Course"
                        }
                    }
                    li {
                        button {
                            class: "sidebar__entry",
                            onclick: move |_| on_navigate.call(AdminDest::Home),
                            "Home"
                        }
                    }
                    li {
                        button {
                            class: "sidebar__entry sidebar__entry--logout",
                            onclick: move |_| on_logout.call(()),
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}

/// Navigation sidebar shared by the catalog and purchases views. The owning
/// view decides what each destination maps to and how logout is performed.
#[component]
pub fn StorefrontSidebar(
    active: SidebarDest,
    logged_in: bool,
    on_navigate: EventHandler<SidebarDest>,
    on_logout: EventHandler<()>,
) -> Element {
    let entry_class = move |dest: SidebarDest| {
        if dest == active {
            "sidebar__entry sidebar__entry--active"
        } else {
            "sidebar__entry"
        }
    };

    rsx! {
        aside {
            class: "sidebar",
            nav {
                ul {
                    li {
                        button {
                            class: entry_class(SidebarDest::Home),
                            onclick: move |_| on_navigate.call(SidebarDest::Home),
                            "Home"
                        }
                    }
                    li {
                        button {
                            class: entry_class(SidebarDest::Courses),
                            onclick: move |_| on_navigate.call(SidebarDest::Courses),
                            "Courses"
                        }
                    }
                    li {
                        button {
                            class: entry_class(SidebarDest::Purchases),
                            onclick: move |_| on_navigate.call(SidebarDest::Purchases),
                            "Purchases"
                        }
                    }
                    li {
                        if logged_in {
                            button {
                                class: "sidebar__entry sidebar__entry--logout",
                                onclick: move |_| on_logout.call(()),
                                "Logout"
                            }
                        } else {
                            button {
                                class: entry_class(SidebarDest::Login),
                                onclick: move |_| on_navigate.call(SidebarDest::Login),
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}
