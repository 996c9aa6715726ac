use api::Course;
use dioxus::prelude::*;

/// Shorten a description for card display, appending an ellipsis.
/// Counts characters, not bytes, so multibyte text never splits mid-char.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// One catalog entry: image, title, shortened description, price and a
/// buy action reported back to the owning view.
#[component]
pub fn CourseCard(course: Course, on_buy: EventHandler<String>) -> Element {
    let course_id = course.id.clone();
    let image_url = course.image_url().to_string();
    let short_description = truncate_description(&course.description, 100);

    rsx! {
        div {
            class: "course-card",
            img {
                class: "course-card__image",
                src: "{image_url}",
                alt: "{course.title}",
            }
            h2 { class: "course-card__title", "{course.title}" }
            p {
                class: "course-card__description",
                "{short_description}"
            }
            div {
                class: "course-card__pricing",
                span {
                    class: "course-card__price",
                    "\u{20b9}{course.price} "
                    span { class: "course-card__price-struck", "5999" }
                }
                span { class: "course-card__discount", "20% off" }
            }
            button {
                class: "course-card__buy",
                onclick: move |_| on_buy.call(course_id.clone()),
                "Buy Now"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_description("short", 100), "short");
    }

    #[test]
    fn test_truncate_cuts_long_text() {
        let long = "x".repeat(120);
        let cut = truncate_description(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let text = "日本語のテキスト".repeat(20);
        let cut = truncate_description(&text, 100);
        assert!(cut.ends_with("..."));
    }
}
