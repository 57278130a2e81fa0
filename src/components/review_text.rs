use leptos::*;
use crate::models::review::ReviewDisplay;

/// Renders one review entry: the text, a muted arrow and a styled label.
/// Plain entries are shown as-is.
#[component]
pub fn ReviewText(display: ReviewDisplay) -> impl IntoView {
    match display {
        ReviewDisplay::Annotated { text, label } => view! {
            {text}{" "}
            <span class="review-arrow">"➝"</span>{" "}
            <span class=label.css_class()>{format!("[{}]", label)}</span>
        }
        .into_view(),
        ReviewDisplay::Plain(raw) => raw.into_view(),
    }
}
