use leptos::*;
use crate::components::review_text::ReviewText;
use crate::models::review::{Review, ReviewDisplay};

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <h3>{ "Customer Reviews" }</h3>
        <ul class="review-list">
            {move || {
                reviews.get().iter().map(|review| {
                    view! {
                        <li><ReviewText display={ReviewDisplay::from(review)} /></li>
                    }
                }).collect::<Vec<_>>()
            }}
        </ul>
    }
}
