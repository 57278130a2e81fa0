use leptos::*;

#[component]
pub fn ReviewForm(
    #[prop(into)] draft: Signal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="review-input"
            placeholder="Write a review..."
            prop:value=move || draft.get()
            on:input=move |e| on_input.call(event_target_value(&e))
        />
        <button
            class="submit-button"
            disabled=move || pending.get()
            on:click=move |_| on_submit.call(())
        >
            {move || if pending.get() { "Checking..." } else { "Submit Review" }}
        </button>
    }
}
