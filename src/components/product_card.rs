/// One catalog entry: image, name, price, its classified reviews and the
/// review form wired to the submission flow.
use leptos::*;
use leptos::logging::{log, warn};
use crate::board::ReviewBoard;
use crate::classifier::HttpClassifier;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::config::ClassifierConfig;
use crate::error::SubmitError;
use crate::models::product::{Product, ProductId};
use crate::models::review::Review;
use crate::submit::{submit_review, BrowserAlert};

/// One product's slice of the shared board. Memos, so edits to other
/// products do not re-render this card.
#[derive(Clone, Copy)]
pub struct CardSignals {
    pub reviews: Memo<Vec<Review>>,
    pub draft: Memo<String>,
    pub pending: Memo<bool>,
}

impl CardSignals {
    pub fn new(board: RwSignal<ReviewBoard>, product_id: ProductId) -> Self {
        Self {
            reviews: create_memo(move |_| board.with(|b| b.reviews(product_id).to_vec())),
            draft: create_memo(move |_| board.with(|b| b.draft(product_id).to_string())),
            pending: create_memo(move |_| board.with(|b| b.is_pending(product_id))),
        }
    }
}

#[component]
pub fn ProductCard(product: Product, board: RwSignal<ReviewBoard>) -> impl IntoView {
    let product_id = product.id;
    let config = use_context::<ClassifierConfig>().unwrap_or_default();

    let card = CardSignals::new(board, product_id);

    let on_input = Callback::new(move |text: String| {
        board.update(|b| {
            if let Err(err) = b.set_draft(product_id, text) {
                warn!("[INPUT] {}", err);
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        let classifier = HttpClassifier::new(config.endpoint.clone());
        let notifier = BrowserAlert::new(config.unreachable_message.clone());
        spawn_local(async move {
            match submit_review(&board, &classifier, &notifier, product_id).await {
                Ok(review) => log!("[SUBMIT] Product {} now shows \"{}\"", product_id, review),
                Err(SubmitError::Rejected(reason)) => log!("[SUBMIT] Ignored: {}", reason),
                Err(err) => warn!("[SUBMIT] Product {}: {}", product_id, err),
            }
        });
    });

    view! {
        <div class="product-card">
            <img src={product.image.clone()} alt={product.name.clone()} class="product-image" />
            <h2>{ product.name.clone() }</h2>
            <p class="price">{ product.display_price() }</p>
            <ReviewsList reviews={card.reviews} />
            <ReviewForm draft={card.draft} pending={card.pending} on_input=on_input on_submit=on_submit />
        </div>
    }
}
