/// Main application entry point for the storefront.
/// Renders the navbar and a card per catalog product, all sharing one review board.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::board::ReviewBoard;
use crate::components::product_card::ProductCard;
use crate::config::ClassifierConfig;
use crate::models::product::catalog;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-reviews.css" />
        <Title text="Best Buy" />
        <Router>
            <Routes>
                <Route path="" view=Storefront />
            </Routes>
        </Router>
    }
}

#[component]
pub fn Storefront() -> impl IntoView {
    if use_context::<ClassifierConfig>().is_none() {
        provide_context(ClassifierConfig::default());
    }
    // Signal holding drafts, reviews and in-flight products for every card.
    let board = create_rw_signal(ReviewBoard::for_catalog());

    view! {
        <div class="app-container">
            <nav class="navbar">
                <div class="navbar-brand">{ "Best Buy" }</div>
                <div class="navbar-links">
                    <a href="#">{ "Home" }</a>
                    <a href="#">{ "Categories" }</a>
                    <a href="#">{ "Cart" }</a>
                    <a href="#">{ "Contact" }</a>
                </div>
            </nav>

            <h1 class="store-title">{ "Welcome to Best Buy" }</h1>

            <div class="product-list">
                {catalog().iter().map(|product| view! {
                    <ProductCard product={product.clone()} board=board />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
