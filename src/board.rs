//! Per-product review state: draft text, classified reviews and the set of
//! products with a classification request in flight.

use std::collections::{HashMap, HashSet};

use crate::error::{BoardError, ClassifyError};
use crate::models::product::{catalog, Product, ProductId};
use crate::models::review::{Label, Review};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewBoard {
    known: HashSet<ProductId>,
    drafts: HashMap<ProductId, String>,
    reviews: HashMap<ProductId, Vec<Review>>,
    pending: HashSet<ProductId>,
}

impl ReviewBoard {
    pub fn new<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            known: products.into_iter().map(|product| product.id).collect(),
            ..Self::default()
        }
    }

    /// Board over the storefront catalog.
    pub fn for_catalog() -> Self {
        Self::new(catalog())
    }

    fn ensure_known(&self, product_id: ProductId) -> Result<(), BoardError> {
        if self.known.contains(&product_id) {
            Ok(())
        } else {
            Err(BoardError::UnknownProduct(product_id))
        }
    }

    pub fn set_draft(
        &mut self,
        product_id: ProductId,
        text: impl Into<String>,
    ) -> Result<(), BoardError> {
        self.ensure_known(product_id)?;
        self.drafts.insert(product_id, text.into());
        Ok(())
    }

    pub fn draft(&self, product_id: ProductId) -> &str {
        self.drafts.get(&product_id).map(String::as_str).unwrap_or("")
    }

    /// Classified reviews for a product, oldest first.
    pub fn reviews(&self, product_id: ProductId) -> &[Review] {
        self.reviews
            .get(&product_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_pending(&self, product_id: ProductId) -> bool {
        self.pending.contains(&product_id)
    }

    /// Marks the product as in flight and hands back the draft to classify.
    /// Nothing changes when the submission is rejected.
    pub fn begin_submission(&mut self, product_id: ProductId) -> Result<String, BoardError> {
        self.ensure_known(product_id)?;
        if self.pending.contains(&product_id) {
            return Err(BoardError::AlreadyPending(product_id));
        }
        let text = self.draft(product_id);
        if text.trim().is_empty() {
            return Err(BoardError::BlankDraft(product_id));
        }
        let text = text.to_string();
        self.pending.insert(product_id);
        Ok(text)
    }

    /// Applies the classifier outcome. The product always leaves the pending
    /// set; reviews and draft only change on success.
    pub fn settle(
        &mut self,
        product_id: ProductId,
        text: String,
        outcome: Result<Label, ClassifyError>,
    ) -> Result<Review, ClassifyError> {
        self.pending.remove(&product_id);
        let label = outcome?;
        let review = Review::new(text, label);
        self.reviews
            .entry(product_id)
            .or_default()
            .push(review.clone());
        if let Some(draft) = self.drafts.get_mut(&product_id) {
            draft.clear();
        }
        Ok(review)
    }
}
