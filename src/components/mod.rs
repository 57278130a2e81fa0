pub mod product_card;
pub mod review_form;
pub mod review_text;
pub mod reviews_list;
