//! The review submission flow: guard, classify, settle.

use std::cell::RefCell;

use leptos::logging::{error, log, warn};
use leptos::{RwSignal, SignalUpdate};

use crate::board::ReviewBoard;
use crate::classifier::Classifier;
use crate::error::{ClassifyError, SubmitError};
use crate::models::product::ProductId;
use crate::models::review::Review;

/// Somewhere the flow can apply a change to the review board.
///
/// Returns `None` once the board is gone, e.g. the signal owning it was
/// disposed while a request was in flight.
pub trait BoardHandle {
    fn update_board<R>(&self, f: impl FnOnce(&mut ReviewBoard) -> R) -> Option<R>;
}

impl BoardHandle for RwSignal<ReviewBoard> {
    fn update_board<R>(&self, f: impl FnOnce(&mut ReviewBoard) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl BoardHandle for RefCell<ReviewBoard> {
    fn update_board<R>(&self, f: impl FnOnce(&mut ReviewBoard) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// User-facing failure signal.
pub trait Notifier {
    fn notify(&self, err: &ClassifyError);
}

/// Blocking `window.alert` with a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserAlert {
    message: String,
}

impl BrowserAlert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Notifier for BrowserAlert {
    fn notify(&self, _err: &ClassifyError) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(&self.message) {
                    error!("[SUBMIT] Failed to show alert: {:?}", e);
                }
            }
            None => warn!("[SUBMIT] No window to alert on: {}", self.message),
        }
    }
}

/// Classifies the current draft for `product_id` and records the verdict.
///
/// Blank drafts and products that already have a request in flight are
/// rejected before anything is sent. Whatever the classifier does, the
/// product is no longer pending once this returns; a failed request leaves
/// the draft and reviews untouched and notifies exactly once.
pub async fn submit_review<B, C, N>(
    board: &B,
    classifier: &C,
    notifier: &N,
    product_id: ProductId,
) -> Result<Review, SubmitError>
where
    B: BoardHandle,
    C: Classifier,
    N: Notifier,
{
    let text = board
        .update_board(|board| board.begin_submission(product_id))
        .ok_or(SubmitError::Detached)??;

    log!("[SUBMIT] Classifying review for product {}", product_id);
    let outcome = classifier.classify(&text).await;

    let failure = outcome.as_ref().err().cloned();
    let Some(settled) = board.update_board(|board| board.settle(product_id, text, outcome)) else {
        // Board was disposed mid-request; the failure is still reported.
        if let Some(err) = failure {
            error!("[SUBMIT] Error classifying review for product {}: {}", product_id, err);
            notifier.notify(&err);
        }
        return Err(SubmitError::Detached);
    };

    match settled {
        Ok(review) => {
            log!("[SUBMIT] Product {} review recorded: {}", product_id, review);
            Ok(review)
        }
        Err(err) => {
            error!("[SUBMIT] Error classifying review for product {}: {}", product_id, err);
            notifier.notify(&err);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::models::review::Label;
    use futures::channel::oneshot;
    use std::cell::Cell;
    use std::collections::VecDeque;

    /// Replays canned outcomes and remembers what it was asked.
    #[derive(Default)]
    struct ScriptedClassifier {
        outcomes: RefCell<VecDeque<Result<Label, ClassifyError>>>,
        seen: RefCell<Vec<String>>,
    }

    impl ScriptedClassifier {
        fn answering(outcomes: impl IntoIterator<Item = Result<Label, ClassifyError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into_iter().collect()),
                seen: RefCell::default(),
            }
        }
    }

    impl Classifier for ScriptedClassifier {
        async fn classify(&self, review: &str) -> Result<Label, ClassifyError> {
            self.seen.borrow_mut().push(review.to_string());
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ClassifyError::Transport("no scripted answer".into())))
        }
    }

    /// Waits for the test to release an answer.
    struct GatedClassifier {
        gate: RefCell<Option<oneshot::Receiver<Result<Label, ClassifyError>>>>,
    }

    impl Classifier for GatedClassifier {
        async fn classify(&self, _review: &str) -> Result<Label, ClassifyError> {
            let gate = self.gate.borrow_mut().take().expect("classifier called once");
            gate.await
                .unwrap_or_else(|_| Err(ClassifyError::Transport("gate dropped".into())))
        }
    }

    #[derive(Default)]
    struct CountingNotifier {
        alerts: Cell<usize>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _err: &ClassifyError) {
            self.alerts.set(self.alerts.get() + 1);
        }
    }

    /// Board that disappears after handing out the draft, like a card
    /// unmounted mid-request.
    struct VanishingBoard {
        board: RefCell<ReviewBoard>,
        updates_left: Cell<usize>,
    }

    impl BoardHandle for VanishingBoard {
        fn update_board<R>(&self, f: impl FnOnce(&mut ReviewBoard) -> R) -> Option<R> {
            let left = self.updates_left.get();
            if left == 0 {
                return None;
            }
            self.updates_left.set(left - 1);
            self.board.update_board(f)
        }
    }

    fn board_with_draft(product_id: ProductId, text: &str) -> RefCell<ReviewBoard> {
        let mut board = ReviewBoard::for_catalog();
        board.set_draft(product_id, text).unwrap();
        RefCell::new(board)
    }

    #[tokio::test]
    async fn successful_submission_appends_review_and_clears_draft() {
        let board = board_with_draft(1, "Great product");
        let classifier = ScriptedClassifier::answering([Ok(Label::Real)]);
        let notifier = CountingNotifier::default();

        let review = submit_review(&board, &classifier, &notifier, 1).await.unwrap();

        assert_eq!(review.to_string(), "Great product ➝ [Real]");
        let board = board.borrow();
        assert_eq!(board.reviews(1), &[review]);
        assert_eq!(board.draft(1), "");
        assert!(!board.is_pending(1));
        assert_eq!(*classifier.seen.borrow(), vec!["Great product".to_string()]);
        assert_eq!(notifier.alerts.get(), 0);
    }

    #[tokio::test]
    async fn reviews_are_appended_in_submission_order() {
        let board = board_with_draft(8, "Loud and clear");
        let classifier = ScriptedClassifier::answering([Ok(Label::Real), Ok(Label::Fake)]);
        let notifier = CountingNotifier::default();

        submit_review(&board, &classifier, &notifier, 8).await.unwrap();
        board.borrow_mut().set_draft(8, "Best speaker ever!!!").unwrap();
        submit_review(&board, &classifier, &notifier, 8).await.unwrap();

        let shown: Vec<String> = board.borrow().reviews(8).iter().map(ToString::to_string).collect();
        assert_eq!(
            shown,
            vec!["Loud and clear ➝ [Real]", "Best speaker ever!!! ➝ [Fake]"]
        );
    }

    #[tokio::test]
    async fn blank_draft_sends_nothing() {
        let board = board_with_draft(2, "   ");
        let before = board.borrow().clone();
        let classifier = ScriptedClassifier::answering([Ok(Label::Real)]);
        let notifier = CountingNotifier::default();

        let result = submit_review(&board, &classifier, &notifier, 2).await;

        assert_eq!(result, Err(SubmitError::Rejected(BoardError::BlankDraft(2))));
        assert_eq!(*board.borrow(), before);
        assert!(classifier.seen.borrow().is_empty());
        assert_eq!(notifier.alerts.get(), 0);
    }

    #[tokio::test]
    async fn transport_failure_alerts_once_and_keeps_state() {
        let board = board_with_draft(3, "Makes great coffee");
        let classifier =
            ScriptedClassifier::answering([Err(ClassifyError::Transport("connection refused".into()))]);
        let notifier = CountingNotifier::default();

        let result = submit_review(&board, &classifier, &notifier, 3).await;

        assert_eq!(
            result,
            Err(SubmitError::Classify(ClassifyError::Transport("connection refused".into())))
        );
        let board = board.borrow();
        assert!(board.reviews(3).is_empty());
        assert_eq!(board.draft(3), "Makes great coffee");
        assert!(!board.is_pending(3));
        assert_eq!(notifier.alerts.get(), 1);
    }

    #[tokio::test]
    async fn missing_prediction_is_handled_like_a_failure() {
        let board = board_with_draft(4, "Fast laptop");
        let classifier = ScriptedClassifier::answering([Err(ClassifyError::MissingPrediction)]);
        let notifier = CountingNotifier::default();

        let result = submit_review(&board, &classifier, &notifier, 4).await;

        assert_eq!(result, Err(SubmitError::Classify(ClassifyError::MissingPrediction)));
        assert!(board.borrow().reviews(4).is_empty());
        assert_eq!(notifier.alerts.get(), 1);
    }

    #[tokio::test]
    async fn product_is_pending_only_while_the_request_is_outstanding() {
        let board = board_with_draft(5, "Tracks my runs");
        board.borrow_mut().set_draft(6, "Sturdy").unwrap();
        let (answer, gate) = oneshot::channel();
        let gated = GatedClassifier {
            gate: RefCell::new(Some(gate)),
        };
        let other = ScriptedClassifier::answering([Ok(Label::Real)]);
        let notifier = CountingNotifier::default();

        let flow = submit_review(&board, &gated, &notifier, 5);
        let probe = async {
            assert!(board.borrow().is_pending(5));

            let again = submit_review(&board, &other, &notifier, 5).await;
            assert_eq!(again, Err(SubmitError::Rejected(BoardError::AlreadyPending(5))));

            // Unrelated products are not blocked.
            submit_review(&board, &other, &notifier, 6).await.unwrap();

            answer.send(Ok(Label::Fake)).unwrap();
        };
        let (result, ()) = futures::join!(flow, probe);

        assert_eq!(result.unwrap().to_string(), "Tracks my runs ➝ [Fake]");
        let board = board.borrow();
        assert!(!board.is_pending(5));
        assert_eq!(board.reviews(5).len(), 1);
        assert_eq!(board.reviews(6).len(), 1);
        assert_eq!(notifier.alerts.get(), 0);
    }

    #[tokio::test]
    async fn failure_after_board_is_gone_still_alerts_once() {
        let board = VanishingBoard {
            board: board_with_draft(7, "Cools fast"),
            updates_left: Cell::new(1),
        };
        let classifier =
            ScriptedClassifier::answering([Err(ClassifyError::Transport("connection refused".into()))]);
        let notifier = CountingNotifier::default();

        let result = submit_review(&board, &classifier, &notifier, 7).await;

        assert_eq!(result, Err(SubmitError::Detached));
        assert_eq!(notifier.alerts.get(), 1);
    }

    #[tokio::test]
    async fn success_after_board_is_gone_stays_quiet() {
        let board = VanishingBoard {
            board: board_with_draft(7, "Cools fast"),
            updates_left: Cell::new(1),
        };
        let classifier = ScriptedClassifier::answering([Ok(Label::Real)]);
        let notifier = CountingNotifier::default();

        let result = submit_review(&board, &classifier, &notifier, 7).await;

        assert_eq!(result, Err(SubmitError::Detached));
        assert_eq!(notifier.alerts.get(), 0);
    }
}
