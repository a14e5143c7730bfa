//! Loan action controller: per-book submission guard, mode dispatch and
//! response fan-out.
//!
//! # Design
//! - The controller owns one [`LoanButtonModel`] per book and the set of books
//!   with a request in flight. A request for one book never blocks another.
//! - A click goes through [`LoanController::press`], which reads the current
//!   mode; there is no per-mode handler to rebind.
//! - [`LoanController::begin`] hands out a [`LoanTicket`];
//!   [`LoanController::settle`] consumes it on every path, so the guard and the
//!   busy flag are always released together.
//! - Side effects come back as [`LoanEffect`] values for the binding layer.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use readingtrail_api_models::{
    AchievementRecord, BookId, CancelResponse, LoanRequest, LoanResponse,
};
use tracing::{debug, warn};

use crate::core::alerts::AlertKind;
use crate::core::badge::BadgeChange;
use crate::core::endpoints;
use crate::core::error::UiError;
use crate::core::loan::{LoanButtonModel, LoanMode};
use crate::core::page::PageKind;
use crate::i18n::TranslationBundle;

/// Operation submitted for a book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanAction {
    /// Borrow, optionally proposing a due date that needs approval.
    Borrow {
        /// Proposed due date; `None` requests an immediate loan.
        proposed_due_date: Option<NaiveDate>,
    },
    /// Return a borrowed book.
    Return,
}

impl LoanAction {
    /// Mode a button must be in for this action.
    #[must_use]
    pub const fn required_mode(self) -> LoanMode {
        match self {
            Self::Borrow { .. } => LoanMode::Borrow,
            Self::Return => LoanMode::Return,
        }
    }

    /// Request path for `book_id`.
    #[must_use]
    pub fn path(self, book_id: &BookId) -> String {
        match self {
            Self::Borrow { .. } => endpoints::borrow(book_id),
            Self::Return => endpoints::return_book(book_id),
        }
    }

    /// JSON body for the request.
    #[must_use]
    pub const fn request(self) -> LoanRequest {
        match self {
            Self::Borrow {
                proposed_due_date: Some(date),
            } => LoanRequest::with_due_date(date),
            Self::Borrow {
                proposed_due_date: None,
            }
            | Self::Return => LoanRequest::immediate(),
        }
    }

    const fn fallback_key(self) -> &'static str {
        match self {
            Self::Borrow {
                proposed_due_date: Some(_),
            } => "loan.request_failed",
            Self::Borrow {
                proposed_due_date: None,
            } => "loan.borrow_failed",
            Self::Return => "loan.return_failed",
        }
    }
}

/// Proof that a request was admitted; consumed by [`LoanController::settle`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket must be settled to release the book's guard"]
pub struct LoanTicket {
    book_id: BookId,
    action: LoanAction,
    prior_mode: LoanMode,
}

impl LoanTicket {
    /// Submitted action.
    #[must_use]
    pub const fn action(&self) -> LoanAction {
        self.action
    }
}

/// Side effect requested by a settled loan or cancel action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoanEffect {
    /// Show an alert.
    Alert {
        /// Severity.
        kind: AlertKind,
        /// Message text.
        message: String,
    },
    /// Present achievement modals in order.
    Achievements(Vec<AchievementRecord>),
    /// Add a signed delta to the borrowed counters.
    AdjustBorrowed(i64),
    /// Toggle the cover badge on the button's card.
    Badge(BadgeChange),
    /// Fade out and remove the button's dashboard card.
    RemoveCard,
    /// Reload the page after the configured delay.
    ReloadPage,
}

/// Owned loan state for one page.
#[derive(Debug, Default)]
pub struct LoanController {
    page: PageKind,
    buttons: HashMap<BookId, LoanButtonModel>,
    in_flight: HashSet<BookId>,
}

impl LoanController {
    /// Controller for a page kind with no buttons registered.
    #[must_use]
    pub fn new(page: PageKind) -> Self {
        Self {
            page,
            buttons: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Page kind the controller was created for.
    #[must_use]
    pub const fn page(&self) -> PageKind {
        self.page
    }

    /// Register (or replace) the view-model for a book.
    pub fn register(&mut self, model: LoanButtonModel) {
        self.buttons.insert(model.book_id.clone(), model);
    }

    /// Drop a book's view-model once its card has left the page.
    pub fn forget(&mut self, book_id: &BookId) -> Option<LoanButtonModel> {
        self.buttons.remove(book_id)
    }

    /// Current view-model for a book.
    #[must_use]
    pub fn button(&self, book_id: &BookId) -> Option<&LoanButtonModel> {
        self.buttons.get(book_id)
    }

    /// Whether a request for `book_id` is in flight.
    #[must_use]
    pub fn is_in_flight(&self, book_id: &BookId) -> bool {
        self.in_flight.contains(book_id)
    }

    /// Number of books with a request in flight.
    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Route a click to the operation the button's current mode calls for.
    ///
    /// Returns `None` when the click must be ignored: unknown book, pending
    /// approval, or a request already in flight for this book.
    pub fn press(
        &mut self,
        book_id: &BookId,
        proposed_due_date: Option<NaiveDate>,
    ) -> Option<LoanTicket> {
        let mode = self.buttons.get(book_id)?.mode;
        let action = match mode {
            LoanMode::Borrow => LoanAction::Borrow { proposed_due_date },
            LoanMode::Return => LoanAction::Return,
            LoanMode::Pending => {
                debug!(book_id = %book_id, "loan button awaiting approval; click ignored");
                return None;
            }
        };
        self.begin(book_id, action)
    }

    /// Admit `action` for `book_id`, marking the button busy.
    ///
    /// Returns `None` (and changes nothing) when the book already has a request
    /// in flight or the button's mode does not match the action.
    pub fn begin(&mut self, book_id: &BookId, action: LoanAction) -> Option<LoanTicket> {
        if self.in_flight.contains(book_id) {
            debug!(book_id = %book_id, "loan request already in flight; click ignored");
            return None;
        }
        let button = self.buttons.get_mut(book_id)?;
        if button.mode != action.required_mode() {
            debug!(
                book_id = %book_id,
                mode = ?button.mode,
                action = ?action,
                "loan action does not match button mode"
            );
            return None;
        }
        button.busy = true;
        self.in_flight.insert(book_id.clone());
        Some(LoanTicket {
            book_id: book_id.clone(),
            action,
            prior_mode: button.mode,
        })
    }

    /// Settle an admitted request and return the effects to apply.
    ///
    /// Always releases the guard and clears the busy flag. On success the mode
    /// flips, and on the dashboard a return also asks for the card to be removed;
    /// the model stays registered until [`Self::forget`]. On any failure the
    /// prior mode is kept.
    pub fn settle(
        &mut self,
        ticket: LoanTicket,
        outcome: Result<LoanResponse, UiError>,
        bundle: &TranslationBundle,
    ) -> Vec<LoanEffect> {
        let LoanTicket {
            book_id,
            action,
            prior_mode,
        } = ticket;
        self.in_flight.remove(&book_id);
        let title = self
            .buttons
            .get(&book_id)
            .map(|button| button.title.clone())
            .unwrap_or_default();

        let response = match outcome {
            Ok(response) if response.success => response,
            Ok(response) => {
                warn!(
                    book_id = %book_id,
                    title = %title,
                    action = ?action,
                    "loan action rejected by server"
                );
                self.transition(&book_id, prior_mode);
                let message = if response.message.is_empty() {
                    bundle.text(action.fallback_key(), "")
                } else {
                    response.message
                };
                return vec![LoanEffect::Alert {
                    kind: AlertKind::Danger,
                    message,
                }];
            }
            Err(err) => {
                warn!(
                    book_id = %book_id,
                    title = %title,
                    action = ?action,
                    error = %err,
                    "loan request failed"
                );
                self.transition(&book_id, prior_mode);
                return vec![LoanEffect::Alert {
                    kind: AlertKind::Danger,
                    message: bundle.text(action.fallback_key(), ""),
                }];
            }
        };

        let mut effects = vec![LoanEffect::Alert {
            kind: AlertKind::Success,
            message: response.message,
        }];
        if !response.new_achievements.is_empty() {
            effects.push(LoanEffect::Achievements(response.new_achievements));
        }

        match action {
            LoanAction::Borrow {
                proposed_due_date: Some(_),
            } => {
                self.transition(&book_id, LoanMode::Pending);
            }
            LoanAction::Borrow {
                proposed_due_date: None,
            } => {
                self.transition(&book_id, LoanMode::Return);
                effects.push(LoanEffect::AdjustBorrowed(1));
                effects.push(LoanEffect::Badge(BadgeChange::Add));
            }
            LoanAction::Return if self.page.removes_returned_cards() => {
                self.transition(&book_id, LoanMode::Borrow);
                effects.push(LoanEffect::RemoveCard);
                effects.push(LoanEffect::AdjustBorrowed(-1));
            }
            LoanAction::Return => {
                self.transition(&book_id, LoanMode::Borrow);
                effects.push(LoanEffect::AdjustBorrowed(-1));
                effects.push(LoanEffect::Badge(BadgeChange::Remove));
            }
        }
        effects
    }

    /// Effects for a settled cancel-request call.
    #[must_use]
    pub fn cancel_effects(
        outcome: Result<CancelResponse, UiError>,
        bundle: &TranslationBundle,
    ) -> Vec<LoanEffect> {
        match outcome {
            Ok(response) if response.success => vec![
                LoanEffect::Alert {
                    kind: AlertKind::Success,
                    message: response.message.unwrap_or_default(),
                },
                LoanEffect::ReloadPage,
            ],
            Ok(response) => vec![LoanEffect::Alert {
                kind: AlertKind::Danger,
                message: response
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| bundle.text("cancel.failed", "")),
            }],
            Err(err) => {
                warn!(error = %err, "cancel borrow request failed");
                vec![LoanEffect::Alert {
                    kind: AlertKind::Danger,
                    message: bundle.text("cancel.error", ""),
                }]
            }
        }
    }

    fn transition(&mut self, book_id: &BookId, mode: LoanMode) {
        if let Some(button) = self.buttons.get_mut(book_id) {
            button.mode = mode;
            button.busy = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    fn bundle() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::Vi)
    }

    fn controller_with(page: PageKind, id: &str, mode: LoanMode) -> LoanController {
        let mut controller = LoanController::new(page);
        controller.register(LoanButtonModel::new(BookId::from(id), "Dune", mode));
        controller
    }

    fn accepted(message: &str) -> Result<LoanResponse, UiError> {
        Ok(LoanResponse {
            success: true,
            message: message.to_string(),
            new_achievements: Vec::new(),
        })
    }

    fn rejected(message: &str) -> Result<LoanResponse, UiError> {
        Ok(LoanResponse {
            success: false,
            message: message.to_string(),
            new_achievements: Vec::new(),
        })
    }

    fn network_error() -> Result<LoanResponse, UiError> {
        Err(UiError::Transport {
            path: "/borrow/1".to_string(),
            detail: "offline".to_string(),
        })
    }

    #[test]
    fn successful_actions_alternate_the_mode() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Borrow);
        let bundle = bundle();
        for _ in 0..4 {
            let before = controller.button(&id).expect("registered").mode;
            let ticket = controller.press(&id, None).expect("admitted");
            let _ = controller.settle(ticket, accepted("ok"), &bundle);
            let after = controller.button(&id).expect("registered").mode;
            assert_eq!(after, before.flipped());
        }
    }

    #[test]
    fn guard_is_released_on_every_outcome() {
        let id = BookId::from("1");
        let bundle = bundle();
        for outcome in [accepted("ok"), rejected("no copies left"), network_error()] {
            let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Borrow);
            assert!(!controller.is_in_flight(&id));
            let ticket = controller.press(&id, None).expect("admitted");
            assert!(controller.is_in_flight(&id));
            assert!(controller.button(&id).expect("registered").busy);
            let _ = controller.settle(ticket, outcome, &bundle);
            assert!(!controller.is_in_flight(&id));
            assert!(!controller.button(&id).expect("registered").busy);
            assert_eq!(controller.in_flight_count(), 0);
        }
    }

    #[test]
    fn repeated_click_while_pending_is_ignored() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Borrow);
        let first = controller.press(&id, None);
        assert!(first.is_some());
        assert!(controller.press(&id, None).is_none());
        assert!(controller.begin(&id, LoanAction::Borrow { proposed_due_date: None }).is_none());
        assert_eq!(controller.in_flight_count(), 1);
    }

    #[test]
    fn other_books_are_not_blocked() {
        let a = BookId::from("a");
        let b = BookId::from("b");
        let mut controller = LoanController::new(PageKind::Catalog);
        controller.register(LoanButtonModel::new(a.clone(), "A", LoanMode::Borrow));
        controller.register(LoanButtonModel::new(b.clone(), "B", LoanMode::Return));
        let ticket_a = controller.press(&a, None).expect("a admitted");
        let ticket_b = controller.press(&b, None).expect("b admitted");
        assert_eq!(ticket_a.action(), LoanAction::Borrow { proposed_due_date: None });
        assert_eq!(ticket_b.action(), LoanAction::Return);
        assert_eq!(controller.in_flight_count(), 2);
    }

    #[test]
    fn mismatched_action_is_refused() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Return);
        assert!(controller.begin(&id, LoanAction::Borrow { proposed_due_date: None }).is_none());
        assert!(!controller.is_in_flight(&id));
        assert!(!controller.button(&id).expect("registered").busy);
    }

    #[test]
    fn borrow_success_fans_out() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Borrow);
        let achievement = AchievementRecord {
            icon: "fa-book".to_string(),
            name: "First Loan".to_string(),
            description: "Borrow your first book".to_string(),
            points: 10,
        };
        let ticket = controller.press(&id, None).expect("admitted");
        assert_eq!(ticket.action(), LoanAction::Borrow { proposed_due_date: None });
        let effects = controller.settle(
            ticket,
            Ok(LoanResponse {
                success: true,
                message: "Mượn sách thành công".to_string(),
                new_achievements: vec![achievement.clone()],
            }),
            &bundle(),
        );
        assert_eq!(
            effects,
            vec![
                LoanEffect::Alert {
                    kind: AlertKind::Success,
                    message: "Mượn sách thành công".to_string(),
                },
                LoanEffect::Achievements(vec![achievement]),
                LoanEffect::AdjustBorrowed(1),
                LoanEffect::Badge(BadgeChange::Add),
            ]
        );
    }

    #[test]
    fn return_success_on_catalog_flips_back() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Return);
        let ticket = controller.press(&id, None).expect("admitted");
        let effects = controller.settle(ticket, accepted("Trả sách thành công"), &bundle());
        assert_eq!(controller.button(&id).expect("registered").mode, LoanMode::Borrow);
        assert!(effects.contains(&LoanEffect::AdjustBorrowed(-1)));
        assert!(effects.contains(&LoanEffect::Badge(BadgeChange::Remove)));
        assert!(!effects.contains(&LoanEffect::RemoveCard));
    }

    #[test]
    fn return_success_on_dashboard_removes_card() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Dashboard, "1", LoanMode::Return);
        let ticket = controller.press(&id, None).expect("admitted");
        let effects = controller.settle(ticket, accepted("ok"), &bundle());
        assert!(effects.contains(&LoanEffect::RemoveCard));
        assert!(effects.contains(&LoanEffect::AdjustBorrowed(-1)));
        assert!(!effects.iter().any(|effect| matches!(effect, LoanEffect::Badge(_))));
        assert!(!controller.is_in_flight(&id));
    }

    #[test]
    fn dashboard_return_leaves_an_idle_button_until_forgotten() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Dashboard, "1", LoanMode::Return);
        let ticket = controller.press(&id, None).expect("admitted");
        let _ = controller.settle(ticket, accepted("ok"), &bundle());

        let model = controller.button(&id).expect("kept until the card is removed");
        assert!(!model.busy);
        assert!(!model.visual().disabled);
        assert_eq!(model.mode, LoanMode::Borrow);

        assert!(controller.forget(&id).is_some());
        assert!(controller.button(&id).is_none());
        assert!(controller.press(&id, None).is_none());
    }

    #[test]
    fn rejection_surfaces_server_message_and_keeps_mode() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Borrow);
        let ticket = controller.press(&id, None).expect("admitted");
        let effects = controller.settle(ticket, rejected("Sách đã hết"), &bundle());
        assert_eq!(
            effects,
            vec![LoanEffect::Alert {
                kind: AlertKind::Danger,
                message: "Sách đã hết".to_string(),
            }]
        );
        assert_eq!(controller.button(&id).expect("registered").mode, LoanMode::Borrow);
    }

    #[test]
    fn transport_failure_uses_localised_fallback() {
        let id = BookId::from("1");
        let mut controller = controller_with(PageKind::Catalog, "1", LoanMode::Return);
        let ticket = controller.press(&id, None).expect("admitted");
        let effects = controller.settle(ticket, network_error(), &bundle());
        assert_eq!(
            effects,
            vec![LoanEffect::Alert {
                kind: AlertKind::Danger,
                message: "Không thể trả sách. Vui lòng thử lại.".to_string(),
            }]
        );
        assert_eq!(controller.button(&id).expect("registered").mode, LoanMode::Return);
    }

    #[test]
    fn due_date_borrow_awaits_approval() {
        let id = BookId::from("1");
        let date = NaiveDate::from_ymd_opt(2026, 11, 20).expect("valid date");
        let mut controller = controller_with(PageKind::Detail, "1", LoanMode::Borrow);
        let ticket = controller.press(&id, Some(date)).expect("admitted");
        assert_eq!(ticket.action().request(), LoanRequest::with_due_date(date));
        let effects = controller.settle(ticket, accepted("Đã gửi yêu cầu"), &bundle());
        assert_eq!(controller.button(&id).expect("registered").mode, LoanMode::Pending);
        assert_eq!(effects.len(), 1);
        assert!(controller.press(&id, None).is_none());
    }

    #[test]
    fn due_date_failure_uses_generic_fallback() {
        let id = BookId::from("1");
        let date = NaiveDate::from_ymd_opt(2026, 11, 20).expect("valid date");
        let mut controller = controller_with(PageKind::Detail, "1", LoanMode::Borrow);
        let ticket = controller.press(&id, Some(date)).expect("admitted");
        let effects = controller.settle(ticket, network_error(), &bundle());
        assert_eq!(
            effects,
            vec![LoanEffect::Alert {
                kind: AlertKind::Danger,
                message: "Có lỗi xảy ra khi xử lý yêu cầu.".to_string(),
            }]
        );
    }

    #[test]
    fn action_paths_and_bodies() {
        let id = BookId::from("7");
        assert_eq!(LoanAction::Return.path(&id), "/return/7");
        assert_eq!(
            LoanAction::Borrow { proposed_due_date: None }.path(&id),
            "/borrow/7"
        );
        assert_eq!(LoanAction::Return.request(), LoanRequest::immediate());
    }

    #[test]
    fn cancel_success_reloads() {
        let effects = LoanController::cancel_effects(
            Ok(CancelResponse {
                success: true,
                message: Some("Đã hủy yêu cầu".to_string()),
            }),
            &bundle(),
        );
        assert_eq!(
            effects,
            vec![
                LoanEffect::Alert {
                    kind: AlertKind::Success,
                    message: "Đã hủy yêu cầu".to_string(),
                },
                LoanEffect::ReloadPage,
            ]
        );
    }

    #[test]
    fn cancel_failures_fall_back_to_bundle_text() {
        let bundle = bundle();
        let rejected = LoanController::cancel_effects(
            Ok(CancelResponse {
                success: false,
                message: None,
            }),
            &bundle,
        );
        assert_eq!(
            rejected,
            vec![LoanEffect::Alert {
                kind: AlertKind::Danger,
                message: "Không thể hủy yêu cầu".to_string(),
            }]
        );

        let failed = LoanController::cancel_effects(
            Err(UiError::Transport {
                path: "/cancel_borrow_request/1".to_string(),
                detail: "offline".to_string(),
            }),
            &bundle,
        );
        assert_eq!(
            failed,
            vec![LoanEffect::Alert {
                kind: AlertKind::Danger,
                message: "Lỗi khi hủy yêu cầu".to_string(),
            }]
        );
    }
}
