//! Loan button view-model and its visual projection.
//!
//! # Design
//! - The mode is the single source of truth for what a click does.
//! - Visuals are derived, never stored; the binding layer only projects them.
//! - Classes outside [`MANAGED_CLASSES`] belong to the template and are left alone.

use readingtrail_api_models::BookId;

/// Selector matching every loan control rendered by the server.
pub const LOAN_BUTTON_SELECTOR: &str = ".borrow-btn, .return-btn";
/// Selector matching cancel-request controls.
pub const CANCEL_BUTTON_SELECTOR: &str = ".cancel-request-btn";
/// Data attribute carrying the book identifier.
pub const BOOK_ID_ATTR: &str = "data-book-id";
/// Data attribute carrying the book title.
pub const BOOK_TITLE_ATTR: &str = "data-book-title";
/// Data attribute naming the input that holds a proposed due date.
pub const DUE_DATE_SOURCE_ATTR: &str = "data-due-date-source";

/// Classes the projection owns on a loan button.
pub const MANAGED_CLASSES: [&str; 6] = [
    "btn-success",
    "btn-warning",
    "borrow-btn",
    "return-btn",
    "pending-btn",
    "loading",
];

/// Operation a loan button performs next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanMode {
    /// Click borrows the book.
    Borrow,
    /// Click returns the book.
    Return,
    /// A borrow with a proposed due date awaits approval; clicks do nothing.
    Pending,
}

impl LoanMode {
    /// Hydrate the mode from the classes rendered by the server.
    #[must_use]
    pub fn from_classes(class_name: &str) -> Option<Self> {
        let mut classes = class_name.split_whitespace();
        classes.find_map(|class| match class {
            "borrow-btn" => Some(Self::Borrow),
            "return-btn" => Some(Self::Return),
            "pending-btn" => Some(Self::Pending),
            _ => None,
        })
    }

    /// Mode after a successful transition.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Borrow => Self::Return,
            Self::Return => Self::Borrow,
            Self::Pending => Self::Pending,
        }
    }
}

/// View-model for one loan button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanButtonModel {
    /// Book the button acts on.
    pub book_id: BookId,
    /// Display title; named in loan failure logs.
    pub title: String,
    /// Operation the next click performs.
    pub mode: LoanMode,
    /// Whether a request for this button is in flight.
    pub busy: bool,
}

impl LoanButtonModel {
    /// Idle button in `mode`.
    #[must_use]
    pub fn new(book_id: BookId, title: impl Into<String>, mode: LoanMode) -> Self {
        Self {
            book_id,
            title: title.into(),
            mode,
            busy: false,
        }
    }

    /// Project the model onto the button's visual identity.
    #[must_use]
    pub const fn visual(&self) -> ButtonVisual {
        if self.busy {
            return ButtonVisual {
                label_key: "loan.processing",
                icon: "fa-spinner fa-spin",
                style_class: style_class(self.mode),
                mode_class: mode_class(self.mode),
                loading: true,
                disabled: true,
            };
        }
        match self.mode {
            LoanMode::Borrow => ButtonVisual {
                label_key: "loan.borrow",
                icon: "fa-download",
                style_class: style_class(LoanMode::Borrow),
                mode_class: mode_class(LoanMode::Borrow),
                loading: false,
                disabled: false,
            },
            LoanMode::Return => ButtonVisual {
                label_key: "loan.return",
                icon: "fa-undo",
                style_class: style_class(LoanMode::Return),
                mode_class: mode_class(LoanMode::Return),
                loading: false,
                disabled: false,
            },
            LoanMode::Pending => ButtonVisual {
                label_key: "loan.pending",
                icon: "fa-clock",
                style_class: style_class(LoanMode::Pending),
                mode_class: mode_class(LoanMode::Pending),
                loading: false,
                disabled: true,
            },
        }
    }
}

const fn style_class(mode: LoanMode) -> &'static str {
    match mode {
        LoanMode::Borrow => "btn-success",
        LoanMode::Return | LoanMode::Pending => "btn-warning",
    }
}

const fn mode_class(mode: LoanMode) -> &'static str {
    match mode {
        LoanMode::Borrow => "borrow-btn",
        LoanMode::Return => "return-btn",
        LoanMode::Pending => "pending-btn",
    }
}

/// Derived visual identity of a loan button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonVisual {
    /// Translation key of the label.
    pub label_key: &'static str,
    /// Font Awesome icon classes.
    pub icon: &'static str,
    /// Bootstrap colour class.
    pub style_class: &'static str,
    /// Mode marker class.
    pub mode_class: &'static str,
    /// Whether the loading class is applied.
    pub loading: bool,
    /// Whether the control is disabled.
    pub disabled: bool,
}

impl ButtonVisual {
    /// Managed classes that must be present after projection.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![self.style_class, self.mode_class];
        if self.loading {
            classes.push("loading");
        }
        classes
    }
}
