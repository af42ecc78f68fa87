//! Transient notices with cancellable auto-dismissal.
//!
//! A notice goes to the page's confirmation surface when it has one, and to
//! a floating toast otherwise. Each notice schedules its own dismissal on the
//! Tokio runtime; posting a new notice aborts the pending dismissal of the
//! previous one, so an old timer never hides a newer message.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::config::CartConfig;

/// Where a notice was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSurface {
    /// The page's dedicated confirmation element.
    Confirm,
    /// A floating toast appended to the page.
    Toast,
}

/// State of the dedicated confirmation element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmSurface {
    pub text: String,
    pub visible: bool,
}

/// A floating toast currently on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Default)]
struct BoardState {
    confirm: Option<ConfirmSurface>,
    toast: Option<Toast>,
    next_toast_id: u64,
}

/// Shared handle to the notice surfaces of one page.
///
/// Clones refer to the same surfaces; dismissal tasks hold a clone.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    state: Arc<Mutex<BoardState>>,
}

impl NoticeBoard {
    /// A board without a confirmation element; notices become toasts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A board with a (hidden) confirmation element.
    #[must_use]
    pub fn with_confirm_surface() -> Self {
        let board = Self::default();
        board.lock().confirm = Some(ConfirmSurface::default());
        board
    }

    #[must_use]
    pub fn has_confirm_surface(&self) -> bool {
        self.lock().confirm.is_some()
    }

    /// Snapshot of the confirmation element, if the page has one.
    #[must_use]
    pub fn confirm(&self) -> Option<ConfirmSurface> {
        self.lock().confirm.clone()
    }

    /// The toast currently shown, if any.
    #[must_use]
    pub fn toast(&self) -> Option<Toast> {
        self.lock().toast.clone()
    }

    /// The message a user would currently see.
    #[must_use]
    pub fn visible_message(&self) -> Option<String> {
        let state = self.lock();
        match &state.confirm {
            Some(confirm) if confirm.visible => Some(confirm.text.clone()),
            Some(_) => None,
            None => state.toast.as_ref().map(|toast| toast.text.clone()),
        }
    }

    fn show(&self, message: &str) -> (NoticeSurface, u64) {
        let mut state = self.lock();
        if let Some(confirm) = state.confirm.as_mut() {
            confirm.text = message.to_string();
            confirm.visible = true;
            return (NoticeSurface::Confirm, 0);
        }

        state.next_toast_id += 1;
        let id = state.next_toast_id;
        state.toast = Some(Toast {
            id,
            text: message.to_string(),
        });
        (NoticeSurface::Toast, id)
    }

    fn dismiss(&self, surface: NoticeSurface, toast_id: u64) {
        let mut state = self.lock();
        match surface {
            NoticeSurface::Confirm => {
                if let Some(confirm) = state.confirm.as_mut() {
                    confirm.visible = false;
                }
            }
            NoticeSurface::Toast => {
                if state.toast.as_ref().is_some_and(|toast| toast.id == toast_id) {
                    state.toast = None;
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Posts notices to a [`NoticeBoard`] and owns the pending dismissal timer.
#[derive(Debug)]
pub struct Notifier {
    board: NoticeBoard,
    confirm_dismiss: Duration,
    toast_dismiss: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Notifier {
    /// Create a notifier using the configured dismissal delays.
    #[must_use]
    pub const fn new(board: NoticeBoard, config: &CartConfig) -> Self {
        Self::with_delays(board, config.confirm_dismiss, config.toast_dismiss)
    }

    /// Create a notifier with explicit dismissal delays.
    #[must_use]
    pub const fn with_delays(
        board: NoticeBoard,
        confirm_dismiss: Duration,
        toast_dismiss: Duration,
    ) -> Self {
        Self {
            board,
            confirm_dismiss,
            toast_dismiss,
            pending: None,
        }
    }

    /// The board this notifier writes to.
    #[must_use]
    pub const fn board(&self) -> &NoticeBoard {
        &self.board
    }

    /// Show `message`, replacing whatever notice is up.
    ///
    /// Outside a Tokio runtime the notice is shown but never auto-dismissed.
    pub fn notify(&mut self, message: &str) -> NoticeSurface {
        self.cancel_pending();
        let (surface, toast_id) = self.board.show(message);

        let delay = match surface {
            NoticeSurface::Confirm => self.confirm_dismiss,
            NoticeSurface::Toast => self.toast_dismiss,
        };

        match Handle::try_current() {
            Ok(handle) => {
                let board = self.board.clone();
                let deadline = Instant::now() + delay;
                self.pending = Some(handle.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    board.dismiss(surface, toast_id);
                }));
            }
            Err(_) => debug!(?surface, "No runtime; notice will not auto-dismiss"),
        }
        surface
    }

    /// Abort the pending dismissal, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Whether a dismissal is still scheduled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}
