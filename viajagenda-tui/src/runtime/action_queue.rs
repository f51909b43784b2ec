use crate::routes::Route;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    /// Show a screen and load whatever it displays.
    Navigate(Route),
    /// Reload the current screen without touching filters.
    Refresh,
    SearchActivities,
    ClearFilters,
    SubmitForm,
    CompleteSelected,
    CancelSelected,
    DeleteSelected,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
