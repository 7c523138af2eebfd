//! Page-level state for the users console.

use flume::{Receiver, Sender};
use roster_business::{SaveOutcome, User, UserFormState, UsersEvent};

/// State owned by the users page: the list, the selection, which dialog is
/// open, and the channel that asynchronous HTTP outcomes arrive on.
pub struct UsersState {
    pub users: Vec<User>,
    /// Gates the page-level progress indicator. Set around every network
    /// call, including the ones delegated to the form dialog.
    pub is_loading: bool,
    /// At most one selected user, shared by the edit form and the delete
    /// confirmation. Cleared whenever any modal closes.
    pub selected: Option<User>,
    pub form_open: bool,
    pub delete_open: bool,
    pub form: UserFormState,
    needs_fetch: bool,
    events_tx: Sender<UsersEvent>,
    events_rx: Receiver<UsersEvent>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self::new()
    }
}

impl UsersState {
    pub fn new() -> Self {
        let (events_tx, events_rx) = flume::unbounded();
        Self {
            users: Vec::new(),
            is_loading: false,
            selected: None,
            form_open: false,
            delete_open: false,
            form: UserFormState::default(),
            // The page fetches the list on mount.
            needs_fetch: true,
            events_tx,
            events_rx,
        }
    }

    /// A state seeded with an already-loaded list, for tests.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            needs_fetch: false,
            ..Self::new()
        }
    }

    /// Sender handed to API calls.
    pub fn events_sender(&self) -> Sender<UsersEvent> {
        self.events_tx.clone()
    }

    /// Consumes the pending fetch request, if one is due. The caller issues
    /// the actual request and flips [`Self::is_loading`] on.
    pub fn take_fetch_request(&mut self) -> bool {
        if self.needs_fetch && !self.is_loading {
            self.needs_fetch = false;
            true
        } else {
            false
        }
    }

    pub fn open_create(&mut self) {
        self.selected = None;
        self.form = UserFormState::seed(None);
        self.form_open = true;
    }

    pub fn open_edit(&mut self, user: User) {
        self.form = UserFormState::seed(Some(&user));
        self.selected = Some(user);
        self.form_open = true;
    }

    pub fn open_delete(&mut self, user: User) {
        self.selected = Some(user);
        self.delete_open = true;
    }

    /// Closes every dialog and drops the selection.
    pub fn close_modals(&mut self) {
        self.form_open = false;
        self.delete_open = false;
        self.selected = None;
    }

    /// Explicit close of the form dialog. Re-fetches if anything was
    /// persisted while it was open (submit success or role change).
    pub fn close_form(&mut self) {
        let persisted = self.form.persisted();
        self.close_modals();
        if persisted {
            self.needs_fetch = true;
        }
    }

    pub fn delete_message(&self) -> String {
        self.selected
            .as_ref()
            .map(|user| format!("Are you sure you want to delete the user - {}?", user.username))
            .unwrap_or_default()
    }

    /// Applies one asynchronous outcome.
    ///
    /// List and delete failures are logged and otherwise swallowed; only
    /// form submissions surface their errors, inside the dialog.
    pub fn apply(&mut self, event: UsersEvent) {
        match event {
            UsersEvent::ListLoaded(users) => {
                self.users = users;
                self.is_loading = false;
            }
            UsersEvent::ListFailed(message) => {
                log::error!("user list fetch failed: {message}");
                self.is_loading = false;
            }
            UsersEvent::SaveFinished(SaveOutcome::Saved) => {
                self.form.submit_success();
                self.is_loading = false;
                self.close_modals();
                self.needs_fetch = true;
            }
            UsersEvent::SaveFinished(SaveOutcome::Failed(message)) => {
                self.is_loading = false;
                self.form.submit_failure(message);
            }
            UsersEvent::RoleChanged(SaveOutcome::Saved) => {
                self.is_loading = false;
                self.form.mark_persisted();
            }
            UsersEvent::RoleChanged(SaveOutcome::Failed(message)) => {
                self.is_loading = false;
                log::warn!("role update failed: {message}");
            }
            UsersEvent::DeleteFinished(SaveOutcome::Saved) => {
                self.is_loading = false;
                self.close_modals();
                self.needs_fetch = true;
            }
            UsersEvent::DeleteFinished(SaveOutcome::Failed(message)) => {
                log::error!("user delete failed: {message}");
                self.is_loading = false;
                self.close_modals();
            }
        }
    }

    /// Applies everything the channel has buffered. Called once per frame,
    /// before rendering.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
        }
    }
}
