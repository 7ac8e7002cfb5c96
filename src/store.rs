//! Dashboard State
//!
//! The single owned state object behind the dashboard. Views read it through
//! signals; only the controller writes it, through the transitions below.

use crate::api::ApiError;
use crate::models::UserRecord;

/// Transient success banner; `ticket` identifies which timer may clear it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub ticket: u64,
}

/// Loading / ready lifecycle of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready {
        error: Option<String>,
        success: Option<StatusMessage>,
    },
}

/// What submitting the form should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update(u32),
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    users: Vec<UserRecord>,
    phase: Phase,
    editing: Option<UserRecord>,
    next_ticket: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Ready { error, .. } => error.as_deref(),
            Phase::Loading => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match &self.phase {
            Phase::Ready { success, .. } => success.as_ref().map(|m| m.text.as_str()),
            Phase::Loading => None,
        }
    }

    pub fn editing(&self) -> Option<&UserRecord> {
        self.editing.as_ref()
    }

    pub fn submit_action(&self) -> SubmitAction {
        match &self.editing {
            Some(user) => SubmitAction::Update(user.id),
            None => SubmitAction::Create,
        }
    }

    pub fn begin_edit(&mut self, user: UserRecord) {
        self.editing = Some(user);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Loading -> Ready, with either the fetched users or the load error
    pub fn finish_load(&mut self, result: Result<Vec<UserRecord>, ApiError>) {
        match result {
            Ok(users) => {
                self.users = users;
                self.phase = Phase::Ready { error: None, success: None };
            }
            Err(err) => {
                self.users.clear();
                self.phase = Phase::Ready {
                    error: Some(err.operation.failure_message().to_string()),
                    success: None,
                };
            }
        }
    }

    /// Append a created user. Returns the success ticket.
    pub fn apply_created(&mut self, result: Result<UserRecord, ApiError>) -> Option<u64> {
        match result {
            Ok(mut user) => {
                if self.contains(user.id) {
                    let fresh = self.free_id();
                    log::warn!("[DASHBOARD] Placeholder id {} already taken, using {}", user.id, fresh);
                    user.id = fresh;
                }
                self.users.push(user);
                Some(self.succeed("User created successfully!"))
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Replace the user with `id` in place and stop editing. Returns the success ticket.
    pub fn apply_updated(&mut self, id: u32, result: Result<UserRecord, ApiError>) -> Option<u64> {
        match result {
            Ok(updated) => {
                if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
                    *user = updated;
                }
                self.editing = None;
                Some(self.succeed("User updated successfully!"))
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Remove the user with `id`. Returns the success ticket.
    pub fn apply_deleted(&mut self, id: u32, result: Result<(), ApiError>) -> Option<u64> {
        match result {
            Ok(()) => {
                self.users.retain(|u| u.id != id);
                Some(self.succeed("User deleted successfully!"))
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Clear the success banner if it is still the one identified by `ticket`
    pub fn clear_success(&mut self, ticket: u64) {
        if let Phase::Ready { success, .. } = &mut self.phase {
            if success.as_ref().is_some_and(|m| m.ticket == ticket) {
                *success = None;
            }
        }
    }

    fn contains(&self, id: u32) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    /// One past the largest id, or the lowest unused id once that would overflow
    fn free_id(&self) -> u32 {
        match self.users.iter().map(|u| u.id).max() {
            None => 0,
            Some(max) => max
                .checked_add(1)
                .or_else(|| (0..=u32::MAX).find(|id| !self.contains(*id)))
                .unwrap_or(max),
        }
    }

    fn succeed(&mut self, text: &str) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let message = StatusMessage { text: text.to_string(), ticket };
        self.phase = Phase::Ready {
            error: None,
            success: Some(message),
        };
        ticket
    }

    fn fail(&mut self, err: &ApiError) {
        let error = Some(err.operation.failure_message().to_string());
        if let Phase::Ready { error: slot, .. } = &mut self.phase {
            *slot = error;
            return;
        }
        self.phase = Phase::Ready { error, success: None };
    }
}
