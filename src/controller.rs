//! Dashboard Controller
//!
//! Runs the remote operations and folds their results into [`DashboardState`].
//! Requests are neither queued nor deduplicated: overlapping calls apply in
//! completion order.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiError, UserApi};
use crate::models::{UserDraft, UserPatch, UserRecord};
use crate::store::{DashboardState, SubmitAction};

/// Single-writer handle to the dashboard state
pub trait StateCell: Clone + 'static {
    /// Apply `f` to the state; `None` if the state is gone (view torn down)
    fn mutate<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R>;
}

impl StateCell for RwSignal<DashboardState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

pub struct DashboardController<A, S> {
    api: Arc<A>,
    state: S,
}

impl<A, S: Clone> Clone for DashboardController<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: self.state.clone(),
        }
    }
}

fn log_failure(context: &str, err: &ApiError) {
    log::error!("[DASHBOARD] Error {}: {} ({})", context, err, err.cause());
}

impl<A: UserApi, S: StateCell> DashboardController<A, S> {
    pub fn new(api: Arc<A>, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Initial load: Loading -> Ready
    pub async fn load(&self) {
        log::info!("[DASHBOARD] Loading users");
        let result = self.api.list().await;
        match &result {
            Ok(users) => log::info!("[DASHBOARD] Loaded {} users", users.len()),
            Err(err) => log_failure("loading users", err),
        }
        self.state.mutate(|s| s.finish_load(result));
    }

    pub async fn create(&self, draft: UserDraft) -> Option<u64> {
        let result = self.api.create(&draft).await;
        if let Err(err) = &result {
            log_failure("creating user", err);
        }
        self.state.mutate(|s| s.apply_created(result)).flatten()
    }

    pub async fn update(&self, id: u32, patch: UserPatch) -> Option<u64> {
        let result = self.api.update(id, &patch).await;
        if let Err(err) = &result {
            log_failure("updating user", err);
        }
        self.state.mutate(|s| s.apply_updated(id, result)).flatten()
    }

    pub async fn delete(&self, id: u32) -> Option<u64> {
        let result = self.api.delete(id).await;
        if let Err(err) = &result {
            log_failure("deleting user", err);
        }
        self.state.mutate(|s| s.apply_deleted(id, result)).flatten()
    }

    /// Form submission: update the edited user, or create a new one
    pub async fn submit(&self, draft: UserDraft) -> Option<u64> {
        match self.state.mutate(|s| s.submit_action())? {
            SubmitAction::Update(id) => self.update(id, draft.into()).await,
            SubmitAction::Create => self.create(draft).await,
        }
    }

    pub fn begin_edit(&self, user: UserRecord) {
        self.state.mutate(|s| s.begin_edit(user));
    }

    pub fn cancel_edit(&self) {
        self.state.mutate(|s| s.cancel_edit());
    }

    pub fn clear_success(&self, ticket: u64) {
        self.state.mutate(|s| s.clear_success(ticket));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResult, Operation};
    use crate::models::Company;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    impl StateCell for Rc<RefCell<DashboardState>> {
        fn mutate<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    /// In-memory stand-in for the remote service
    #[derive(Default)]
    struct FakeUserApi {
        users: Vec<UserRecord>,
        failing: Vec<Operation>,
        calls: Mutex<Vec<String>>,
        next_id: Mutex<u32>,
    }

    impl FakeUserApi {
        fn with_users(ids: &[u32]) -> Self {
            Self {
                users: ids.iter().map(|&id| make_user(id)).collect(),
                next_id: Mutex::new(1000),
                ..Default::default()
            }
        }

        fn failing(mut self, operation: Operation) -> Self {
            self.failing.push(operation);
            self
        }

        fn check(&self, operation: Operation, call: String) -> ApiResult<()> {
            self.calls.lock().unwrap().push(call);
            if self.failing.contains(&operation) {
                return Err(ApiError::new(operation, "HTTP 500 Internal Server Error"));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl UserApi for FakeUserApi {
        async fn list(&self) -> ApiResult<Vec<UserRecord>> {
            self.check(Operation::Fetch, "list".to_string())?;
            Ok(self.users.clone())
        }

        async fn create(&self, draft: &UserDraft) -> ApiResult<UserRecord> {
            self.check(Operation::Create, format!("create {}", draft.name))?;
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            Ok(draft.clone().into_record(*next))
        }

        async fn update(&self, id: u32, patch: &UserPatch) -> ApiResult<UserRecord> {
            self.check(Operation::Update, format!("update {}", id))?;
            Ok(patch.to_draft().into_record(id))
        }

        async fn delete(&self, id: u32) -> ApiResult<()> {
            self.check(Operation::Delete, format!("delete {}", id))?;
            if self.users.iter().any(|u| u.id == id) {
                Ok(())
            } else {
                Err(ApiError::new(Operation::Delete, "HTTP 404 Not Found"))
            }
        }
    }

    fn make_user(id: u32) -> UserRecord {
        UserRecord {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            phone: "555-0100".to_string(),
            website: "example.com".to_string(),
            company: Company { name: "Example".to_string() },
        }
    }

    fn sample_draft() -> UserDraft {
        UserDraft {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            phone: "1".to_string(),
            website: "a.com".to_string(),
            company_name: "Co".to_string(),
        }
    }

    type TestController = DashboardController<FakeUserApi, Rc<RefCell<DashboardState>>>;

    async fn setup(api: FakeUserApi) -> (TestController, Arc<FakeUserApi>) {
        let api = Arc::new(api);
        let controller = DashboardController::new(api.clone(), Rc::new(RefCell::new(DashboardState::new())));
        controller.load().await;
        (controller, api)
    }

    fn ids(controller: &TestController) -> Vec<u32> {
        controller.state().borrow().users().iter().map(|u| u.id).collect()
    }

    #[tokio::test]
    async fn test_load_success() {
        let (controller, _) = setup(FakeUserApi::with_users(&[1, 2, 3])).await;
        let state = controller.state().borrow();

        assert!(!state.is_loading());
        assert_eq!(state.users().len(), 3);
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn test_load_failure() {
        let (controller, _) = setup(FakeUserApi::with_users(&[1]).failing(Operation::Fetch)).await;
        let state = controller.state().borrow();

        assert!(!state.is_loading());
        assert!(state.users().is_empty());
        assert_eq!(state.error(), Some("Failed to load users. Please try again later."));
    }

    #[tokio::test]
    async fn test_create_appends_draft() {
        let (controller, _) = setup(FakeUserApi::with_users(&[1, 2])).await;

        let ticket = controller.create(sample_draft()).await;
        assert!(ticket.is_some());

        let state = controller.state().borrow();
        assert_eq!(state.users().len(), 3);
        let created = state.users().last().unwrap();
        assert_eq!(UserDraft::from(created), sample_draft());
        assert_eq!(state.success(), Some("User created successfully!"));
    }

    #[tokio::test]
    async fn test_create_failure() {
        let (controller, _) = setup(FakeUserApi::with_users(&[1, 2]).failing(Operation::Create)).await;

        assert_eq!(controller.create(sample_draft()).await, None);
        assert_eq!(ids(&controller), vec![1, 2]);
        assert_eq!(
            controller.state().borrow().error(),
            Some("Failed to create user. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_update_replaces_only_target() {
        let (controller, _) = setup(FakeUserApi::with_users(&[3, 1, 2])).await;

        let patch = UserPatch {
            name: Some("Patched".to_string()),
            ..Default::default()
        };
        controller.update(1, patch).await;

        let state = controller.state().borrow();
        assert_eq!(ids(&controller), vec![3, 1, 2]);
        assert_eq!(state.users()[1].name, "Patched");
        assert_eq!(state.users()[1].email, "");
        assert_eq!(state.users()[0], make_user(3));
        assert_eq!(state.users()[2], make_user(2));
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let (controller, _) = setup(FakeUserApi::with_users(&[1, 2, 3])).await;

        controller.delete(1).await;
        assert_eq!(ids(&controller), vec![2, 3]);
        assert_eq!(controller.state().borrow().success(), Some("User deleted successfully!"));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails() {
        let (controller, _) = setup(FakeUserApi::with_users(&[1, 2])).await;

        assert_eq!(controller.delete(99).await, None);
        assert_eq!(ids(&controller), vec![1, 2]);
        assert_eq!(
            controller.state().borrow().error(),
            Some("Failed to delete user. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_submit_while_editing_updates() {
        let (controller, api) = setup(FakeUserApi::with_users(&[1, 2])).await;

        controller.begin_edit(make_user(2));
        controller.submit(sample_draft()).await;

        assert_eq!(api.calls(), vec!["list", "update 2"]);
        let state = controller.state().borrow();
        assert_eq!(state.users().len(), 2);
        assert_eq!(state.users()[1].name, "A");
        assert_eq!(state.editing(), None);
    }

    #[tokio::test]
    async fn test_submit_without_editing_creates() {
        let (controller, api) = setup(FakeUserApi::with_users(&[1])).await;

        controller.submit(sample_draft()).await;

        assert_eq!(api.calls(), vec!["list", "create A"]);
        assert_eq!(controller.state().borrow().users().len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_edit_returns_to_create() {
        let (controller, api) = setup(FakeUserApi::with_users(&[1])).await;

        controller.begin_edit(make_user(1));
        controller.cancel_edit();
        controller.submit(sample_draft()).await;

        assert_eq!(api.calls(), vec!["list", "create A"]);
    }

    #[tokio::test]
    async fn test_success_message_cleared_by_ticket() {
        let (controller, _) = setup(FakeUserApi::with_users(&[1])).await;

        let ticket = controller.delete(1).await.unwrap();
        controller.clear_success(ticket);
        assert_eq!(controller.state().borrow().success(), None);
    }
}
