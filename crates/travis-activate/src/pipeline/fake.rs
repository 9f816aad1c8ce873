//! In-memory provider that records every call.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use travis_core::error::ProtocolError;
use travis_core::{
    BuildRequest, CiProvider, Page, PageCursor, Pagination, RepoId, RepositoryRecord, Result,
    SettingsPolicy, UserInfo,
};

use super::report::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CurrentUser,
    Sync(u64),
    List { owner: String, cursor: PageCursor },
    Activate(RepoId),
    Settings(RepoId),
    Build(RepoId),
}

/// Split records into pages of `page_size`, linked the way the provider
/// links them.
pub fn paged(records: Vec<RepositoryRecord>, page_size: usize) -> Vec<Page> {
    let total = records.len();
    let chunks: Vec<Vec<RepositoryRecord>> = if records.is_empty() {
        vec![Vec::new()]
    } else {
        records.chunks(page_size).map(|c| c.to_vec()).collect()
    };
    let last = chunks.len() - 1;

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, repositories)| {
            let offset = (i * page_size) as u32;
            let next = (i < last).then(|| PageCursor {
                limit: page_size as u32,
                offset: offset + page_size as u32,
            });
            Page {
                repositories,
                pagination: Pagination {
                    limit: Some(page_size as u32),
                    offset: Some(offset),
                    count: Some(total as u32),
                    is_last: i == last,
                    next,
                },
            }
        })
        .collect()
}

pub struct FakeProvider {
    pages: Vec<Page>,
    user_ok: bool,
    sync_ok: bool,
    fail_list_at: Option<usize>,
    failing: HashSet<(RepoId, Step)>,
    calls: Mutex<Vec<Call>>,
    branches: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub const USER_ID: u64 = 4242;

    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            user_ok: true,
            sync_ok: true,
            fail_list_at: None,
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            branches: Mutex::new(Vec::new()),
        }
    }

    pub fn without_user(mut self) -> Self {
        self.user_ok = false;
        self
    }

    pub fn failing_sync(mut self) -> Self {
        self.sync_ok = false;
        self
    }

    /// Fail the listing request with this zero-based index.
    pub fn failing_list_at(mut self, index: usize) -> Self {
        self.fail_list_at = Some(index);
        self
    }

    pub fn failing(mut self, repo: RepoId, step: Step) -> Self {
        self.failing.insert((repo, step));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    /// Branches sent with activation and build calls, in order.
    pub fn branches(&self) -> Vec<String> {
        self.branches.lock().unwrap().clone()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome(&self, repo: RepoId, step: Step) -> Result<()> {
        if self.failing.contains(&(repo, step)) {
            Err(ProtocolError::new(500, Some("error".into()), Some(format!("{step} broke")))
                .into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CiProvider for FakeProvider {
    async fn current_user(&self) -> Result<UserInfo> {
        self.push(Call::CurrentUser);
        if self.user_ok {
            Ok(UserInfo {
                id: Self::USER_ID,
                login: Some("instructor".into()),
            })
        } else {
            Err(ProtocolError::new(403, Some("login_required".into()), None)
                .with_body(r#"{"error_type":"login_required","error_message":"login required"}"#)
                .into())
        }
    }

    async fn sync_user(&self, user_id: u64) -> Result<()> {
        self.push(Call::Sync(user_id));
        if self.sync_ok {
            Ok(())
        } else {
            Err(ProtocolError::new(409, None, Some("sync already in progress".into())).into())
        }
    }

    async fn list_repositories(&self, owner: &str, cursor: PageCursor) -> Result<Page> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            let index = calls
                .iter()
                .filter(|c| matches!(c, Call::List { .. }))
                .count();
            calls.push(Call::List {
                owner: owner.to_string(),
                cursor,
            });
            index
        };

        if self.fail_list_at == Some(index) {
            return Err(ProtocolError::new(500, None, None)
                .with_body("listing unavailable")
                .into());
        }

        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| ProtocolError::malformed(404, "no such page").into())
    }

    async fn activate(&self, repo: RepoId, request: &BuildRequest) -> Result<()> {
        self.push(Call::Activate(repo));
        self.branches.lock().unwrap().push(request.branch().to_string());
        self.outcome(repo, Step::Activate)
    }

    async fn update_settings(&self, repo: RepoId, _policy: &SettingsPolicy) -> Result<()> {
        self.push(Call::Settings(repo));
        self.outcome(repo, Step::Settings)
    }

    async fn request_build(&self, repo: RepoId, request: &BuildRequest) -> Result<()> {
        self.push(Call::Build(repo));
        self.branches.lock().unwrap().push(request.branch().to_string());
        self.outcome(repo, Step::Build)
    }
}
