//! Load, add, edit and delete flows, sequencing client calls with page updates.
//!
//! Each step takes the current [`FormSession`] by value and hands back the next
//! one inside a [`Transition`]. Failures never abort a flow half way: cleanup
//! such as closing the popup runs first, then the [`FailurePolicy`] decides
//! whether the failure is only logged or returned to the caller.

use tracing::{debug, error, info, warn};

use crate::client::{Transport, UsersClient};
use crate::error::{Result, UserdeskError};
use crate::form::{self, FormSession};
use crate::page::{ClickEvent, Page};
use crate::render;
use crate::router::{self, Intent};
use crate::types::{RecordId, UserRecord};

/// What to do with a failed request once the flow has finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log it and carry on as if there was nothing to render.
    #[default]
    LogAndContinue,
    /// Return it as an error.
    Propagate,
}

#[derive(Debug)]
pub enum Outcome {
    Loaded(usize),
    Opened,
    Populated(UserRecord),
    Added(UserRecord),
    Updated(UserRecord),
    Deleted(RecordId),
    Closed,
    /// Submit with an empty field; nothing was sent.
    Incomplete,
    Ignored,
    Failed(UserdeskError),
}

#[derive(Debug)]
pub struct Transition {
    pub session: FormSession,
    pub outcome: Outcome,
}

impl Transition {
    fn new(session: FormSession, outcome: Outcome) -> Self {
        Self { session, outcome }
    }
}

pub struct App<T> {
    client: UsersClient<T>,
    page: Page,
    session: FormSession,
    policy: FailurePolicy,
}

impl<T: Transport> App<T> {
    pub fn new(client: UsersClient<T>, policy: FailurePolicy) -> Self {
        Self {
            client,
            page: Page::default(),
            session: FormSession::Idle,
            policy,
        }
    }

    pub fn client(&self) -> &UsersClient<T> {
        &self.client
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    #[allow(dead_code)]
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Initial fetch of the whole collection.
    pub async fn load(&mut self) -> Result<Outcome> {
        let outcome = match self.client.get::<Vec<UserRecord>>(self.client.collection()).await {
            Ok(users) => {
                render::render_all(&mut self.page.table, Some(users.as_slice()));
                Outcome::Loaded(users.len())
            }
            Err(e) => {
                render::render_all(&mut self.page.table, None);
                Outcome::Failed(e)
            }
        };
        self.settle(outcome)
    }

    pub async fn handle(&mut self, event: &ClickEvent) -> Result<Outcome> {
        match router::route(event) {
            Some(intent) => self.dispatch(intent).await,
            None => Ok(Outcome::Ignored),
        }
    }

    pub async fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        let session = std::mem::take(&mut self.session);
        let transition = match intent {
            Intent::OpenAdd => Transition::new(form::begin_add(&mut self.page), Outcome::Opened),
            Intent::Close => Transition::new(form::reset(&mut self.page), Outcome::Closed),
            Intent::Submit => match session {
                FormSession::Edit(id) => self.submit_edit(id).await,
                session => self.submit_add(session).await,
            },
            Intent::Edit(id) => self.prepare_edit(id).await,
            Intent::Delete(id) => Transition::new(session, self.delete(id).await),
        };
        self.session = transition.session;
        self.settle(transition.outcome)
    }

    async fn submit_add(&mut self, session: FormSession) -> Transition {
        let fields = form::read_form_values(&self.page);
        if !fields.is_complete() {
            debug!("form incomplete, not submitting");
            return Transition::new(session, Outcome::Incomplete);
        }

        let outcome = match self
            .client
            .post::<_, UserRecord>(self.client.collection(), &fields)
            .await
        {
            Ok(user) => {
                render::append_row(&mut self.page.table, &user);
                info!(id = %user.id, "User has been added.");
                Outcome::Added(user)
            }
            Err(e) => Outcome::Failed(e),
        };

        Transition::new(form::reset(&mut self.page), outcome)
    }

    async fn prepare_edit(&mut self, id: RecordId) -> Transition {
        let session = form::begin_edit(&mut self.page, id.clone());

        let fetched = match self.client.member(&id) {
            Ok(url) => self.client.get::<UserRecord>(url).await,
            Err(e) => Err(e),
        };

        let outcome = match fetched {
            Ok(user) => {
                form::populate(&mut self.page, &user);
                Outcome::Populated(user)
            }
            Err(e) => Outcome::Failed(e),
        };
        Transition::new(session, outcome)
    }

    async fn submit_edit(&mut self, id: RecordId) -> Transition {
        let fields = form::read_form_values(&self.page);
        if !fields.is_complete() {
            debug!(%id, "form incomplete, not submitting");
            return Transition::new(FormSession::Edit(id), Outcome::Incomplete);
        }

        let replaced = match self.client.member(&id) {
            Ok(url) => self.client.put::<_, UserRecord>(url, &fields).await,
            Err(e) => Err(e),
        };

        let outcome = match replaced {
            Ok(user) => {
                if !render::update_row(&mut self.page.table, &id, &user) {
                    warn!(%id, "edited user has no row in the table");
                }
                Outcome::Updated(user)
            }
            Err(e) => Outcome::Failed(e),
        };

        Transition::new(form::reset(&mut self.page), outcome)
    }

    async fn delete(&mut self, id: RecordId) -> Outcome {
        let url = match self.client.member(&id) {
            Ok(url) => url,
            Err(e) => return Outcome::Failed(e),
        };

        match self.client.delete(url).await {
            Ok(response) if response.ok() => {
                render::remove_row(&mut self.page.table, &id);
                info!(%id, "User has been deleted.");
                Outcome::Deleted(id)
            }
            Ok(response) => Outcome::Failed(UserdeskError::DeleteRejected {
                id,
                status: response.status,
            }),
            Err(e) => Outcome::Failed(e),
        }
    }

    fn settle(&self, outcome: Outcome) -> Result<Outcome> {
        match (outcome, self.policy) {
            (Outcome::Failed(e), FailurePolicy::Propagate) => Err(e),
            (Outcome::Failed(e), FailurePolicy::LogAndContinue) => {
                match &e {
                    UserdeskError::DeleteRejected { .. } => warn!("{e}"),
                    _ => error!("{e}"),
                }
                Ok(Outcome::Failed(e))
            }
            (outcome, _) => Ok(outcome),
        }
    }
}
