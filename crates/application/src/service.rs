//! Intent dispatch over an owned tab session.

use quiver_domain::{
    BodyContentType, RequestTab, RowField, TabDefaults, TabId, TabSession,
};
use tracing::{debug, warn};

use crate::error::{ApplicationError, ApplicationResult};
use crate::intent::{Intent, ScriptPhase};

/// Owns the [`TabSession`] and applies [`Intent`]s to it.
///
/// The service is the single mutation entry point: callers hold the only
/// reference to the state tree and read it back through [`Self::session`]
/// snapshots. Every intent is all-or-nothing — on `Err` the session is
/// exactly as it was before the call.
#[derive(Debug, Clone)]
pub struct SessionService {
    session: TabSession,
}

impl SessionService {
    /// Creates a service over a session with one default tab.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: TabSession::new(),
        }
    }

    /// Creates a service whose tabs are seeded from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: TabDefaults) -> Self {
        Self {
            session: TabSession::with_defaults(defaults),
        }
    }

    /// Wraps an existing session.
    #[must_use]
    pub const fn from_session(session: TabSession) -> Self {
        Self { session }
    }

    /// The current session snapshot.
    #[must_use]
    pub const fn session(&self) -> &TabSession {
        &self.session
    }

    /// Consumes the service, returning the session.
    #[must_use]
    pub fn into_session(self) -> TabSession {
        self.session
    }

    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Propagates the rejected precondition ([`ApplicationError`]); the
    /// session is unchanged then.
    pub fn apply(&mut self, intent: Intent) -> ApplicationResult<()> {
        debug!(?intent, "applying intent");
        let result = self.dispatch(intent);
        if let Err(error) = &result {
            warn!(%error, "intent rejected");
        }
        result
    }

    #[allow(clippy::too_many_lines)]
    fn dispatch(&mut self, intent: Intent) -> ApplicationResult<()> {
        match intent {
            Intent::EditRow {
                tab,
                group,
                row,
                field,
                value,
            } => {
                self.tab_mut(tab)?.rows_mut(group).edit_field(row, field, value)?;
            }
            Intent::SetRowEnabled {
                tab,
                group,
                row,
                enabled,
            } => {
                self.tab_mut(tab)?.rows_mut(group).set_enabled(row, enabled)?;
            }
            Intent::DeleteRow { tab, group, row } => {
                self.tab_mut(tab)?.rows_mut(group).delete_row(row)?;
            }
            Intent::DeleteAllRows { tab, group } => {
                self.tab_mut(tab)?.rows_mut(group).delete_all();
            }
            Intent::ReorderRows {
                tab,
                group,
                from,
                to,
            } => {
                self.tab_mut(tab)?.rows_mut(group).reorder(from, to)?;
            }
            Intent::AttachPartFile { tab, row, file } => {
                self.tab_mut(tab)?
                    .body
                    .multipart
                    .update_meta(row, |meta| meta.file = Some(file))?;
            }
            Intent::DetachPartFile { tab, row } => {
                self.tab_mut(tab)?
                    .body
                    .multipart
                    .update_meta(row, |meta| meta.file = None)?;
            }
            Intent::SetPartContentType {
                tab,
                row,
                content_type,
            } => {
                self.tab_mut(tab)?
                    .body
                    .multipart
                    .update_meta(row, |meta| meta.content_type = content_type)?;
            }
            Intent::SetBinaryFile { tab, file } => {
                self.tab_mut(tab)?.body.binary = file;
            }
            Intent::SetMethod { tab, method } => {
                self.tab_mut(tab)?.method = method;
            }
            Intent::SetUrl { tab, url } => {
                self.tab_mut(tab)?.url = url;
            }
            Intent::SetSubTab { tab, sub_tab } => {
                self.tab_mut(tab)?.active_sub_tab = sub_tab;
            }
            Intent::SetContentType { tab, content_type } => {
                Self::set_content_type(self.tab_mut(tab)?, content_type)?;
            }
            Intent::SetRawBody { tab, content } => {
                self.tab_mut(tab)?.body.raw = content;
            }
            Intent::FormatRawBody { tab } => {
                self.tab_mut(tab)?.body.prettify_json()?;
            }
            Intent::SetScript {
                tab,
                phase,
                content,
            } => {
                let tab = self.tab_mut(tab)?;
                match phase {
                    ScriptPhase::PreRequest => tab.pre_request_script = content,
                    ScriptPhase::PostRequest => tab.post_request_script = content,
                }
            }
            Intent::SetAuthConfig { tab, content } => {
                self.tab_mut(tab)?.auth_config = content;
            }
            Intent::NewTab => {
                self.session.new_tab();
            }
            Intent::SwitchTab { tab } => {
                self.session.switch_tab(tab)?;
            }
            Intent::CloseTab { tab } => {
                self.session.close_tab(tab)?;
            }
            Intent::BeginRename { tab } => {
                self.tab_mut(tab)?.begin_rename();
            }
            Intent::SetPendingName { tab, name } => {
                self.tab_mut(tab)?.set_pending_name(name)?;
            }
            Intent::CommitRename { tab } => {
                self.tab_mut(tab)?.commit_rename()?;
            }
            Intent::CancelRename { tab } => {
                self.tab_mut(tab)?.cancel_rename();
            }
        }
        Ok(())
    }

    /// Switches the active body representation and mirrors its MIME type
    /// into the pinned Content-Type header row's value, when the tab has
    /// one. Locked rows accept value edits, so the sync goes through the
    /// regular field editor.
    fn set_content_type(
        tab: &mut RequestTab,
        content_type: BodyContentType,
    ) -> ApplicationResult<()> {
        tab.body.set_content_type(content_type);
        let pinned = tab
            .headers
            .rows()
            .iter()
            .find(|row| row.locked && row.key.eq_ignore_ascii_case("content-type"))
            .map(|row| row.id);
        if let Some(id) = pinned {
            let value = content_type.mime().unwrap_or_default();
            tab.headers.edit_field(id, RowField::Value, value)?;
        }
        Ok(())
    }

    fn tab_mut(&mut self, id: TabId) -> ApplicationResult<&mut RequestTab> {
        self.session
            .tab_mut(id)
            .ok_or_else(|| quiver_domain::DomainError::UnknownTab(id).into())
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
