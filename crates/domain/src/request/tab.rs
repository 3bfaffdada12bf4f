//! Request tabs: one independent request-editing session per tab.

use serde::{Deserialize, Serialize};

use super::body::RequestBody;
use super::method::Method;
use crate::error::{DomainError, DomainResult};
use crate::id::{RowId, TabId};
use crate::row::{MultipartMeta, Row, RowField, RowList, VariableMeta};
use crate::settings::TabDefaults;

/// The editor panes of a request tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubTab {
    /// Query parameters.
    #[default]
    Parameters,
    /// Request body.
    Body,
    /// Request headers.
    Headers,
    /// Authorization configuration.
    Authorization,
    /// Pre-request script.
    PreRequest,
    /// Post-request script.
    PostRequest,
    /// Tab-scoped environment variables.
    Variables,
}

impl SubTab {
    /// Returns all panes, in UI display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Parameters,
            Self::Body,
            Self::Headers,
            Self::Authorization,
            Self::PreRequest,
            Self::PostRequest,
            Self::Variables,
        ]
    }
}

/// Addresses one of a tab's row lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowGroup {
    /// Query parameters.
    Params,
    /// Request headers.
    Headers,
    /// Tab-scoped environment variables.
    Variables,
    /// Url-encoded body fields.
    UrlEncoded,
    /// Multipart body fields.
    Multipart,
}

/// Mutable, group-addressed access to one of a tab's row lists.
///
/// Lets the intent layer run the shared row algorithms without knowing
/// which per-group payload the list carries.
pub enum RowsMut<'a> {
    /// Plain key-value rows (params, headers, url-encoded fields).
    Plain(&'a mut RowList),
    /// Environment-variable rows.
    Variables(&'a mut RowList<VariableMeta>),
    /// Multipart body rows.
    Multipart(&'a mut RowList<MultipartMeta>),
}

impl RowsMut<'_> {
    /// Edits one text field of a row. See [`RowList::edit_field`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying list's error; the list is unchanged then.
    pub fn edit_field(self, id: RowId, field: RowField, value: String) -> DomainResult<()> {
        match self {
            Self::Plain(list) => list.edit_field(id, field, value),
            Self::Variables(list) => list.edit_field(id, field, value),
            Self::Multipart(list) => list.edit_field(id, field, value),
        }
    }

    /// Toggles a row's enabled state. See [`RowList::set_enabled`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying list's error; the list is unchanged then.
    pub fn set_enabled(self, id: RowId, enabled: bool) -> DomainResult<()> {
        match self {
            Self::Plain(list) => list.set_enabled(id, enabled),
            Self::Variables(list) => list.set_enabled(id, enabled),
            Self::Multipart(list) => list.set_enabled(id, enabled),
        }
    }

    /// Deletes a row. See [`RowList::delete_row`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying list's error; the list is unchanged then.
    pub fn delete_row(self, id: RowId) -> DomainResult<()> {
        match self {
            Self::Plain(list) => list.delete_row(id),
            Self::Variables(list) => list.delete_row(id),
            Self::Multipart(list) => list.delete_row(id),
        }
    }

    /// Resets the list. See [`RowList::delete_all`].
    pub fn delete_all(self) {
        match self {
            Self::Plain(list) => list.delete_all(),
            Self::Variables(list) => list.delete_all(),
            Self::Multipart(list) => list.delete_all(),
        }
    }

    /// Moves a row within the editable projection. See [`RowList::reorder`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying list's error; the list is unchanged then.
    pub fn reorder(self, from: usize, to: usize) -> DomainResult<()> {
        match self {
            Self::Plain(list) => list.reorder(from, to),
            Self::Variables(list) => list.reorder(from, to),
            Self::Multipart(list) => list.reorder(from, to),
        }
    }
}

/// One request-editing tab: scalar request state plus one row list per
/// field group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTab {
    /// Stable tab identity.
    pub id: TabId,
    /// Committed display name. Renames go through the two-phase buffer.
    name: String,
    /// Pending rename buffer; ephemeral, never serialized.
    #[serde(skip)]
    pending_name: Option<String>,
    /// The request method.
    #[serde(default)]
    pub method: Method,
    /// The request URL as typed (may be incomplete while editing).
    #[serde(default)]
    pub url: String,
    /// Which editor pane is visible.
    #[serde(default)]
    pub active_sub_tab: SubTab,
    /// Query parameters.
    #[serde(default)]
    pub params: RowList,
    /// Request headers.
    #[serde(default)]
    pub headers: RowList,
    /// Tab-scoped environment variables.
    #[serde(default)]
    pub variables: RowList<VariableMeta>,
    /// Request body, all representations retained.
    #[serde(default)]
    pub body: RequestBody,
    /// Script run before the request is sent.
    #[serde(default)]
    pub pre_request_script: String,
    /// Script run after the response arrives.
    #[serde(default)]
    pub post_request_script: String,
    /// Authorization configuration, free text owned by the auth pane.
    #[serde(default)]
    pub auth_config: String,
}

impl RequestTab {
    /// Creates a tab seeded from the given defaults: default name, method
    /// and pane, plus a headers list holding one blank row followed by the
    /// pinned (locked) header rows.
    #[must_use]
    pub fn from_defaults(defaults: &TabDefaults) -> Self {
        let mut header_rows = vec![Row::blank()];
        header_rows.extend(
            defaults
                .pinned_headers
                .iter()
                .map(|pinned| Row::new(&pinned.key, &pinned.value).locked()),
        );

        Self {
            id: TabId::new(),
            name: defaults.tab_name.clone(),
            pending_name: None,
            method: defaults.method.clone(),
            url: String::new(),
            active_sub_tab: defaults.sub_tab,
            params: RowList::new(),
            headers: RowList::from_rows(header_rows),
            variables: RowList::new(),
            body: RequestBody::none(),
            pre_request_script: String::new(),
            post_request_script: String::new(),
            auth_config: String::new(),
        }
    }

    /// The committed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rename buffer, when a rename is in progress.
    #[must_use]
    pub fn pending_name(&self) -> Option<&str> {
        self.pending_name.as_deref()
    }

    /// Starts a rename: the buffer is seeded with the committed name.
    /// Starting again simply re-seeds the buffer.
    pub fn begin_rename(&mut self) {
        self.pending_name = Some(self.name.clone());
    }

    /// Replaces the rename buffer.
    ///
    /// # Errors
    ///
    /// [`DomainError::NoPendingRename`] when no rename was started.
    pub fn set_pending_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        if self.pending_name.is_none() {
            return Err(DomainError::NoPendingRename(self.id));
        }
        self.pending_name = Some(name.into());
        Ok(())
    }

    /// Commits the rename buffer to the visible name and clears it.
    ///
    /// # Errors
    ///
    /// [`DomainError::NoPendingRename`] when no rename was started;
    /// [`DomainError::InvalidName`] when the buffer is empty or whitespace.
    /// The buffer survives a failed commit so the user can correct it.
    pub fn commit_rename(&mut self) -> DomainResult<()> {
        let Some(pending) = self.pending_name.as_ref() else {
            return Err(DomainError::NoPendingRename(self.id));
        };
        let trimmed = pending.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "tab name cannot be empty".to_string(),
            ));
        }
        self.name = trimmed.to_string();
        self.pending_name = None;
        Ok(())
    }

    /// Discards the rename buffer, leaving the committed name untouched.
    /// Harmless when no rename is in progress.
    pub fn cancel_rename(&mut self) {
        self.pending_name = None;
    }

    /// Group-addressed mutable access to one of this tab's row lists.
    pub fn rows_mut(&mut self, group: RowGroup) -> RowsMut<'_> {
        match group {
            RowGroup::Params => RowsMut::Plain(&mut self.params),
            RowGroup::Headers => RowsMut::Plain(&mut self.headers),
            RowGroup::Variables => RowsMut::Variables(&mut self.variables),
            RowGroup::UrlEncoded => RowsMut::Plain(&mut self.body.url_encoded),
            RowGroup::Multipart => RowsMut::Multipart(&mut self.body.multipart),
        }
    }
}

impl Default for RequestTab {
    fn default() -> Self {
        Self::from_defaults(&TabDefaults::default())
    }
}
