//! User intents
//!
//! Every mutation the render layer can request is a variant of [`Intent`]:
//! UI events are translated into intents and dispatched through
//! [`crate::SessionService::apply`]. Intents are plain serializable data,
//! so a host can record and replay an editing session.

use quiver_domain::{
    BodyContentType, FileAttachment, Method, RowField, RowGroup, RowId, SubTab, TabId,
};
use serde::{Deserialize, Serialize};

/// Which of a tab's two script slots an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPhase {
    /// Runs before the request is sent.
    PreRequest,
    /// Runs after the response arrives.
    PostRequest,
}

/// One user-originated mutation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Edit one text field of a row.
    EditRow {
        /// Target tab.
        tab: TabId,
        /// Target row group within the tab.
        group: RowGroup,
        /// Target row.
        row: RowId,
        /// Which field to edit.
        field: RowField,
        /// The new field content.
        value: String,
    },
    /// Toggle whether a row participates in resolution.
    SetRowEnabled {
        /// Target tab.
        tab: TabId,
        /// Target row group within the tab.
        group: RowGroup,
        /// Target row.
        row: RowId,
        /// The new enabled state.
        enabled: bool,
    },
    /// Delete a row.
    DeleteRow {
        /// Target tab.
        tab: TabId,
        /// Target row group within the tab.
        group: RowGroup,
        /// Target row.
        row: RowId,
    },
    /// Remove every unlocked row of a group and reset to one blank row.
    DeleteAllRows {
        /// Target tab.
        tab: TabId,
        /// Target row group within the tab.
        group: RowGroup,
    },
    /// Move a row within the editable projection of a group.
    ReorderRows {
        /// Target tab.
        tab: TabId,
        /// Target row group within the tab.
        group: RowGroup,
        /// Source position in the editable projection.
        from: usize,
        /// Destination position in the editable projection.
        to: usize,
    },
    /// Attach a file to a multipart row.
    AttachPartFile {
        /// Target tab.
        tab: TabId,
        /// Target multipart row.
        row: RowId,
        /// The file handle to attach.
        file: FileAttachment,
    },
    /// Detach the file from a multipart row.
    DetachPartFile {
        /// Target tab.
        tab: TabId,
        /// Target multipart row.
        row: RowId,
    },
    /// Set or clear a multipart row's content-type override.
    SetPartContentType {
        /// Target tab.
        tab: TabId,
        /// Target multipart row.
        row: RowId,
        /// The override; `None` restores guessing from the attachment.
        content_type: Option<String>,
    },
    /// Set or clear the octet-stream body file.
    SetBinaryFile {
        /// Target tab.
        tab: TabId,
        /// The file handle, or `None` to clear it.
        file: Option<FileAttachment>,
    },
    /// Change the request method.
    SetMethod {
        /// Target tab.
        tab: TabId,
        /// The new method.
        method: Method,
    },
    /// Change the request URL.
    SetUrl {
        /// Target tab.
        tab: TabId,
        /// The new URL text.
        url: String,
    },
    /// Change which editor pane is visible.
    SetSubTab {
        /// Target tab.
        tab: TabId,
        /// The pane to show.
        sub_tab: SubTab,
    },
    /// Switch the active body representation.
    SetContentType {
        /// Target tab.
        tab: TabId,
        /// The representation to activate.
        content_type: BodyContentType,
    },
    /// Replace the raw body text buffer.
    SetRawBody {
        /// Target tab.
        tab: TabId,
        /// The new buffer content.
        content: String,
    },
    /// Pretty-print the raw buffer as JSON.
    FormatRawBody {
        /// Target tab.
        tab: TabId,
    },
    /// Replace a script slot.
    SetScript {
        /// Target tab.
        tab: TabId,
        /// Which slot to replace.
        phase: ScriptPhase,
        /// The new script content.
        content: String,
    },
    /// Replace the authorization configuration text.
    SetAuthConfig {
        /// Target tab.
        tab: TabId,
        /// The new configuration content.
        content: String,
    },
    /// Open a fresh default tab and make it active.
    NewTab,
    /// Make a tab active.
    SwitchTab {
        /// The tab to activate.
        tab: TabId,
    },
    /// Close a tab.
    CloseTab {
        /// The tab to close.
        tab: TabId,
    },
    /// Start renaming a tab (seeds the pending buffer).
    BeginRename {
        /// Target tab.
        tab: TabId,
    },
    /// Replace a tab's pending rename buffer.
    SetPendingName {
        /// Target tab.
        tab: TabId,
        /// The new buffer content.
        name: String,
    },
    /// Commit a tab's pending rename buffer.
    CommitRename {
        /// Target tab.
        tab: TabId,
    },
    /// Discard a tab's pending rename buffer.
    CancelRename {
        /// Target tab.
        tab: TabId,
    },
}
