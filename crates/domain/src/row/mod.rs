//! Editable key-value rows.
//!
//! A [`Row`] is the atomic editable unit behind query parameters, request
//! headers, body form fields and environment variables. The per-group
//! payload is a type parameter, so each field group gets its own concrete
//! row shape ([`ParamRow`], [`HeaderRow`], [`MultipartRow`], [`VariableRow`])
//! over one shared base instead of a bag of optional fields.

mod list;

pub use list::RowList;

use serde::{Deserialize, Serialize};

use crate::id::RowId;

/// Marker for per-group row payloads.
pub trait RowMeta: Clone + Default + PartialEq {}

impl RowMeta for () {}

/// Opaque handle to a file chosen by the user.
///
/// The core never reads file contents; resolving the attachment into bytes
/// is the network collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// File name as presented by the host.
    pub name: String,
    /// Size in bytes, when the host knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileAttachment {
    /// Creates an attachment handle from a file name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    /// Records the file size on the handle.
    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Payload of multipart body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartMeta {
    /// Attached file; when present the part sends the file instead of the
    /// row's text value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileAttachment>,
    /// Content-type override for this part, independent of the outer body
    /// content type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl RowMeta for MultipartMeta {}

/// Payload of environment-variable rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableMeta {
    /// Secret values are masked by the render layer; the core stores them
    /// as-is.
    #[serde(default)]
    pub secret: bool,
}

impl RowMeta for VariableMeta {}

/// The directly editable text fields of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowField {
    /// The row's key.
    Key,
    /// The row's value.
    Value,
    /// The row's documentation string.
    Description,
}

/// One editable entry of a [`RowList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row<M = ()> {
    /// Stable identity: assigned at creation, untouched by edits and
    /// reorders, never reused after deletion.
    pub id: RowId,
    /// The entry key.
    pub key: String,
    /// The entry value.
    pub value: String,
    /// Optional documentation for the entry.
    #[serde(default)]
    pub description: String,
    /// Disabled rows are kept and ordered but skipped when the request is
    /// resolved.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Locked rows are exempt from deletion and reordering, and their key
    /// cannot be edited.
    #[serde(default)]
    pub locked: bool,
    /// Group-specific payload.
    pub meta: M,
}

const fn default_enabled() -> bool {
    true
}

impl<M: RowMeta> Row<M> {
    /// Creates an empty editable row.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: RowId::new(),
            key: String::new(),
            value: String::new(),
            description: String::new(),
            enabled: true,
            locked: false,
            meta: M::default(),
        }
    }

    /// Creates an enabled row with the given key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::blank()
        }
    }

    /// Adds a description to this row.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces this row's payload.
    #[must_use]
    pub fn with_meta(mut self, meta: M) -> Self {
        self.meta = meta;
        self
    }

    /// Marks this row as locked.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// Query-parameter row.
pub type ParamRow = Row;
/// Request-header row.
pub type HeaderRow = Row;
/// Multipart body-field row.
pub type MultipartRow = Row<MultipartMeta>;
/// Environment-variable row.
pub type VariableRow = Row<VariableMeta>;
