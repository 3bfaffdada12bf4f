//! Quiver Domain - Core request-editing model
//!
//! This crate defines the editable row model and tab session for the
//! Quiver API client: ordered key-value row lists with stable row
//! identity, automatic blank-row growth, locked-row anchoring and
//! editable-projection reordering, aggregated into request tabs and a
//! multi-tab session. All types here are pure Rust with no I/O
//! dependencies; every mutator is all-or-nothing.

pub mod error;
pub mod id;
pub mod request;
pub mod row;
pub mod session;
pub mod settings;

pub use error::{DomainError, DomainResult};
pub use id::{RowId, TabId};
pub use request::{BodyContentType, Method, RequestBody, RequestTab, RowGroup, RowsMut, SubTab};
pub use row::{
    FileAttachment, HeaderRow, MultipartMeta, MultipartRow, ParamRow, Row, RowField, RowList,
    RowMeta, VariableMeta, VariableRow,
};
pub use session::TabSession;
pub use settings::{PinnedHeader, TabDefaults};
