//! Request aggregate: method, body and the per-tab editing state.

mod body;
mod method;
mod tab;

pub use body::{BodyContentType, RequestBody};
pub use method::Method;
pub use tab::{RequestTab, RowGroup, RowsMut, SubTab};
