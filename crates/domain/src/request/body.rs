//! HTTP request body types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::row::{FileAttachment, MultipartMeta, RowList};

/// The active body representation of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyContentType {
    /// No body.
    #[default]
    None,
    /// Raw JSON text.
    Json,
    /// Raw XML text.
    Xml,
    /// Raw HTML text.
    Html,
    /// Raw plain text.
    Text,
    /// `application/x-www-form-urlencoded` key-value fields.
    UrlEncoded,
    /// `multipart/form-data` fields.
    Multipart,
    /// A single binary file.
    OctetStream,
}

impl BodyContentType {
    /// Returns all body types, in UI display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::None,
            Self::Json,
            Self::Xml,
            Self::Html,
            Self::Text,
            Self::UrlEncoded,
            Self::Multipart,
            Self::OctetStream,
        ]
    }

    /// The MIME type this body representation serializes as.
    #[must_use]
    pub const fn mime(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Json => Some("application/json"),
            Self::Xml => Some("application/xml"),
            Self::Html => Some("text/html"),
            Self::Text => Some("text/plain"),
            Self::UrlEncoded => Some("application/x-www-form-urlencoded"),
            Self::Multipart => Some("multipart/form-data"),
            Self::OctetStream => Some("application/octet-stream"),
        }
    }

    /// Whether this type renders the shared raw-text buffer.
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, Self::Json | Self::Xml | Self::Html | Self::Text)
    }
}

/// Request body with every representation retained simultaneously.
///
/// Switching [`BodyContentType`] only changes which representation is
/// rendered and serialized; the others keep their data, so the user can
/// switch away and back without loss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// The representation currently in effect.
    #[serde(default)]
    pub content_type: BodyContentType,
    /// Text buffer shared by the raw family (JSON, XML, HTML, plain).
    #[serde(default)]
    pub raw: String,
    /// Fields for the url-encoded representation.
    #[serde(default)]
    pub url_encoded: RowList,
    /// Fields for the multipart representation.
    #[serde(default)]
    pub multipart: RowList<MultipartMeta>,
    /// File for the octet-stream representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<FileAttachment>,
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Switches the active representation, preserving the data of every
    /// other representation.
    pub const fn set_content_type(&mut self, content_type: BodyContentType) {
        self.content_type = content_type;
    }

    /// The Content-Type header value implied by the active representation.
    #[must_use]
    pub const fn header_value(&self) -> Option<&'static str> {
        self.content_type.mime()
    }

    /// Whether the active representation holds no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.content_type {
            BodyContentType::None => true,
            BodyContentType::Json
            | BodyContentType::Xml
            | BodyContentType::Html
            | BodyContentType::Text => self.raw.is_empty(),
            BodyContentType::UrlEncoded => self.url_encoded.active_entries().next().is_none(),
            BodyContentType::Multipart => self.multipart.active_entries().next().is_none(),
            BodyContentType::OctetStream => self.binary.is_none(),
        }
    }

    /// Reformats the raw buffer as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidBody`] when the active type is not JSON or the
    /// buffer does not parse; the buffer is unchanged on error.
    pub fn prettify_json(&mut self) -> DomainResult<()> {
        if !matches!(self.content_type, BodyContentType::Json) {
            return Err(DomainError::InvalidBody(
                "active body type is not JSON".to_string(),
            ));
        }
        let value: serde_json::Value = serde_json::from_str(&self.raw)
            .map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.raw = serde_json::to_string_pretty(&value)
            .map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        Ok(())
    }
}
