//! Resolution of a request tab into a transport-ready shape.
//!
//! The network collaborator receives a [`ResolvedRequest`]: parsed URL
//! with the enabled params appended as query pairs, enabled headers in
//! row order, and the body resolved per the active representation.
//! Resolution is read-only and total — any invalid input yields an `Err`
//! and no partial result.

use quiver_domain::{
    BodyContentType, FileAttachment, Method, MultipartRow, RequestBody, RequestTab,
};
use url::Url;

use crate::error::{ApplicationError, ApplicationResult};

/// A request in the shape the network collaborator consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// The request method.
    pub method: Method,
    /// The request URL with query parameters applied.
    pub url: Url,
    /// Header name/value pairs, in row order.
    pub headers: Vec<(String, String)>,
    /// The resolved body.
    pub body: ResolvedBody,
}

/// The body of a resolved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedBody {
    /// No body.
    None,
    /// Text body with its content type.
    Text {
        /// The body payload.
        content: String,
        /// The content type it serializes as.
        content_type: String,
    },
    /// Multipart form data.
    Multipart {
        /// The form parts, in row order.
        parts: Vec<ResolvedPart>,
    },
    /// A single binary file.
    Binary {
        /// The attached file handle.
        file: FileAttachment,
        /// Content type guessed from the file name.
        content_type: String,
    },
}

/// One part of a resolved multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPart {
    /// The form field name.
    pub name: String,
    /// The part payload.
    pub content: PartContent,
    /// Explicit or guessed content type, when one applies.
    pub content_type: Option<String>,
}

/// Payload of a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    /// A text value.
    Text(String),
    /// A file attachment handle.
    File(FileAttachment),
}

/// Resolves a tab into the shape handed to the network collaborator.
///
/// Skipped rows: disabled rows, rows with empty keys, and header rows
/// with empty values. When no Content-Type header survives and the body
/// implies one, it is appended (multipart excepted — its header needs the
/// transport-chosen boundary).
///
/// # Errors
///
/// [`ApplicationError::InvalidUrl`] when the URL does not parse;
/// [`ApplicationError::InvalidBody`] when the active representation does
/// not serialize; [`ApplicationError::InvalidPartContentType`] and
/// [`ApplicationError::MissingBinaryFile`] per part/attachment problems.
pub fn resolve(tab: &RequestTab) -> ApplicationResult<ResolvedRequest> {
    let mut url = Url::parse(tab.url.trim())
        .map_err(|e| ApplicationError::InvalidUrl(e.to_string()))?;
    let mut params = tab.params.active_entries().peekable();
    if params.peek().is_some() {
        let mut pairs = url.query_pairs_mut();
        for row in params {
            pairs.append_pair(&row.key, &row.value);
        }
    }

    let mut headers: Vec<(String, String)> = tab
        .headers
        .active_entries()
        .filter(|row| !row.value.is_empty())
        .map(|row| (row.key.clone(), row.value.clone()))
        .collect();

    let body = resolve_body(&tab.body)?;

    let has_content_type = headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
    if !has_content_type && !matches!(tab.body.content_type, BodyContentType::Multipart) {
        if let Some(mime) = tab.body.header_value() {
            headers.push(("Content-Type".to_string(), mime.to_string()));
        }
    }

    Ok(ResolvedRequest {
        method: tab.method.clone(),
        url,
        headers,
        body,
    })
}

fn resolve_body(body: &RequestBody) -> ApplicationResult<ResolvedBody> {
    match body.content_type {
        BodyContentType::None => Ok(ResolvedBody::None),
        BodyContentType::Json => {
            serde_json::from_str::<serde_json::Value>(&body.raw)
                .map_err(|e| ApplicationError::InvalidBody(e.to_string()))?;
            Ok(text_body(body, "application/json"))
        }
        BodyContentType::Xml => Ok(text_body(body, "application/xml")),
        BodyContentType::Html => Ok(text_body(body, "text/html")),
        BodyContentType::Text => Ok(text_body(body, "text/plain")),
        BodyContentType::UrlEncoded => {
            let fields: Vec<(&str, &str)> = body
                .url_encoded
                .active_entries()
                .map(|row| (row.key.as_str(), row.value.as_str()))
                .collect();
            let content = serde_urlencoded::to_string(fields)
                .map_err(|e| ApplicationError::InvalidBody(e.to_string()))?;
            Ok(ResolvedBody::Text {
                content,
                content_type: "application/x-www-form-urlencoded".to_string(),
            })
        }
        BodyContentType::Multipart => {
            let mut parts = Vec::new();
            for row in body.multipart.active_entries() {
                parts.push(resolve_part(row)?);
            }
            Ok(ResolvedBody::Multipart { parts })
        }
        BodyContentType::OctetStream => {
            let file = body
                .binary
                .clone()
                .ok_or(ApplicationError::MissingBinaryFile)?;
            let content_type = mime_guess::from_path(&file.name)
                .first_or_octet_stream()
                .to_string();
            Ok(ResolvedBody::Binary { file, content_type })
        }
    }
}

fn text_body(body: &RequestBody, content_type: &str) -> ResolvedBody {
    ResolvedBody::Text {
        content: body.raw.clone(),
        content_type: content_type.to_string(),
    }
}

fn resolve_part(row: &MultipartRow) -> ApplicationResult<ResolvedPart> {
    let content_type = part_content_type(row)?;
    let content = row.meta.file.clone().map_or_else(
        || PartContent::Text(row.value.clone()),
        PartContent::File,
    );
    Ok(ResolvedPart {
        name: row.key.clone(),
        content,
        content_type,
    })
}

/// The explicit per-part override wins; otherwise a file's type is
/// guessed from its name, and plain text parts carry no type at all.
fn part_content_type(row: &MultipartRow) -> ApplicationResult<Option<String>> {
    if let Some(explicit) = &row.meta.content_type {
        let trimmed = explicit.trim();
        if !trimmed.is_empty() {
            let parsed: mime::Mime =
                trimmed
                    .parse()
                    .map_err(|_| ApplicationError::InvalidPartContentType {
                        part: row.key.clone(),
                        value: explicit.clone(),
                    })?;
            return Ok(Some(parsed.to_string()));
        }
    }
    Ok(row
        .meta
        .file
        .as_ref()
        .map(|file| {
            mime_guess::from_path(&file.name)
                .first_or_octet_stream()
                .to_string()
        }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quiver_domain::{MultipartMeta, Row, RowField, RowList};

    fn tab_with_url(url: &str) -> RequestTab {
        let mut tab = RequestTab::default();
        tab.url = url.to_string();
        tab
    }

    #[test]
    fn test_resolve_appends_enabled_params() {
        let mut tab = tab_with_url("https://api.example.com/search");
        let row = tab.params.rows()[0].id;
        tab.params.edit_field(row, RowField::Key, "q").unwrap();
        tab.params.edit_field(row, RowField::Value, "rust").unwrap();
        let disabled = tab.params.rows()[1].id;
        tab.params.edit_field(disabled, RowField::Key, "debug").unwrap();
        tab.params.set_enabled(disabled, false).unwrap();

        let resolved = resolve(&tab).unwrap();
        assert_eq!(resolved.url.as_str(), "https://api.example.com/search?q=rust");
    }

    #[test]
    fn test_resolve_invalid_url_rejected() {
        let tab = tab_with_url("not a url");
        assert!(matches!(
            resolve(&tab),
            Err(ApplicationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resolve_appends_body_content_type_header() {
        let mut tab = tab_with_url("https://api.example.com/items");
        tab.method = Method::Post;
        tab.body.set_content_type(BodyContentType::Json);
        tab.body.raw = r#"{"name":"widget"}"#.to_string();

        let resolved = resolve(&tab).unwrap();
        assert_eq!(
            resolved.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(
            resolved.body,
            ResolvedBody::Text {
                content: r#"{"name":"widget"}"#.to_string(),
                content_type: "application/json".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_invalid_json_rejected() {
        let mut tab = tab_with_url("https://api.example.com/items");
        tab.body.set_content_type(BodyContentType::Json);
        tab.body.raw = "{oops".to_string();
        assert!(matches!(
            resolve(&tab),
            Err(ApplicationError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_resolve_url_encoded_body() {
        let mut tab = tab_with_url("https://auth.example.com/token");
        tab.body.set_content_type(BodyContentType::UrlEncoded);
        tab.body.url_encoded = RowList::from_rows(vec![
            Row::new("grant_type", "client_credentials"),
            Row::new("scope", "read write"),
        ]);

        let resolved = resolve(&tab).unwrap();
        assert_eq!(
            resolved.body,
            ResolvedBody::Text {
                content: "grant_type=client_credentials&scope=read+write".to_string(),
                content_type: "application/x-www-form-urlencoded".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_multipart_parts() {
        let mut tab = tab_with_url("https://api.example.com/upload");
        tab.body.set_content_type(BodyContentType::Multipart);
        tab.body.multipart = RowList::from_rows(vec![
            Row::new("caption", "holiday"),
            Row::new("photo", "").with_meta(MultipartMeta {
                file: Some(FileAttachment::new("beach.png")),
                content_type: None,
            }),
        ]);

        let resolved = resolve(&tab).unwrap();
        let ResolvedBody::Multipart { parts } = resolved.body else {
            panic!("expected multipart body");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].content, PartContent::Text("holiday".to_string()));
        assert_eq!(parts[0].content_type, None);
        assert_eq!(parts[1].content_type, Some("image/png".to_string()));
        assert!(
            !resolved
                .headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type")),
            "multipart leaves the header to the transport"
        );
    }

    #[test]
    fn test_resolve_part_content_type_override_validated() {
        let mut tab = tab_with_url("https://api.example.com/upload");
        tab.body.set_content_type(BodyContentType::Multipart);
        tab.body.multipart = RowList::from_rows(vec![Row::new("blob", "x").with_meta(
            MultipartMeta {
                file: None,
                content_type: Some("not//a//mime".to_string()),
            },
        )]);
        assert!(matches!(
            resolve(&tab),
            Err(ApplicationError::InvalidPartContentType { .. })
        ));
    }

    #[test]
    fn test_resolve_binary_requires_file() {
        let mut tab = tab_with_url("https://api.example.com/upload");
        tab.body.set_content_type(BodyContentType::OctetStream);
        assert_eq!(resolve(&tab), Err(ApplicationError::MissingBinaryFile));

        tab.body.binary = Some(FileAttachment::new("dump.bin"));
        let resolved = resolve(&tab).unwrap();
        assert_eq!(
            resolved.body,
            ResolvedBody::Binary {
                file: FileAttachment::new("dump.bin"),
                content_type: "application/octet-stream".to_string(),
            }
        );
    }
}
