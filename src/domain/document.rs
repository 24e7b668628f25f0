//! Documents: a metadata block, a blank line, and a body
//!
//! ```text
//! {"Title":"foo"}      <- metadata block
//!                      <- first blank line ends the block
//! Hello from foo.      <- body
//! ```
//!
//! A document without any blank line has no metadata block; its whole
//! content is the body.

use std::sync::Arc;

use memchr::memmem;
use serde::de::DeserializeOwned;

use super::format::{DecodeError, MetadataFormat};

/// Separator between the metadata block and the body
pub const BOUNDARY: &[u8] = b"\n\n";

/// Splits raw content at the first blank line.
///
/// Returns the metadata block (if a boundary exists) and the body. The
/// boundary itself belongs to neither part.
pub fn split_metadata(raw: &[u8]) -> (Option<&[u8]>, &[u8]) {
    match memmem::find(raw, BOUNDARY) {
        Some(at) => (Some(&raw[..at]), &raw[at + BOUNDARY.len()..]),
        None => (None, raw),
    }
}

/// A parsed document
#[derive(Debug, Clone, PartialEq)]
pub struct Document<M> {
    /// Root-relative name, `/`-separated
    pub name: String,

    /// Decoded metadata block, if the document has one
    pub metadata: Option<M>,

    pub body: Arc<[u8]>,
}

impl<M: DeserializeOwned> Document<M> {
    /// Splits `raw` and decodes its metadata block with `format`
    pub fn parse(
        name: impl Into<String>,
        raw: &[u8],
        format: MetadataFormat,
    ) -> Result<Self, DecodeError> {
        let (block, body) = split_metadata(raw);
        let metadata = match block {
            Some(block) => Some(format.decode(block)?),
            None => None,
        };

        Ok(Self {
            name: name.into(),
            metadata,
            body: Arc::from(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Clone, PartialEq, Deserialize)]
    struct Meta {
        #[serde(rename = "Title", default)]
        title: String,
    }

    #[test]
    fn splits_at_first_blank_line() {
        let (meta, body) = split_metadata(b"{\"Title\":\"foo\"}\n\nHello\n\nagain");
        assert_eq!(meta, Some(&b"{\"Title\":\"foo\"}"[..]));
        assert_eq!(body, b"Hello\n\nagain");
    }

    #[test]
    fn no_boundary_means_whole_body() {
        let raw = b"just a body\nwith lines\n";
        let (meta, body) = split_metadata(raw);
        assert_eq!(meta, None);
        assert_eq!(body, raw);
    }

    #[test]
    fn empty_content() {
        let (meta, body) = split_metadata(b"");
        assert_eq!(meta, None);
        assert!(body.is_empty());
    }

    #[test]
    fn boundary_at_end_leaves_empty_body() {
        let (meta, body) = split_metadata(b"{}\n\n");
        assert_eq!(meta, Some(&b"{}"[..]));
        assert!(body.is_empty());
    }

    #[test]
    fn leading_blank_line_gives_empty_block() {
        let (meta, body) = split_metadata(b"\n\nbody");
        assert_eq!(meta, Some(&b""[..]));
        assert_eq!(body, b"body");
    }

    #[test]
    fn parse_decodes_metadata() {
        let doc: Document<Meta> =
            Document::parse("foo.txt", b"{\"Title\":\"foo\"}\n\nHello from foo.\n", MetadataFormat::Json)
                .unwrap();
        assert_eq!(doc.name, "foo.txt");
        assert_eq!(doc.metadata, Some(Meta { title: "foo".into() }));
        assert_eq!(&*doc.body, b"Hello from foo.\n");
    }

    #[test]
    fn parse_without_metadata() {
        let doc: Document<Meta> =
            Document::parse("plain.txt", b"no header here\n", MetadataFormat::Json).unwrap();
        assert_eq!(doc.metadata, None);
        assert_eq!(&*doc.body, b"no header here\n");
    }

    #[test]
    fn parse_yaml_metadata() {
        let doc: Document<Meta> =
            Document::parse("a.md", b"Title: yaml doc\n\n# Heading\n", MetadataFormat::Yaml).unwrap();
        assert_eq!(doc.metadata.unwrap().title, "yaml doc");
        assert_eq!(&*doc.body, b"# Heading\n");
    }

    #[test]
    fn parse_rejects_malformed_metadata() {
        let result: Result<Document<Meta>, _> =
            Document::parse("bad.txt", b"{not json\n\nbody", MetadataFormat::Json);
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn content_without_boundary_is_all_body(raw in "[a-z{}:\" ]{0,20}(\n[a-z{}:\" ]{1,20}){0,4}") {
            let (meta, body) = split_metadata(raw.as_bytes());
            prop_assert!(meta.is_none());
            prop_assert_eq!(body, raw.as_bytes());
        }

        #[test]
        fn block_and_body_are_recovered(
            block in "[a-z{}:\" ]{0,20}(\n[a-z{}:\" ]{1,20}){0,4}",
            body in "[a-z\n ]{0,60}",
        ) {
            let raw = format!("{}\n\n{}", block, body);
            let (got_block, got_body) = split_metadata(raw.as_bytes());
            prop_assert_eq!(got_block, Some(block.as_bytes()));
            prop_assert_eq!(got_body, body.as_bytes());
        }
    }
}
