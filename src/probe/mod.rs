//! Media file inspection: metadata extraction from engine diagnostics

pub mod extractor;

pub use extractor::{describe_stream, media_type_of, media_type_token, MetadataExtractor};
