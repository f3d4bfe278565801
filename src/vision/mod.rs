//! Image payload handling for the query node.
//!
//! Images arrive from the host as raw bytes and leave as a base64 data URI
//! embedded in the chat request. Format and size are not inspected; the bytes
//! are declared as PNG whatever they contain.
//!
//! # Submodules
//!
//! - `models`: the `ImageBuffer` input type.
//! - `encoding`: data URI construction and parsing.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod encoding;
pub mod models;

pub use encoding::{decode_data_uri, encode_data_uri, DATA_URI_PREFIX};
pub use models::ImageBuffer;
