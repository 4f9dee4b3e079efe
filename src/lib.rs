//! `data_uri` is a crate to parse and build RFC 2397 `data:` URIs, which
//! embed a small payload together with its media type directly in a URI.
//!
//! # Parse a data URI
//! ```
//! use data_uri::{parse, Alphabet};
//! let mut uri = parse("data:text/plain;charset=utf-8;base64,SGVsbG8gV29ybGQ=").unwrap();
//! assert_eq!(uri.mediatype().mime_type(), "text/plain");
//! assert_eq!(uri.mediatype().parameter("charset"), Some("utf-8"));
//! assert!(uri.is_base64());
//! assert_eq!(uri.decode(Alphabet::Standard).unwrap(), b"Hello World");
//! ```
//!
//! Parsing only splits the URI into its parts. The payload is decoded by an
//! explicit call to [`DataUri::decode`], once the media type has been looked at.
//! Plain payloads are handed out verbatim, percent escapes included.
//!
//! # Build a data URI
//!
//! The encoder writes base64 payloads in the URL-safe alphabet, so decode
//! them with [`Alphabet::UrlSafe`].
//! ```
//! use data_uri::{encode, parse_opaque, Alphabet};
//! let opaque = encode("image/png", b"\x89PNG", true).unwrap();
//! assert_eq!(opaque, "image/png;base64,iVBORw==");
//! let mut uri = parse_opaque(&opaque).unwrap();
//! assert_eq!(uri.decode(Alphabet::UrlSafe).unwrap(), b"\x89PNG");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod data_uri;
pub mod error;
pub mod mediatype;

#[cfg(feature = "std")]
pub use self::codec::encode_reader;
#[cfg(feature = "url")]
pub use self::codec::parse_url;
pub use self::codec::{encode, parse, parse_opaque, Builder};
pub use self::data_uri::{Alphabet, DataUri};
pub use self::error::Error;
pub use self::mediatype::Mediatype;

/// The URI scheme handled by this crate.
pub const SCHEME: &str = "data";

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
