//! Splitting data URIs into their parts and composing them again.
//!
//! ```text
//! data:[<mediatype>][;<key>=<value>]*[;base64],<payload>
//! ```

use alloc::format;
use alloc::string::String;

use log::trace;

use crate::{Alphabet, DataUri, Error, Mediatype};

/// The scheme prefix in front of the opaque part.
pub const PREFIX: &str = "data:";

const BASE64_FLAG: &str = ";base64";
const PAYLOAD_SEPARATOR: char = ',';

/// Parses a full data URI.
///
/// The payload is not decoded yet, see [`DataUri::decode`].
///
/// ```
/// use data_uri::parse;
/// let uri = parse("data:text/plain;charset=utf-8,Hello%20World").unwrap();
/// assert_eq!(uri.mediatype().mime_type(), "text/plain");
/// assert_eq!(uri.mediatype().parameter("charset"), Some("utf-8"));
/// assert!(!uri.is_base64());
/// assert_eq!(uri.data(), b"Hello%20World");
/// ```
///
/// # Errors
///
/// If the input doesn't start with `data:` or has no `,` before the
/// payload, an error will be returned.
pub fn parse(uri: &str) -> Result<DataUri, Error> {
    let opaque = uri.strip_prefix(PREFIX).ok_or(Error::MissingScheme)?;
    parse_opaque(opaque)
}

/// Parses the opaque part of a data URI, everything after `data:`.
///
/// # Errors
///
/// If there is no `,` separating the payload, an error will be returned.
pub fn parse_opaque(opaque: &str) -> Result<DataUri, Error> {
    let (prefix, data) = opaque
        .split_once(PAYLOAD_SEPARATOR)
        .ok_or(Error::MissingSeparator)?;
    let (prefix, base64) = match prefix.strip_suffix(BASE64_FLAG) {
        Some(stripped) => (stripped, true),
        None => (prefix, false),
    };
    trace!(
        "parsed data URI with {} byte prefix, {} byte payload, base64: {base64}",
        prefix.len(),
        data.len()
    );
    Ok(DataUri::new(Mediatype::parse(prefix), base64, data))
}

/// Parses an already parsed [`url::Url`] with the `data` scheme.
///
/// Query and fragment belong to the payload, so the result is the same as
/// parsing `url.as_str()`.
///
/// # Errors
///
/// If the scheme isn't `data` or there is no `,` separating the payload,
/// an error will be returned.
#[cfg(feature = "url")]
pub fn parse_url(url: &url::Url) -> Result<DataUri, Error> {
    if url.scheme() != crate::SCHEME {
        return Err(Error::MissingScheme);
    }
    parse_opaque(&url.as_str()[url.scheme().len() + 1..])
}

impl core::str::FromStr for DataUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Composes the opaque part of a data URI, everything after `data:`.
///
/// Base64 payloads use [`Alphabet::UrlSafe`], while [`DataUri::decode`]
/// is usually called with [`Alphabet::Standard`]. Pass the matching
/// alphabet when decoding, or use a [`Builder`] to pick one. Plain
/// payloads are embedded as they are, without percent-encoding.
/// The content type is not validated.
///
/// ```
/// use data_uri::{encode, parse_opaque, Alphabet};
/// let opaque = encode("image/png", &[0xfb, 0xff], true).unwrap();
/// assert_eq!(opaque, "image/png;base64,-_8=");
/// let mut uri = parse_opaque(&opaque).unwrap();
/// assert_eq!(uri.decode(Alphabet::UrlSafe).unwrap(), b"\xfb\xff");
/// ```
///
/// # Errors
///
/// A plain payload that is not valid UTF-8 is rejected.
pub fn encode(content_type: &str, data: &[u8], base64: bool) -> Result<String, Error> {
    compose(content_type, data, base64.then_some(Alphabet::UrlSafe))
}

/// Like [`encode`], reading the payload from `reader` to completion first.
///
/// # Errors
///
/// Failing reads are returned as [`Error::Read`], plus anything [`encode`]
/// returns.
#[cfg(feature = "std")]
pub fn encode_reader<R: std::io::Read>(
    content_type: &str,
    mut reader: R,
    base64: bool,
) -> Result<String, Error> {
    let mut data = alloc::vec::Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| Error::Read(e.kind()))?;
    encode(content_type, &data, base64)
}

fn compose(content_type: &str, data: &[u8], alphabet: Option<Alphabet>) -> Result<String, Error> {
    Ok(match alphabet {
        Some(alphabet) => format!(
            "{content_type}{BASE64_FLAG}{PAYLOAD_SEPARATOR}{}",
            alphabet.encode(data)
        ),
        None => format!(
            "{content_type}{PAYLOAD_SEPARATOR}{}",
            core::str::from_utf8(data).map_err(|_| Error::NonUtf8Payload)?
        ),
    })
}

/// Builds complete `data:` URIs.
///
/// ```
/// use data_uri::Builder;
/// let uri = Builder::new()
///     .content_type("text/plain;charset=utf-8")
///     .data(b"Hello World")
///     .build()
///     .unwrap();
/// assert_eq!(uri, "data:text/plain;charset=utf-8;base64,SGVsbG8gV29ybGQ=");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Builder<'a> {
    content_type: &'a str,
    data: Option<&'a [u8]>,
    base64: bool,
    alphabet: Alphabet,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Builder<'a> {
    /// Base64 with [`Alphabet::UrlSafe`] and no content type, which reads
    /// back as `text/plain`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content_type: "",
            data: None,
            base64: true,
            alphabet: Alphabet::UrlSafe,
        }
    }

    #[must_use]
    pub fn content_type(mut self, content_type: &'a str) -> Self {
        self.content_type = content_type;
        self
    }

    #[must_use]
    pub fn data(mut self, data: &'a [u8]) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn base64(mut self, base64: bool) -> Self {
        self.base64 = base64;
        self
    }

    #[must_use]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// # Errors
    ///
    /// [`Error::MissingData`] if no payload was given, plus anything
    /// [`encode`] returns.
    pub fn build(&self) -> Result<String, Error> {
        let data = self.data.ok_or(Error::MissingData)?;
        let opaque = compose(self.content_type, data, self.base64.then_some(self.alphabet))?;
        Ok(format!("{PREFIX}{opaque}"))
    }
}
