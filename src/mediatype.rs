//! The media type carried in the prefix of a data URI.
//!
//! The prefix is a MIME type followed by zero or more `;`-separated
//! `key=value` parameters, each of them form-encoded:
//!
//! ```
//! use data_uri::Mediatype;
//! let mediatype = Mediatype::parse("text/plain;charset=utf-8;name=my+notes");
//! assert_eq!(mediatype.mime_type(), "text/plain");
//! assert_eq!(mediatype.parameter("charset"), Some("utf-8"));
//! assert_eq!(mediatype.parameter("name"), Some("my notes"));
//! ```
//!
//! An empty prefix yields [`Mediatype::DEFAULT`], `text/plain` without parameters.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

/// The MIME type assumed when a data URI omits it.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

const PARAMETER_SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mediatype {
    mime_type: Cow<'static, str>,
    parameters: Vec<(String, String)>,
}

impl Default for Mediatype {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Mediatype {
    /// `text/plain` without parameters.
    pub const DEFAULT: Self = Self {
        mime_type: Cow::Borrowed(DEFAULT_MIME_TYPE),
        parameters: Vec::new(),
    };

    /// Creates a media type without parameters. An empty `mime_type` is
    /// replaced by [`DEFAULT_MIME_TYPE`].
    #[must_use]
    pub fn new(mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        if mime_type.is_empty() {
            return Self::DEFAULT;
        }
        Self {
            mime_type: Cow::Owned(mime_type),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter. A key that is already present keeps its position
    /// and takes the new value.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Parses the prefix of the opaque part, without the `;base64` flag.
    ///
    /// Parameter segments are decoded like URL query pairs, so `%XX`
    /// escapes and `+` are undone. A segment without `=` becomes a key with
    /// an empty value and empty segments are ignored. A prefix that only
    /// holds parameters (`;charset=utf-8`) applies them to `text/plain`.
    ///
    /// ```
    /// use data_uri::Mediatype;
    /// assert_eq!(Mediatype::parse(""), Mediatype::DEFAULT);
    /// assert_eq!(
    ///     Mediatype::parse(";charset=utf-8"),
    ///     Mediatype::new("text/plain").with_parameter("charset", "utf-8")
    /// );
    /// ```
    #[must_use]
    pub fn parse(prefix: &str) -> Self {
        if prefix.is_empty() {
            return Self::DEFAULT;
        }

        let mut segments = prefix.split(PARAMETER_SEPARATOR);
        let mut mediatype = Self::new(segments.next().unwrap_or_default());
        for segment in segments.filter(|s| !s.is_empty()) {
            if let Some((key, value)) = form_urlencoded::parse(segment.as_bytes()).next() {
                mediatype.insert(key.into_owned(), value.into_owned());
            }
        }
        mediatype
    }

    fn insert(&mut self, key: String, value: String) {
        match self.parameters.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.parameters.push((key, value)),
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl core::fmt::Display for Mediatype {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.mime_type)?;
        for (key, value) in &self.parameters {
            f.write_char(PARAMETER_SEPARATOR)?;
            for chunk in form_urlencoded::byte_serialize(key.as_bytes()) {
                f.write_str(chunk)?;
            }
            f.write_str("=")?;
            for chunk in form_urlencoded::byte_serialize(value.as_bytes()) {
                f.write_str(chunk)?;
            }
        }
        Ok(())
    }
}
