/// The errors that can be returned when parsing, decoding or building a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not start with the `data:` scheme.
    MissingScheme,
    /// The opaque part has no `,` separating the media type from the payload.
    MissingSeparator,
    /// The payload is flagged as base64 but is not valid in the requested [`Alphabet`](crate::Alphabet).
    InvalidBase64(base64::DecodeError),
    /// A [`Builder`](crate::Builder) was asked to build without any payload.
    MissingData,
    /// A plain (non-base64) payload must be valid UTF-8 to be embedded verbatim.
    NonUtf8Payload,
    /// The byte source failed while being read to completion.
    #[cfg(feature = "std")]
    Read(std::io::ErrorKind),
}

impl Error {
    /// Whether the input was rejected before any payload handling,
    /// i.e. it is not shaped like a data URI at all.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MissingScheme | Self::MissingSeparator)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingScheme => write!(f, "invalid data URI: missing \"data:\" scheme"),
            Self::MissingSeparator => write!(f, "invalid data URI: missing \",\" payload separator"),
            Self::InvalidBase64(e) => write!(f, "invalid base64 payload: {e}"),
            Self::MissingData => write!(f, "expected a payload to build the data URI from"),
            Self::NonUtf8Payload => write!(f, "plain payload is not valid UTF-8"),
            #[cfg(feature = "std")]
            Self::Read(kind) => write!(f, "failed to read payload: {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBase64(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Self::InvalidBase64(e)
    }
}
