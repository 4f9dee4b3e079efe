use alloc::string::String;
use alloc::vec::Vec;

use base64::engine::general_purpose::{GeneralPurpose, STANDARD, URL_SAFE};
use base64::Engine;
use log::debug;

use crate::{Error, Mediatype};

/// The two base64 alphabets a payload can be written in. Both are padded.
///
/// Data URIs don't record which one was used, so the caller has to pick it
/// when decoding. [`Alphabet::Standard`] is the default for decoding while
/// [`encode`](crate::encode) produces [`Alphabet::UrlSafe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// `+` and `/`, as RFC 2397 expects
    #[default]
    Standard,
    /// `-` and `_`
    UrlSafe,
}

impl Alphabet {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &STANDARD,
            Self::UrlSafe => &URL_SAFE,
        }
    }

    /// # Errors
    ///
    /// Invalid characters for this alphabet or incorrect padding.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, Error> {
        Ok(self.engine().decode(text)?)
    }

    #[must_use]
    pub fn encode(self, data: &[u8]) -> String {
        self.engine().encode(data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Encoded(String),
    Decoded(Vec<u8>),
}

/// A parsed data URI.
///
/// The payload stays in its textual form until [`DataUri::decode`] is
/// called, so the media type can be inspected first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mediatype: Mediatype,
    base64: bool,
    payload: Payload,
}

impl DataUri {
    #[must_use]
    pub fn new(mediatype: Mediatype, base64: bool, data: impl Into<String>) -> Self {
        Self {
            mediatype,
            base64,
            payload: Payload::Encoded(data.into()),
        }
    }

    #[must_use]
    pub fn mediatype(&self) -> &Mediatype {
        &self.mediatype
    }

    /// Whether the prefix ended with `;base64`.
    #[must_use]
    pub fn is_base64(&self) -> bool {
        self.base64
    }

    #[must_use]
    pub fn is_decoded(&self) -> bool {
        matches!(self.payload, Payload::Decoded(_))
    }

    /// The payload text before decoding, the payload bytes after.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        match &self.payload {
            Payload::Encoded(text) => text.as_bytes(),
            Payload::Decoded(bytes) => bytes,
        }
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        match self.payload {
            Payload::Encoded(text) => text.into_bytes(),
            Payload::Decoded(bytes) => bytes,
        }
    }

    /// Decodes the payload in place and returns it.
    ///
    /// Base64 payloads are decoded with `alphabet`; plain payloads are kept
    /// as they are, percent escapes included. Only the first successful call
    /// transforms anything, later calls return the decoded bytes unchanged.
    ///
    /// ```
    /// use data_uri::{parse, Alphabet};
    /// let mut uri = parse("data:;base64,SGVsbG8gV29ybGQ=").unwrap();
    /// assert_eq!(uri.decode(Alphabet::Standard).unwrap(), b"Hello World");
    /// assert_eq!(uri.decode(Alphabet::Standard).unwrap(), b"Hello World");
    /// ```
    ///
    /// # Errors
    ///
    /// If the base64 payload is invalid for `alphabet` an error is returned
    /// and the payload is left encoded.
    pub fn decode(&mut self, alphabet: Alphabet) -> Result<&[u8], Error> {
        if let Payload::Encoded(text) = &mut self.payload {
            let bytes = if self.base64 {
                alphabet.decode(text)?
            } else {
                core::mem::take(text).into_bytes()
            };
            debug!("decoded {} byte {} payload", bytes.len(), self.mediatype.mime_type());
            self.payload = Payload::Decoded(bytes);
        } else {
            debug!("payload already decoded, skipping");
        }
        Ok(self.data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Mediatype {
        Mediatype::new("text/plain")
    }

    #[test]
    fn test_decode_standard() {
        let mut uri = DataUri::new(plain(), true, "SGVsbG8gV29ybGQ=");
        assert!(!uri.is_decoded());
        assert_eq!(uri.decode(Alphabet::Standard).unwrap(), b"Hello World");
        assert!(uri.is_decoded());
    }

    #[test]
    fn test_decode_urlsafe() {
        let mut uri = DataUri::new(plain(), true, "SGVsbG8rV29ybGQhL21vcmU_dGV4dA==");
        assert_eq!(
            uri.decode(Alphabet::UrlSafe).unwrap(),
            b"Hello+World!/more?text"
        );
    }

    #[test]
    fn test_decode_emoji() {
        let mut uri = DataUri::new(plain(), true, "SGVsbG8gV29ybGQg8J-Ri_Cfp5HigI3wn5K7");
        let decoded = uri.decode(Alphabet::UrlSafe).unwrap();
        assert_eq!(
            hex::encode(decoded),
            "48656c6c6f20576f726c6420f09f918bf09fa791e2808df09f92bb"
        );
        assert_eq!(
            core::str::from_utf8(uri.data()).unwrap(),
            "Hello World \u{1f44b}\u{1f9d1}\u{200d}\u{1f4bb}"
        );
    }

    #[test]
    fn test_decode_plain_keeps_escapes() {
        let mut uri = DataUri::new(plain(), false, "%be%fg%be");
        assert_eq!(uri.decode(Alphabet::UrlSafe).unwrap(), b"%be%fg%be");
        assert!(uri.is_decoded());
    }

    #[test]
    fn test_decode_is_idempotent() {
        let mut uri = DataUri::new(plain(), true, "JWJlJWZnJWJl");
        let first = uri.decode(Alphabet::Standard).unwrap().to_vec();
        assert_eq!(first, b"%be%fg%be");
        let once = uri.clone();
        // the alphabet doesn't matter anymore, nothing is decoded twice
        let second = uri.decode(Alphabet::UrlSafe).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(uri, once);
    }

    #[test]
    fn test_decode_failure_leaves_payload() {
        let mut uri = DataUri::new(plain(), true, "SGVsbG8rV29ybGQhL21vcmU_dGV4dA==");
        let untouched = uri.clone();
        assert!(matches!(
            uri.decode(Alphabet::Standard).unwrap_err(),
            Error::InvalidBase64(_)
        ));
        assert_eq!(uri, untouched);
        assert!(!uri.is_decoded());

        let mut uri = DataUri::new(plain(), true, "SGVsbG8");
        assert!(matches!(
            uri.decode(Alphabet::Standard).unwrap_err(),
            Error::InvalidBase64(_)
        ));
        assert_eq!(uri.data(), b"SGVsbG8");

        // a failed attempt doesn't prevent retrying with the right alphabet
        let mut uri = untouched;
        assert!(uri.decode(Alphabet::Standard).is_err());
        assert_eq!(
            uri.decode(Alphabet::UrlSafe).unwrap(),
            b"Hello+World!/more?text"
        );
    }

    #[test]
    fn test_into_data() {
        let uri = DataUri::new(plain(), true, "SGk=");
        assert_eq!(uri.clone().into_data(), b"SGk=");
        let mut uri = uri;
        uri.decode(Alphabet::default()).unwrap();
        assert_eq!(uri.into_data(), b"Hi");
    }

    #[test]
    fn test_alphabets() {
        let data = [0xfb, 0xff, 0xfe, 0x00, 0x10];
        assert_eq!(Alphabet::Standard.encode(&data), "+//+ABA=");
        assert_eq!(Alphabet::UrlSafe.encode(&data), "-__-ABA=");
        assert_eq!(Alphabet::UrlSafe.decode("-__-ABA=").unwrap(), data);
        assert!(Alphabet::UrlSafe.decode("+//+ABA=").is_err());
        assert_eq!(Alphabet::default(), Alphabet::Standard);
    }
}
