//! Output decoding for external commands.
//!
//! netsh output is not guaranteed to be UTF-8: on localized Windows
//! installs it arrives in the active legacy code page (GBK on zh-CN
//! systems, for example). Decoding tries strict UTF-8 first and falls
//! back to a configurable legacy encoding with undecodable bytes
//! replaced, so diagnostic text stays legible instead of failing the
//! whole invocation.

use std::fmt;

use encoding::label::encoding_from_whatwg_label;
use encoding::{DecoderTrap, EncodingRef};

/// Two-tier decode strategy for raw command output.
///
/// The primary encoding is always strict UTF-8. The fallback is
/// configurable because the relevant legacy code page depends on the
/// host's locale; it defaults to GBK.
///
/// # Example
///
/// ```
/// use dns_switch::command::DecodePolicy;
///
/// let policy = DecodePolicy::from_label("gbk").unwrap();
/// assert_eq!(policy.decode(b"plain ascii"), "plain ascii");
/// ```
#[derive(Clone, Copy)]
pub struct DecodePolicy {
    fallback: EncodingRef,
}

impl DecodePolicy {
    /// Creates a policy with the given fallback encoding.
    #[must_use]
    pub const fn new(fallback: EncodingRef) -> Self {
        Self { fallback }
    }

    /// Creates a policy from a WHATWG encoding label (e.g. `"gbk"`,
    /// `"shift_jis"`). Returns `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        encoding_from_whatwg_label(label).map(Self::new)
    }

    /// Canonical name of the fallback encoding.
    #[must_use]
    pub fn fallback_name(&self) -> &'static str {
        self.fallback.name()
    }

    /// Decodes raw output bytes.
    ///
    /// Valid UTF-8 passes through untouched. Anything else is decoded
    /// with the fallback encoding, substituting a replacement marker for
    /// bytes that not even the fallback can represent. This never fails.
    #[must_use]
    pub fn decode(&self, bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_owned(),
            Err(_) => self
                .fallback
                .decode(bytes, DecoderTrap::Replace)
                .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

impl Default for DecodePolicy {
    fn default() -> Self {
        Self::new(encoding::all::GBK)
    }
}

impl fmt::Debug for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodePolicy")
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_passes_through() {
        let policy = DecodePolicy::default();
        assert_eq!(policy.decode("hello 世界".as_bytes()), "hello 世界");
    }

    #[test]
    fn invalid_utf8_decodes_with_fallback() {
        // "中文" in GBK
        let bytes = [0xD6, 0xD0, 0xCE, 0xC4];
        let policy = DecodePolicy::default();
        assert_eq!(policy.decode(&bytes), "中文");
    }

    #[test]
    fn undecodable_bytes_are_replaced_not_fatal() {
        // 0xFF is not a valid GBK lead byte
        let bytes = [0xFF, 0xFF];
        let policy = DecodePolicy::default();
        let decoded = policy.decode(&bytes);
        assert!(decoded.contains('\u{FFFD}'), "got {decoded:?}");
    }

    #[test]
    fn empty_input_decodes_to_empty_string() {
        assert_eq!(DecodePolicy::default().decode(b""), "");
    }

    #[test]
    fn from_label_resolves_known_encodings() {
        assert!(DecodePolicy::from_label("gbk").is_some());
        assert!(DecodePolicy::from_label("shift_jis").is_some());
    }

    #[test]
    fn from_label_rejects_unknown_labels() {
        assert!(DecodePolicy::from_label("no-such-encoding").is_none());
    }

    #[test]
    fn default_fallback_is_gbk() {
        assert_eq!(DecodePolicy::default().fallback_name(), "gbk");
    }

    #[test]
    fn configured_fallback_changes_interpretation() {
        // 0xA9 is the copyright sign in windows-1252 but an invalid
        // standalone lead byte in GBK.
        let bytes = [b'x', 0xA9];
        let latin = DecodePolicy::from_label("windows-1252").unwrap();
        assert_eq!(latin.decode(&bytes), "x\u{A9}");
    }
}
