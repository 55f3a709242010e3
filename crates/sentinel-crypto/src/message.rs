/// Message input for signing and verification.
///
/// Callers hand over either text or raw bytes; text is UTF-8 encoded exactly
/// once at this boundary, so the same string and its byte encoding always
/// sign identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Message<'a> {
    /// The message as raw bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Message::Text(s) => s.as_bytes(),
            Message::Bytes(b) => b,
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(s: &'a str) -> Self {
        Message::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(b: &'a [u8]) -> Self {
        Message::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Message::Bytes(b)
    }
}
