//! Error types for key generation and signing.

use core::fmt;

/// Ring signature errors. Verification never errors; it returns `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureError {
    /// The randomness source errored or returned short.
    Entropy,
    /// The ring holds no keys.
    EmptyRing,
    /// The signer's public key is not a ring member.
    SignerNotInRing,
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Entropy => "The randomness source failed.",
                Self::EmptyRing => "The ring holds no keys.",
                Self::SignerNotInRing => "The signer's key is not in the ring.",
            }
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SignatureError {}
