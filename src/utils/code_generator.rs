//! Short code generation.
//!
//! Codes are drawn character by character from a fixed 62-symbol alphanumeric
//! alphabet using the thread-local CSPRNG from `rand` (ChaCha, seeded from the
//! operating system). Uniqueness is not guaranteed here; the store rejects
//! duplicates and the caller retries.

use rand::Rng;

/// Symbols a generated code may contain: `0-9`, `a-z`, `A-Z`.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length used when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest accepted code length.
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest accepted code length.
pub const MAX_CODE_LENGTH: usize = 32;

/// Rejected code length.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("code length must be between 4 and 32, got {0}")]
pub struct InvalidCodeLength(pub usize);

/// Random fixed-length code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator for codes of `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCodeLength`] if `length` is outside
    /// `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
    pub fn new(length: usize) -> Result<Self, InvalidCodeLength> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
            return Err(InvalidCodeLength(length));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct codes this generator can produce (62^length),
    /// saturating at `u128::MAX`.
    pub fn space_size(&self) -> u128 {
        (ALPHABET.len() as u128).saturating_pow(self.length as u32)
    }

    /// Generates a candidate code.
    ///
    /// Each character is picked independently and uniformly from [`ALPHABET`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let code = CodeGenerator::default().generate();
    /// assert_eq!(code.len(), 6);
    /// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns `true` if `code` has an accepted length and only uses [`ALPHABET`].
///
/// Used for diagnostics; lookups accept any string.
pub fn is_valid_code(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.bytes().all(|b| ALPHABET.contains(&b))
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}
