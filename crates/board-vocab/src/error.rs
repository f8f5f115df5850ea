//! Error types for the board-vocab crate.

use thiserror::Error;

/// Errors that can occur while building a vocabulary table.
///
/// Matching itself is total and never fails; these errors exist only on the
/// configuration edge, when a table is constructed or deserialized.
#[derive(Debug, Error)]
pub enum VocabError {
    /// A vocabulary entry has an empty canonical code.
    #[error("vocabulary entry has an empty canonical code")]
    EmptyCode,

    /// A canonical code was declared with no aliases.
    #[error("code '{code}' has no aliases")]
    NoAliases {
        /// The code with an empty alias list.
        code: String,
    },

    /// An alias normalizes to the empty string. The empty string is a
    /// substring of every tag, so such an alias would match every alert.
    #[error("alias '{alias}' for code '{code}' normalizes to the empty string")]
    EmptyAlias {
        /// The code the alias belongs to.
        code: String,
        /// The offending alias.
        alias: String,
    },

    /// The same canonical code was declared more than once.
    #[error("duplicate canonical code: {code}")]
    DuplicateCode {
        /// The repeated code.
        code: String,
    },
}

/// Result type for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_empty_code() {
        let err = VocabError::EmptyCode;
        assert_eq!(err.to_string(), "vocabulary entry has an empty canonical code");
    }

    #[test]
    fn error_display_no_aliases() {
        let err = VocabError::NoAliases {
            code: "SAZKA".to_string(),
        };
        assert_eq!(err.to_string(), "code 'SAZKA' has no aliases");
    }

    #[test]
    fn error_display_empty_alias() {
        let err = VocabError::EmptyAlias {
            code: "VAL".to_string(),
            alias: "!!".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "alias '!!' for code 'VAL' normalizes to the empty string"
        );
    }

    #[test]
    fn error_display_duplicate_code() {
        let err = VocabError::DuplicateCode {
            code: "WV".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate canonical code: WV");
    }
}
