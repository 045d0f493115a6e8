use thiserror::Error;

/// Reasons a message expansion request cannot be served.
///
/// These depend only on the public inputs (DST, requested length and hash
/// function), so retrying with the same inputs fails the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExpandMsgError {
    #[error("domain separation tag must not be empty")]
    EmptyDst,

    #[error("requested output length must be non-zero")]
    ZeroLength,

    #[error("requested output length {0} exceeds 65535 bytes")]
    LengthTooLarge(usize),

    /// `expand_message_xmd` can produce at most 255 digest outputs.
    #[error("expand_message_xmd would need {0} hash blocks, at most 255 are allowed")]
    TooManyBlocks(usize),
}
