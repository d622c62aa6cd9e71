use thiserror::Error;

/// Call-time arguments rejected before any field arithmetic takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("secret must be up to 255 bytes, got {len}")]
    SecretTooLong { len: usize },
    #[error("needed must be at least 2, got {needed}")]
    ThresholdTooSmall { needed: u32 },
    #[error("needed ({needed}) cannot be greater than total ({total})")]
    ThresholdExceedsTotal { needed: u32, total: u32 },
    #[error("shares cannot be empty")]
    NoShares,
    #[error("share index 0 is reserved for the secret")]
    ReservedIndex,
    #[error("a share must be exactly 256 bytes long, got {len}")]
    InvalidShareLength { len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    /// The interpolated value does not carry the secret marker. The share set
    /// was too small, mixed from different splits, or corrupted.
    #[error("failed to recover secret: invalid shares")]
    RecoveryFailure,
}
