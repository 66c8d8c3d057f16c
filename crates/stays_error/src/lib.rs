//! Error types for the stays demo server.
//!
//! Two failure domains cover the whole system: the dataset file
//! ([`DataError`]) and the prebuilt widget assets ([`AssetError`]). Both are
//! fatal for the request that hit them and are never retried.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod data;

pub use asset::{AssetError, AssetErrorKind};
pub use data::{DataError, DataErrorKind};

/// Umbrella error type for the stays workspace.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StaysError {
    /// Dataset could not be read or parsed
    #[display("{}", _0)]
    Data(DataError),
    /// Built widget asset missing or unreadable
    #[display("{}", _0)]
    Asset(AssetError),
}

/// Result alias for operations that can fail with a [`StaysError`].
pub type StaysResult<T> = Result<T, StaysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umbrella_from_data_error() {
        let err: StaysError =
            DataError::new(DataErrorKind::FileRead("data/stays.json".to_string())).into();
        assert!(format!("{}", err).contains("data/stays.json"));
    }

    #[test]
    fn test_umbrella_from_asset_error() {
        let err: StaysError = AssetError::new(AssetErrorKind::NotFound {
            suffix: ".js".to_string(),
            dir: "web/dist/assets".to_string(),
        })
        .into();
        assert!(format!("{}", err).contains(".js"));
    }
}
