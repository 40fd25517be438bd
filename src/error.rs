use std::path::PathBuf;

/// Classification of compress failures.
///
/// Fatal failures are returned as [anyhow::Error] with a [CompressError] attached as context, use
/// `error.downcast_ref::<CompressError>()` to classify them. [CompressError::Cleanup] is never
/// returned, it is only reported to the [Observer](crate::observer::Observer).
#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error("failed to read source file: {}", path.display())]
    SourceRead { path: PathBuf },
    #[error("failed to write chunk file: {}", path.display())]
    TempWrite { path: PathBuf },
    #[error("failed to read chunk file: {}", path.display())]
    TempRead { path: PathBuf },
    #[error("failed to write destination file: {}", path.display())]
    DestinationWrite { path: PathBuf },
    #[error("failed to remove chunk file: {}", path.display())]
    Cleanup { path: PathBuf },
}

impl CompressError {
    /// Only cleanup failures leave the destination valid
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CompressError::Cleanup { .. })
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            CompressError::SourceRead { path } => path,
            CompressError::TempWrite { path } => path,
            CompressError::TempRead { path } => path,
            CompressError::DestinationWrite { path } => path,
            CompressError::Cleanup { path } => path,
        }
    }
}
