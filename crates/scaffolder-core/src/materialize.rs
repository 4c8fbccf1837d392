//! Writing a resolved matrix to disk

use crate::config::ScaffoldConfig;
use crate::error::MaterializeError;
use crate::matrix::ProjectMatrix;
use std::future::Future;
use std::path::Path;
use tokio::fs;

/// Writes a `ProjectMatrix` under an output directory.
///
/// Implementations must create files in matrix order and return the relative
/// paths they wrote.
pub trait Materializer: Send + Sync + 'static {
    fn materialize(
        &self,
        matrix: &ProjectMatrix,
        output: &Path,
    ) -> impl Future<Output = Result<Vec<String>, MaterializeError>> + Send;
}

/// File-system materializer
#[derive(Debug, Clone, Default)]
pub struct FsMaterializer {
    overwrite: bool,
}

impl FsMaterializer {
    pub fn new(overwrite: bool) -> Self {
        Self { overwrite }
    }

    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::new(config.overwrite)
    }

    /// Fail before writing anything if the target is unusable or a file would be clobbered
    async fn preflight(&self, matrix: &ProjectMatrix, output: &Path) -> Result<(), MaterializeError> {
        ensure_dir_or_missing(output).await?;

        for file in matrix {
            // Every directory between the output and the file must be creatable
            for ancestor in Path::new(file.path()).ancestors().skip(1) {
                if ancestor.as_os_str().is_empty() {
                    break;
                }
                ensure_dir_or_missing(&output.join(ancestor)).await?;
            }

            let target = output.join(file.path());
            if let Ok(meta) = fs::metadata(&target).await {
                if meta.is_dir() || !self.overwrite {
                    return Err(MaterializeError::Conflict(target));
                }
            }
        }

        Ok(())
    }
}

async fn ensure_dir_or_missing(path: &Path) -> Result<(), MaterializeError> {
    match fs::metadata(path).await {
        Ok(meta) if !meta.is_dir() => Err(MaterializeError::NotADirectory(path.to_path_buf())),
        _ => Ok(()),
    }
}

impl Materializer for FsMaterializer {
    async fn materialize(
        &self,
        matrix: &ProjectMatrix,
        output: &Path,
    ) -> Result<Vec<String>, MaterializeError> {
        self.preflight(matrix, output).await?;

        fs::create_dir_all(output)
            .await
            .map_err(|e| MaterializeError::io(output, e))?;

        let mut written = Vec::with_capacity(matrix.len());

        for file in matrix {
            let target = output.join(file.path());
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| MaterializeError::io(parent, e))?;
            }

            fs::write(&target, file.content())
                .await
                .map_err(|e| MaterializeError::io(&target, e))?;

            written.push(file.path().to_string());
        }

        Ok(written)
    }
}
