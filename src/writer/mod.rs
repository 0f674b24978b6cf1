//! Output sink for assembled seed scripts.

use crate::generator::SeedScript;
use anyhow::Context;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Where the assembled script goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Overwrite this file
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` selects stdout, anything else is a file path
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Writes a whole script in a single write, replacing any previous output
pub struct ScriptWriter {
    target: OutputTarget,
}

impl ScriptWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Returns the number of bytes written
    pub async fn write(&self, script: &SeedScript) -> anyhow::Result<usize> {
        let contents = script.assemble();

        match &self.target {
            OutputTarget::File(path) => {
                tokio::fs::write(path, contents.as_bytes())
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            OutputTarget::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(contents.as_bytes())
                    .await
                    .context("Failed to write to stdout")?;
                stdout.flush().await.context("Failed to flush stdout")?;
            }
        }

        Ok(contents.len())
    }
}
