pub mod plan;
pub mod recipes;
pub mod shopping;

use std::{fs, io::Write, path::Path};

/// Writes `data` to `path`, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, data: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, data)?;
            tracing::info!(path = %path.display(), bytes = data.len(), "written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
