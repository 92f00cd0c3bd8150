use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;

/// Serializes `value` as pretty JSON to a file, or to stdout when no path
/// is given.
pub fn save_json<T>(value: &T, output: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    serde_json::to_writer_pretty(&mut writer, value).context("failed to serialize report")?;
    writeln!(writer).context("failed to finish report")?;
    writer.flush().context("failed to flush report")?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(())
}
