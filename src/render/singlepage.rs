use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

use super::talk::{write_sections, write_speaker};
use crate::{config::RenderConfig, error::TalkError, table::Row};

/// Write every talk into one markdown file, ordered by session then
/// timeslot.
pub fn render_singlepage(rows: &[Row], cfg: &RenderConfig, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating file {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_singlepage(&mut w, rows, cfg)?;
    w.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    info!(talks = rows.len(), path = %path.display(), "wrote single page");
    Ok(())
}

pub fn write_singlepage<W: Write>(w: &mut W, rows: &[Row], cfg: &RenderConfig) -> Result<()> {
    let cols = &cfg.columns;

    let mut ordered = rows
        .iter()
        .map(|row| {
            let key = (row.trimmed(&cols.session)?, row.trimmed(&cols.timeslot)?);
            Ok((key, row))
        })
        .collect::<Result<Vec<_>, TalkError>>()?;
    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    for (_, row) in ordered {
        writeln!(
            w,
            "# <span class=\"talk-title\">{}</span>",
            row.trimmed(&cols.title)?
        )?;
        writeln!(w)?;
        write_speaker(w, row, cols)?;
        write_sections(w, row, cols)?;
        writeln!(w)?;
    }
    Ok(())
}
