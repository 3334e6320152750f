use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, info, warn};

use super::{
    talk::{write_sections, write_speaker},
    url_join,
};
use crate::{config::RenderConfig, slug::urlize, table::Row};

/// Write one `<slug>.md` page per talk into `dir`. Talks whose titles
/// share a slug overwrite each other; the last one wins.
pub fn render_pages(rows: &[Row], cfg: &RenderConfig, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir.display()))?;

    let base = dir.to_string_lossy();
    let mut written: HashSet<String> = HashSet::new();
    for row in rows {
        let slug = urlize(row.get(&cfg.columns.title)?);
        if slug.is_empty() {
            warn!(row = row.index(), "title yields an empty slug");
        }
        if !written.insert(slug.clone()) {
            warn!(slug = %slug, row = row.index(), "slug collision, overwriting page");
        }

        let path = dir.join(format!("{}.md", slug));
        let permalink = url_join(&base, &[&slug, "index.html"]);

        // one handle per talk, closed before the next is opened
        let file =
            File::create(&path).with_context(|| format!("creating file {}", path.display()))?;
        let mut w = BufWriter::new(file);
        write_page(&mut w, row, cfg, &permalink)?;
        w.flush()
            .with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "wrote page");
    }

    info!(pages = written.len(), talks = rows.len(), dir = %dir.display(), "wrote pages");
    Ok(())
}

pub fn write_page<W: Write>(
    w: &mut W,
    row: &Row,
    cfg: &RenderConfig,
    permalink: &str,
) -> Result<()> {
    let cols = &cfg.columns;
    writeln!(w, "---")?;
    writeln!(w, "layout: {}", cfg.layout)?;
    writeln!(
        w,
        "title: \"{}\"",
        row.trimmed(&cols.title)?.replace('"', "\\\"")
    )?;
    writeln!(w, "permalink: \"{}\"", permalink)?;
    writeln!(w, "---")?;
    writeln!(w)?;
    write_speaker(w, row, cols)?;
    write_sections(w, row, cols)?;
    Ok(())
}
