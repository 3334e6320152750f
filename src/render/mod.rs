use anyhow::Result;
use clap::ValueEnum;
use std::{fmt, path::Path};

use crate::{config::RenderConfig, table::Row};

pub mod index;
pub mod pages;
pub mod singlepage;
mod talk;

/// Output flavour. `index` and `singlepage` write one file, `pages` a
/// directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[value(name = "singlepage")]
    SinglePage,
    Index,
    Pages,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::SinglePage => "singlepage",
            Mode::Index => "index",
            Mode::Pages => "pages",
        })
    }
}

pub fn render(mode: Mode, rows: &[Row], cfg: &RenderConfig, output: &Path) -> Result<()> {
    match mode {
        Mode::SinglePage => singlepage::render_singlepage(rows, cfg, output),
        Mode::Index => index::render_index(rows, cfg, output),
        Mode::Pages => pages::render_pages(rows, cfg, output),
    }
}

/// Join path segments with `/`, the way a POSIX path join does for
/// relative parts: no separator is added after one that already ends in
/// `/`, and an empty segment leaves a trailing `/`.
pub(crate) fn url_join(base: &str, parts: &[&str]) -> String {
    let mut out = base.to_string();
    for part in parts {
        if !out.is_empty() && !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(part);
    }
    out
}
