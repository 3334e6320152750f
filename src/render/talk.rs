//! Markdown blocks shared by the single-page and per-talk renderers.

use anyhow::Result;
use std::io::Write;

use crate::{config::Columns, table::Row};

/// Marker in the privacy column that hides the speaker bio.
pub(crate) const BIO_HIDDEN: &str = "X";

/// `"9:00 AM"` -> `"9:00am"`.
pub(crate) fn time_label(timeslot: &str) -> String {
    timeslot.trim().replace(' ', "").to_lowercase()
}

pub(crate) fn write_speaker<W: Write>(w: &mut W, row: &Row, cols: &Columns) -> Result<()> {
    writeln!(
        w,
        "## <span class=\"talk-speaker\">{}</span>",
        row.trimmed(&cols.speaker)?
    )?;
    writeln!(w)?;
    writeln!(
        w,
        "Session {}, {}, Room {}",
        row.trimmed(&cols.session)?,
        time_label(row.get(&cols.timeslot)?),
        row.trimmed(&cols.room)?
    )?;
    writeln!(w)?;
    Ok(())
}

/// Abstract, bio (unless hidden) and statement of faith. Ends right after
/// the faith text.
pub(crate) fn write_sections<W: Write>(w: &mut W, row: &Row, cols: &Columns) -> Result<()> {
    writeln!(w, "### <span class=\"talk-abstract\">Abstract</span>")?;
    writeln!(w)?;
    writeln!(w, "{}", row.get(&cols.abstract_text)?)?;
    writeln!(w)?;
    if row.get(&cols.bio_privacy)? != BIO_HIDDEN {
        writeln!(w, "### <span class=\"talk-bio\">Bio</span>")?;
        writeln!(w)?;
        writeln!(w, "{}", row.get(&cols.bio)?)?;
        writeln!(w)?;
    }
    writeln!(w, "### <span class=\"talk-faith\">Statement of Faith</span>")?;
    writeln!(w)?;
    writeln!(w, "{}", row.get(&cols.faith)?)?;
    Ok(())
}
