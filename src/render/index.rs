use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{info, warn};

use super::{talk::time_label, url_join};
use crate::{config::RenderConfig, error::TalkError, slug::urlize, table::Row};

/// Talks laid out as time slot × track.
#[derive(Debug, Default)]
pub struct Schedule<'a> {
    /// time -> track -> talk
    pub cells: BTreeMap<String, BTreeMap<String, &'a Row>>,
    /// track -> room, taken from the last talk seen in that track
    pub tracks: BTreeMap<String, String>,
}

/// Split a session such as `3A` into `('3', 'A')`. Anything other than
/// exactly two characters is rejected.
pub fn split_session(session: &str) -> Option<(char, char)> {
    let mut chars = session.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(number), Some(track), None) => Some((number, track)),
        _ => None,
    }
}

impl<'a> Schedule<'a> {
    pub fn build(rows: &'a [Row], cfg: &RenderConfig) -> Result<Self, TalkError> {
        let cols = &cfg.columns;
        let mut schedule = Schedule::default();
        for row in rows {
            let session = row.trimmed(&cols.session)?;
            let (_, track) =
                split_session(session).ok_or_else(|| TalkError::MalformedSession {
                    value: session.to_string(),
                    title: row.get(&cols.title).unwrap_or_default().trim().to_string(),
                })?;
            let track = track.to_string();
            let time = time_label(row.get(&cols.timeslot)?);

            let slot = schedule.cells.entry(time.clone()).or_default();
            if slot.insert(track.clone(), row).is_some() {
                warn!(time = %time, track = %track, "two talks share a slot, keeping the later one");
            }
            schedule
                .tracks
                .insert(track, row.trimmed(&cols.room)?.to_string());
        }
        Ok(schedule)
    }
}

pub fn render_index(rows: &[Row], cfg: &RenderConfig, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating file {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_index(&mut w, rows, cfg)?;
    w.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    info!(talks = rows.len(), path = %path.display(), "wrote index");
    Ok(())
}

pub fn write_index<W: Write>(w: &mut W, rows: &[Row], cfg: &RenderConfig) -> Result<()> {
    let schedule = Schedule::build(rows, cfg)?;
    let cols = &cfg.columns;

    writeln!(w, "<table class=\"table table-striped\">")?;
    writeln!(w, "  <thead>")?;
    writeln!(w, "    <tr>")?;
    writeln!(w, "      <th>Time</th>")?;
    for (track, room) in &schedule.tracks {
        writeln!(w, "      <th>Track {}<br/>Room {}</th>", track, room)?;
    }
    writeln!(w, "    </tr>")?;
    writeln!(w, "  </thead>")?;
    writeln!(w, "  <tbody>")?;
    for (time, slot) in &schedule.cells {
        writeln!(w, "    <tr>")?;
        writeln!(w, "      <th>{}</th>", time)?;
        for track in schedule.tracks.keys() {
            match slot.get(track) {
                Some(row) => {
                    let title = row.get(&cols.title)?;
                    let href = url_join(&cfg.base_url, &[&cfg.talk_segment, &urlize(title)]);
                    writeln!(
                        w,
                        "      <td><a href=\"{}\">{{{{ '{}' | markdownify }}}}</a></td>",
                        href,
                        title.trim().replace('\'', "&rsquo;")
                    )?;
                }
                None => writeln!(w, "      <td></td>")?,
            }
        }
        writeln!(w, "    </tr>")?;
    }
    writeln!(w, "  </tbody>")?;
    writeln!(w, "</table>")?;
    Ok(())
}
