use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::{
    config::RenderConfig,
    render::{render, Mode},
    table::{active, load_csv, rotate, sanitize},
};

/// Load the export at `input`, keep the active talks and render them to
/// `output`. Returns how many talks were rendered.
#[tracing::instrument(level = "info", skip_all, fields(mode = %mode))]
pub fn run(input: &Path, output: &Path, mode: Mode, cfg: &RenderConfig) -> Result<usize> {
    let cells = sanitize(load_csv(input)?);
    let rows = active(rotate(&cells), &cfg.columns.active)?;
    render(mode, &rows, cfg, output)?;
    info!(talks = rows.len(), output = %output.display(), "rendered");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TalkError;
    use glob::glob;
    use std::fs;
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,talkgen=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    const EXPORT: &str = "\
Talk Title,Full Name,Session,Timeslot,Room,Talk Abstract,Professional Bio,Statement of Faith,Active,Privacy: Bio
\"How to Learn Go Fast\",\"Jane Doe\",\"3A\",\"9:00 AM\",\"101\",\"Abstract text.\",\"Bio text.\",\"Faith text.\",\"Y\",\"\"
\"Withdrawn Talk\",\"John Roe\",\"3B\",\"9:00 AM\",\"102\",\"Gone.\",\"Bio.\",\"Faith.\",\"y\",\"\"
";

    #[test]
    fn pages_end_to_end() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let input = tmp.path().join("talks.csv");
        fs::write(&input, EXPORT)?;
        let out = tmp.path().join("talk");

        let n = run(&input, &out, Mode::Pages, &RenderConfig::default())?;
        assert_eq!(n, 1);

        let pages: Vec<_> = glob(&format!("{}/*.md", out.display()))?
            .filter_map(|p| p.ok())
            .collect();
        assert_eq!(pages, vec![out.join("learn-go-fast.md")]);

        let text = fs::read_to_string(&pages[0])?;
        let expected = format!(
            "---
layout: page
title: \"How to Learn Go Fast\"
permalink: \"{}/learn-go-fast/index.html\"
---

## <span class=\"talk-speaker\">Jane Doe</span>

Session 3A, 9:00am, Room 101

### <span class=\"talk-abstract\">Abstract</span>

Abstract text.

### <span class=\"talk-bio\">Bio</span>

Bio text.

### <span class=\"talk-faith\">Statement of Faith</span>

Faith text.
",
            out.display()
        );
        assert_eq!(text, expected);
        Ok(())
    }

    #[test]
    fn inactive_rows_never_rendered() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let input = tmp.path().join("talks.csv");
        fs::write(&input, EXPORT)?;

        for mode in [Mode::SinglePage, Mode::Index] {
            let out = tmp.path().join(format!("{mode}.html"));
            run(&input, &out, mode, &RenderConfig::default())?;
            let text = fs::read_to_string(&out)?;
            assert!(text.contains("Learn Go Fast"), "{mode}");
            assert!(!text.contains("Withdrawn"), "{mode}");
            assert!(!text.contains("Track B"), "{mode}");
        }
        Ok(())
    }

    #[test]
    fn nbsp_is_normalised_before_rendering() -> Result<()> {
        let tmp = tempdir()?;
        let input = tmp.path().join("talks.csv");
        fs::write(&input, EXPORT.replace("Jane Doe", "Jane\u{a0}Doe"))?;
        let out = tmp.path().join("all.md");

        run(&input, &out, Mode::SinglePage, &RenderConfig::default())?;
        let text = fs::read_to_string(&out)?;
        assert!(text.contains("talk-speaker\">Jane Doe<"));
        assert!(!text.contains('\u{a0}'));
        Ok(())
    }

    #[test]
    fn short_row_aborts_with_missing_column() -> Result<()> {
        let tmp = tempdir()?;
        let input = tmp.path().join("talks.csv");
        fs::write(&input, format!("{EXPORT}\"Half a row\",\"Someone\"\n"))?;

        let err = run(&input, &tmp.path().join("x.md"), Mode::SinglePage, &RenderConfig::default())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<TalkError>(),
            Some(&TalkError::MissingColumn {
                column: "Active".into(),
                row: 3
            })
        );
        Ok(())
    }

    #[test]
    fn simple_export_bio_column() -> Result<()> {
        let tmp = tempdir()?;
        let input = tmp.path().join("talks.csv");
        fs::write(
            &input,
            "Talk Title,Full Name,Session,Timeslot,Room,Talk Abstract,Professional Bio,Statement of Faith,Active,Bio\n\
             Quiet Speaker,Ann,1A,9 AM,1,Abs,Secret bio,Faith,Y,X\n",
        )?;
        let out = tmp.path().join("all.md");

        // the default column name is absent from this export
        assert!(run(&input, &out, Mode::SinglePage, &RenderConfig::default()).is_err());

        let cfg = RenderConfig::from_yaml("columns:\n  bio_privacy: Bio\n")?;
        run(&input, &out, Mode::SinglePage, &cfg)?;
        let text = fs::read_to_string(&out)?;
        assert!(text.contains("Quiet Speaker"));
        assert!(!text.contains("Secret bio"));
        Ok(())
    }

    #[test]
    fn missing_input_is_an_error() {
        let tmp = tempdir().unwrap();
        let err = run(
            &tmp.path().join("nope.csv"),
            &tmp.path().join("out.md"),
            Mode::SinglePage,
            &RenderConfig::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"));
    }
}
