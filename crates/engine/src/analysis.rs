use crate::config::Config;
use crate::error::Result;
use crate::report::{DocumentReport, LineReport, RhymeReport};
use crate::session::Session;
use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use wersy_core::{DocumentStats, count_syllables};

/// Analyzes one document.
///
/// Rhymes are detected first, then the configured paints are applied in
/// order, so a paint overrides a rhyme color on the same word.
///
/// # Errors
/// In strict mode, a paint addressing no word of the document is an error;
/// otherwise it is skipped with a warning.
pub fn analyze(name: impl Into<String>, text: String, config: &Config) -> Result<DocumentReport> {
    let name = name.into();
    let mut session = Session::new(config.palette.clone(), config.rhyme_mode);
    session.set_text(text);

    let document = session.document();
    let syllables = line_syllables(document.lines());
    let lines = document
        .lines()
        .iter()
        .zip(syllables)
        .enumerate()
        .map(|(index, (line, syllables))| LineReport {
            index,
            text: (*line).to_string(),
            syllables,
        })
        .collect();

    let rhymes: Vec<RhymeReport> = if config.detect_rhymes {
        session
            .detect_rhyme_groups()
            .into_iter()
            .enumerate()
            .map(|(group, found)| RhymeReport {
                group,
                color: config.palette.color(group),
                members: found.members,
            })
            .collect()
    } else {
        Vec::new()
    };

    for paint in &config.paints {
        if let Err(e) = session.paint(paint.id, paint.color) {
            if config.strict {
                return Err(e);
            }
            warn!("{name}: {e}, paint skipped");
        }
    }

    let stats = DocumentStats::of(session.text());
    debug!(
        "{name}: {} lines, {} syllables, {} rhyme groups",
        stats.lines,
        stats.syllables,
        rhymes.len()
    );

    Ok(DocumentReport {
        name,
        stats,
        lines,
        rhymes,
        colors: session.colors().clone(),
        text: session.text().to_string(),
    })
}

/// Per-line counts are independent of each other.
#[cfg(feature = "parallel")]
fn line_syllables(lines: &[&str]) -> Vec<usize> {
    lines.par_iter().map(|line| count_syllables(line)).collect()
}

#[cfg(not(feature = "parallel"))]
fn line_syllables(lines: &[&str]) -> Vec<usize> {
    lines.iter().map(|line| count_syllables(line)).collect()
}
