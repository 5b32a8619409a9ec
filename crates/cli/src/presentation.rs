// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use comfy_table::{Cell, CellAlignment, Table};
use std::fmt::Write;
use wersy_core::{Color, ColorMap, WordId, tokens};
use wersy_engine::options::{OutputFormat, WatchOutput};
use wersy_engine::report::DocumentReport;
use wersy_engine::session::export_text;

pub fn print_clear_screen(output: WatchOutput) {
    if matches!(output, WatchOutput::Full) {
        print!("\x1B[2J\x1B[1;1H");
    }
}

/// Render and print the reports in the configured format.
///
/// # Errors
/// Fails if serialization fails.
pub fn print_results(reports: &[DocumentReport], config: &Config) -> Result<()> {
    let output = render(reports, config)?;
    print!("{output}");
    Ok(())
}

/// Render the reports in the configured format.
///
/// # Errors
/// Fails if serialization fails.
pub fn render(reports: &[DocumentReport], config: &Config) -> Result<String> {
    if config.export {
        return Ok(render_export(reports));
    }
    let format = if config.watch && matches!(config.watch_output, WatchOutput::Jsonl) {
        OutputFormat::Jsonl
    } else {
        config.format
    };

    let out = match format {
        OutputFormat::Table => render_table(reports),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(reports)?),
        OutputFormat::Yaml => serde_yaml::to_string(reports)?,
        OutputFormat::Jsonl => render_jsonl(reports)?,
        OutputFormat::Md => render_markdown(reports)?,
        OutputFormat::Paint => render_paint(reports)?,
    };
    Ok(out)
}

fn render_export(reports: &[DocumentReport]) -> String {
    reports
        .iter()
        .map(|r| export_text(&r.text))
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n"
}

/// Syllable gutter cell: empty lines show a dash.
fn gutter(syllables: usize) -> String {
    if syllables == 0 {
        "-".to_string()
    } else {
        syllables.to_string()
    }
}

fn summary(report: &DocumentReport) -> String {
    format!(
        "Wersy: {} | Słowa: {} | Sylaby (suma): {}",
        report.stats.lines, report.stats.words, report.stats.syllables
    )
}

fn render_table(reports: &[DocumentReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let mut table = Table::new();
        table.set_header(vec!["#", "SYL", "LINE", "RHYME"]);

        for line in &report.lines {
            let rhyme = report
                .rhyme_of_line(line.index)
                .map(wersy_engine::report::RhymeReport::label)
                .unwrap_or_default();
            table.add_row(vec![
                Cell::new(line.index + 1).set_alignment(CellAlignment::Right),
                Cell::new(gutter(line.syllables)).set_alignment(CellAlignment::Right),
                Cell::new(line.text.trim_end()),
                Cell::new(rhyme),
            ]);
        }

        out.push_str(&format!("==> {} <==\n", report.name));
        out.push_str(&table.to_string());
        out.push('\n');
        out.push_str(&summary(report));
        out.push('\n');
    }
    out
}

fn render_jsonl(reports: &[DocumentReport]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        for line in &report.lines {
            let record = serde_json::json!({
                "type": "line",
                "document": report.name,
                "index": line.index,
                "syllables": line.syllables,
                "text": line.text,
            });
            out.push_str(&serde_json::to_string(&record)?);
            out.push('\n');
        }

        let total = serde_json::json!({
            "type": "total",
            "version": crate::VERSION,
            "document": report.name,
            "lines": report.stats.lines,
            "words": report.stats.words,
            "syllables": report.stats.syllables,
            "rhyme_groups": report.rhymes.len(),
            "colors": report.colors,
        });
        out.push_str(&serde_json::to_string(&total)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_markdown(reports: &[DocumentReport]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        writeln!(out, "### {}", report.name)?;
        writeln!(out)?;
        writeln!(out, "| # | Syllables | Line | Rhyme |")?;
        writeln!(out, "|---:|---:|:---|:---:|")?;
        for line in &report.lines {
            let rhyme = report
                .rhyme_of_line(line.index)
                .map(wersy_engine::report::RhymeReport::label)
                .unwrap_or_default();
            let text = line.text.trim_end().replace('|', "\\|");
            writeln!(
                out,
                "| {} | {} | {text} | {rhyme} |",
                line.index + 1,
                gutter(line.syllables)
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{}", summary(report))?;
        writeln!(out)?;
    }
    Ok(out)
}

/// The text again, with colored words on a 24-bit ANSI background.
///
/// With several documents each one is headed by its name.
fn render_paint(reports: &[DocumentReport]) -> Result<String> {
    let mut out = String::new();
    let headed = reports.len() > 1;
    for (index, report) in reports.iter().enumerate() {
        if headed {
            if index > 0 {
                out.push('\n');
            }
            writeln!(out, "==> {} <==", report.name)?;
        }
        for line in &report.lines {
            paint_line(&mut out, line.index, &line.text, &report.colors)?;
            out.push('\n');
        }
    }
    Ok(out)
}

fn paint_line(out: &mut String, index: usize, line: &str, colors: &ColorMap) -> std::fmt::Result {
    for (token_index, token) in tokens(line).into_iter().enumerate() {
        let color = colors.get(WordId::new(index, token_index));
        match color {
            Some(Color { r, g, b }) => {
                write!(out, "\x1B[48;2;{r};{g};{b}m\x1B[30m{token}\x1B[0m")?;
            }
            None => out.push_str(token),
        }
    }
    Ok(())
}
