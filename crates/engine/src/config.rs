use crate::options::{OutputFormat, Paint, WatchOutput};
use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;
use wersy_core::{Palette, RhymeMode};

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Files to analyze; empty reads standard input.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,

    #[builder(default)]
    pub rhyme_mode: RhymeMode,
    #[builder(default = "true")]
    pub detect_rhymes: bool,
    #[builder(default)]
    pub palette: Palette,
    #[builder(default)]
    pub paints: Vec<Paint>,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub export: bool,

    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
    #[builder(default)]
    pub watch_output: WatchOutput,
}

impl Config {
    /// Reads standard input when no files were given.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            rhyme_mode: RhymeMode::Exact,
            detect_rhymes: true,
            palette: Palette::default(),
            paints: vec![],
            format: OutputFormat::Table,
            export: false,
            strict: false,
            watch: false,
            watch_interval: Duration::from_secs(1),
            watch_output: WatchOutput::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.rhyme_mode, default.rhyme_mode);
        assert_eq!(built.detect_rhymes, default.detect_rhymes);
        assert_eq!(built.palette, default.palette);
        assert_eq!(built.watch_interval, default.watch_interval);
        assert!(built.reads_stdin());
    }

    #[test]
    fn builder_overrides() {
        let config = ConfigBuilder::default()
            .inputs(vec![PathBuf::from("wiersz.txt")])
            .rhyme_mode(RhymeMode::Imperfect)
            .format(OutputFormat::Json)
            .build()
            .unwrap();
        assert!(!config.reads_stdin());
        assert_eq!(config.rhyme_mode, RhymeMode::Imperfect);
        assert_eq!(config.format, OutputFormat::Json);
    }
}
