// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
use std::time::Duration;
use wersy_core::{Palette, RhymeMode};
pub use wersy_engine::config::{Config, ConfigBuilder};
use wersy_engine::options::{self as engine_options, Paint};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        // No --palette: the default swatches.
        let palette =
            Palette::new(args.palette.iter().map(|c| c.0).collect()).unwrap_or_default();

        let paints: Vec<Paint> = args
            .paint
            .iter()
            .map(|p| Paint::new(p.id, p.color))
            .collect();

        let format: engine_options::OutputFormat = args.format.into();
        let watch_output: engine_options::WatchOutput = args.watch_output.into();

        ConfigBuilder::default()
            .inputs(args.paths)
            .rhyme_mode(RhymeMode::from_imperfect(args.imperfect))
            .detect_rhymes(!args.no_rhymes)
            .palette(palette)
            .paints(paints)
            .format(format)
            .export(args.export)
            .strict(args.strict)
            .watch(args.watch)
            .watch_interval(Duration::from_secs(args.watch_interval.unwrap_or(1)))
            .watch_output(watch_output)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Json,
    Yaml,
    Jsonl,
    Md,
    Paint
);
map_enum!(
    options::WatchOutput,
    engine_options::WatchOutput,
    Full,
    Jsonl
);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wersy_core::{Color, WordId};

    fn config(argv: &[&str]) -> Config {
        Config::try_from(Args::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_defaults_convert() {
        let cfg = config(&["wersy"]);
        assert!(cfg.reads_stdin());
        assert!(cfg.detect_rhymes);
        assert_eq!(cfg.rhyme_mode, RhymeMode::Exact);
        assert_eq!(cfg.palette, Palette::default());
        assert_eq!(cfg.format, engine_options::OutputFormat::Table);
        assert_eq!(cfg.watch_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_explicit_palette_replaces_default() {
        let cfg = config(&["wersy", "--palette", "#2a9d8f"]);
        assert_eq!(cfg.palette.colors(), [Color::rgb(0x2a, 0x9d, 0x8f)]);
    }

    #[test]
    fn test_flags_convert() {
        let cfg = config(&[
            "wersy",
            "wiersz.txt",
            "--imperfect",
            "--no-rhymes",
            "--format",
            "paint",
            "--palette",
            "#000,#fff",
            "--paint",
            "0-0=#fff",
            "--watch",
            "--watch-interval",
            "3",
        ]);
        assert_eq!(cfg.rhyme_mode, RhymeMode::Imperfect);
        assert!(!cfg.detect_rhymes);
        assert_eq!(cfg.format, engine_options::OutputFormat::Paint);
        assert_eq!(cfg.palette.len(), 2);
        assert_eq!(
            cfg.paints,
            [Paint::new(WordId::new(0, 0), Some(Color::rgb(255, 255, 255)))]
        );
        assert!(cfg.watch);
        assert_eq!(cfg.watch_interval, Duration::from_secs(3));
    }
}
