use std::fmt::Display;
use std::str::FromStr;
use wersy_core::{Color, WordId};

/// Wrapper type to parse a hex color (e.g. `#ffadad`, `fa0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorArg(pub Color);

impl FromStr for ColorArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
            .map(Self)
            .ok_or_else(|| format!("Invalid color: {s} (expected #rrggbb or #rgb)"))
    }
}

/// Wrapper type to parse a manual highlight: `LINE-TOKEN` with an optional
/// `=COLOR` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintArg {
    pub id: WordId,
    pub color: Option<Color>,
}

impl FromStr for PaintArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, color) = match s.split_once('=') {
            Some((position, color)) => (position, Some(color.parse::<ColorArg>()?.0)),
            None => (s, None),
        };
        let id = position
            .parse::<WordId>()
            .map_err(|e| format!("Invalid word position '{position}': {e}"))?;
        Ok(Self { id, color })
    }
}

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a watch debounce interval in seconds, within [1, 3600].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range.
pub fn parse_interval_secs(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 1, Some(3600))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any rendered color parses back to itself
        #[test]
        fn test_color_display_parses(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Color::rgb(r, g, b);
            let parsed: ColorArg = color.to_string().parse().unwrap();
            prop_assert_eq!(parsed.0, color);
        }

        /// Positions parse regardless of size
        #[test]
        fn test_paint_positions(line in 0usize..100_000, token in 0usize..1_000) {
            let parsed: PaintArg = format!("{line}-{token}").parse().unwrap();
            prop_assert_eq!(parsed.id, WordId::new(line, token));
        }

        /// Interval accepts its whole range
        #[test]
        fn test_interval_valid(n in 1u64..=3600) {
            prop_assert_eq!(parse_interval_secs(&n.to_string()), Ok(n));
        }
    }
}
