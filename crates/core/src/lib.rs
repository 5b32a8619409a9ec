#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Linguistic analysis of Polish verse: syllable estimates per line and
//! end-of-line rhyme grouping.
//!
//! Every function here is total over its input. Empty or malformed text
//! degrades to `0`, an empty string or an empty map.

extern crate alloc;

pub mod colors;
pub mod detect;
pub mod document;
pub mod normalize;
pub mod palette;
pub mod rhyme;
pub mod stats;
pub mod syllables;
pub mod tokenize;
pub mod word;

pub use colors::ColorMap;
pub use detect::{RhymeCandidate, RhymeGroup, color_groups, detect_groups, detect_rhymes};
pub use document::Document;
pub use normalize::clean;
pub use palette::{Color, Palette};
pub use rhyme::{RhymeMode, rhyme_part};
pub use stats::{DocumentStats, count_lines, count_words};
pub use syllables::count_syllables;
pub use tokenize::{last_word, tokens, word_tokens};
pub use word::WordId;
