//! End-to-end checks of the public analysis API

use wersy_core::{
    ColorMap, Document, DocumentStats, Palette, RhymeMode, WordId, count_lines, count_syllables,
    count_words, detect_rhymes,
};

#[test]
fn test_blank_document() {
    let doc = Document::parse("");
    assert_eq!(count_lines(""), 0);
    assert_eq!(count_words(""), 0);
    assert_eq!(detect_rhymes(&doc, RhymeMode::Exact, &Palette::default()), ColorMap::new());
}

#[test]
fn test_gutter_and_totals_agree() {
    let text = "Litwo! Ojczyzno moja! ty jesteś jak zdrowie:\nIle cię trzeba cenić, ten tylko się dowie,";
    let doc = Document::parse(text);
    let gutter = doc.line_syllables();
    assert_eq!(gutter.len(), 2);
    assert_eq!(gutter[0], count_syllables(doc.lines()[0]));
    assert_eq!(DocumentStats::of(text).syllables, gutter.iter().sum::<usize>());
}

#[test]
fn test_manual_paint_overrides_rhyme_color() {
    let palette = Palette::default();
    let doc = Document::parse("idę drogą\nmam nogą");
    let mut map = detect_rhymes(&doc, RhymeMode::Exact, &palette);

    let second = WordId::new(1, 2);
    map.paint(second, palette.color(3));
    assert_eq!(map.get(second), Some(palette.color(3)));
    assert_eq!(map.get(WordId::new(0, 2)), Some(palette.color(0)));

    map.paint(second, palette.color(3));
    assert_eq!(map.get(second), None);
}

#[test]
fn test_palette_wraps_for_many_groups() {
    let colors = vec![Palette::default().color(0), Palette::default().color(1)];
    let palette = Palette::new(colors).unwrap();
    let doc = Document::parse("kot\npłot\npies\nbies\ndom\ntom\nlas\nwas");
    let map = detect_rhymes(&doc, RhymeMode::Exact, &palette);
    assert_eq!(map.len(), 8);
    assert_eq!(map.get(WordId::new(0, 0)), map.get(WordId::new(4, 0)));
    assert_ne!(map.get(WordId::new(0, 0)), map.get(WordId::new(2, 0)));
}

#[test]
fn test_color_map_serializes_as_object() {
    let doc = Document::parse("idę drogą\nmam nogą");
    let map = detect_rhymes(&doc, RhymeMode::Exact, &Palette::default());
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r##"{"0-2":"#ffadad","1-2":"#ffadad"}"##);
    let back: ColorMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}
