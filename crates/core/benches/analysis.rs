use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wersy_core::{Document, DocumentStats, Palette, RhymeMode, detect_rhymes};

const STANZA: &str = "Litwo! Ojczyzno moja! ty jesteś jak zdrowie:\n\
Ile cię trzeba cenić, ten tylko się dowie,\n\
Kto cię stracił. Dziś piękność twą w całej ozdobie\n\
Widzę i opisuję, bo tęsknię po tobie.\n";

fn benchmark_analysis(c: &mut Criterion) {
    let text = STANZA.repeat(64);
    let palette = Palette::default();

    c.bench_function("document_stats", |b| {
        b.iter(|| black_box(DocumentStats::of(black_box(&text))));
    });

    c.bench_function("detect_rhymes_exact", |b| {
        b.iter(|| {
            let doc = Document::parse(black_box(&text));
            black_box(detect_rhymes(&doc, RhymeMode::Exact, &palette))
        });
    });

    c.bench_function("detect_rhymes_imperfect", |b| {
        b.iter(|| {
            let doc = Document::parse(black_box(&text));
            black_box(detect_rhymes(&doc, RhymeMode::Imperfect, &palette))
        });
    });
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
