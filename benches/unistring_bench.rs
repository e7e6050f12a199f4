// Criterion benchmark suite for the hot paths of unistring
//
// Run: cargo bench
// Specific group: cargo bench -- linebreak
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use unistring::unicase::u8_casefold;
use unistring::uniconv::{mem_iconveh, IconvEhandler};
use unistring::unictype::{uc_general_category, uc_is_property_alphabetic, uc_linebreak_property};
use unistring::unigbrk::u8_grapheme_breaks;
use unistring::unilbrk::{u8_possible_linebreaks, u8_width_linebreaks, UcBreak};
use unistring::uninorm::{u8_normalize, UNINORM_NFC, UNINORM_NFD, UNINORM_NFKC};
use unistring::unistr::{u8_check, u8_mbtouc, u8_to_u16};
use unistring::uniwbrk::u8_wordbreaks;
use unistring::uniwidth::u8_width;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const LATIN: &str = "Zwölf Boxkämpfer jagen Viktor quer über den großen Sylter Deich. ";
const CJK: &str = "吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。";
const MIXED: &str = "Ünïcödé e\u{301} 🇩🇪👨\u{200D}👩\u{200D}👧 한국어 ΣΊΣΥΦΟΣ ﬁ ① ½ ";

fn corpus() -> Vec<(&'static str, String)> {
    vec![
        ("latin", LATIN.repeat(64)),
        ("cjk", CJK.repeat(64)),
        ("mixed", MIXED.repeat(64)),
    ]
}

// ---------------------------------------------------------------------------
// 1. decode -- UTF-8 validation and decoding
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, text) in corpus() {
        let bytes = text.as_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("check", name), bytes, |b, s| {
            b.iter(|| black_box(u8_check(black_box(s))));
        });
        group.bench_with_input(BenchmarkId::new("mbtouc", name), bytes, |b, s| {
            b.iter(|| {
                let mut pos = 0;
                let mut sum = 0u32;
                while pos < s.len() {
                    let (uc, n) = u8_mbtouc(&s[pos..]);
                    sum = sum.wrapping_add(uc);
                    pos += n;
                }
                black_box(sum)
            });
        });
        group.bench_with_input(BenchmarkId::new("to_u16", name), bytes, |b, s| {
            b.iter(|| black_box(u8_to_u16(black_box(s))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. properties -- trie lookups over the BMP
// ---------------------------------------------------------------------------

fn bench_properties(c: &mut Criterion) {
    let mut group = c.benchmark_group("properties");
    group.throughput(Throughput::Elements(0x10000));
    group.bench_function("general_category", |b| {
        b.iter(|| {
            for uc in 0..0x10000u32 {
                black_box(uc_general_category(black_box(uc)));
            }
        });
    });
    group.bench_function("alphabetic", |b| {
        b.iter(|| (0..0x10000u32).filter(|&uc| uc_is_property_alphabetic(black_box(uc))).count());
    });
    group.bench_function("linebreak", |b| {
        b.iter(|| {
            for uc in 0..0x10000u32 {
                black_box(uc_linebreak_property(black_box(uc)));
            }
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. segmentation -- grapheme, word and line boundaries
// ---------------------------------------------------------------------------

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");
    for (name, text) in corpus() {
        let bytes = text.as_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("graphemes", name), bytes, |b, s| {
            let mut out = vec![false; s.len()];
            b.iter(|| u8_grapheme_breaks(black_box(s), &mut out));
        });
        group.bench_with_input(BenchmarkId::new("words", name), bytes, |b, s| {
            let mut out = vec![false; s.len()];
            b.iter(|| u8_wordbreaks(black_box(s), &mut out));
        });
        group.bench_with_input(BenchmarkId::new("width", name), bytes, |b, s| {
            b.iter(|| black_box(u8_width(black_box(s), "UTF-8")));
        });
    }
    group.finish();
}

fn bench_linebreak(c: &mut Criterion) {
    let mut group = c.benchmark_group("linebreak");
    for (name, text) in corpus() {
        let bytes = text.as_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("possible", name), bytes, |b, s| {
            let mut out = vec![UcBreak::Undefined; s.len()];
            b.iter(|| u8_possible_linebreaks(black_box(s), "UTF-8", &mut out));
        });
        group.bench_with_input(BenchmarkId::new("width_72", name), bytes, |b, s| {
            let mut out = vec![UcBreak::Undefined; s.len()];
            b.iter(|| black_box(u8_width_linebreaks(black_box(s), 72, 0, 0, None, "UTF-8", &mut out)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. conversion -- legacy encodings through the pivot
// ---------------------------------------------------------------------------

fn bench_conversion(c: &mut Criterion) {
    let latin = LATIN.repeat(64);
    let cjk = CJK.repeat(64);
    let cases: &[(&str, &[u8], &str)] = &[
        ("latin1", latin.as_bytes(), "ISO-8859-1"),
        ("euc_jp", cjk.as_bytes(), "EUC-JP"),
        ("shift_jis", cjk.as_bytes(), "SHIFT_JIS"),
    ];

    let mut group = c.benchmark_group("conversion");
    for &(name, src, enc) in cases {
        let encoded = mem_iconveh(src, "UTF-8", enc, IconvEhandler::Error, None).expect("encodable corpus");
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), src, |b, s| {
            b.iter(|| black_box(mem_iconveh(black_box(s), "UTF-8", enc, IconvEhandler::Error, None)));
        });
        group.bench_with_input(BenchmarkId::new("decode", name), &encoded[..], |b, s| {
            b.iter(|| black_box(mem_iconveh(black_box(s), enc, "UTF-8", IconvEhandler::Error, None)));
        });
        group.bench_with_input(BenchmarkId::new("encode_offsets", name), src, |b, s| {
            let mut offsets = Vec::new();
            b.iter(|| black_box(mem_iconveh(black_box(s), "UTF-8", enc, IconvEhandler::Error, Some(&mut offsets))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 5. normalization and case folding
// ---------------------------------------------------------------------------

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    for (name, text) in corpus() {
        let bytes = text.as_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        for (form_name, form) in [("nfd", UNINORM_NFD), ("nfc", UNINORM_NFC), ("nfkc", UNINORM_NFKC)] {
            group.bench_with_input(BenchmarkId::new(form_name, name), bytes, |b, s| {
                b.iter(|| black_box(u8_normalize(form, black_box(s))));
            });
        }
        group.bench_with_input(BenchmarkId::new("casefold", name), bytes, |b, s| {
            b.iter(|| black_box(u8_casefold(black_box(s), None, None)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_decode,
    bench_properties,
    bench_segmentation,
    bench_linebreak,
    bench_conversion,
    bench_normalization,
);
criterion_main!(benches);
