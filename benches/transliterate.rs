use criterion::{criterion_group, criterion_main, Criterion};
use inglish::rewrite::Rewriter;
use inglish::{lookup_words, PhoneticDictionary, Transliterator};

const BENCH_DICT: &str = "\
the;D@
quick;kw'Ik
brown;br'aUn
fox;f'0ks
jumps;dZ'Vmps
over;'@Uv@r
lazy;l'eIzi
dog;d'0g
pronunciation;pr@n.VnsI'eISn
chocolate;tS'0kl@t
";

const SENTENCE: &str =
    "The quick brown fox jumps over the lazy dog, pronunciation of chocolate unknownxyz";

fn bench_dict() -> PhoneticDictionary {
    PhoneticDictionary::parse(BENCH_DICT).unwrap()
}

fn bench_lookup(c: &mut Criterion) {
    let dict = bench_dict();
    c.bench_function("lookup_words", |b| b.iter(|| lookup_words(&dict, SENTENCE)));
}

fn bench_rewrite(c: &mut Criterion) {
    let dict = bench_dict();
    let words = lookup_words(&dict, SENTENCE);
    let rewriter = Rewriter::standard();
    c.bench_function("rewrite_words", |b| b.iter(|| rewriter.rewrite_words(&words)));
}

fn bench_pipeline(c: &mut Criterion) {
    let dict = bench_dict();
    let t = Transliterator::with_standard_rules(&dict);
    c.bench_function("transliterate_line", |b| {
        b.iter(|| t.transliterate_line(SENTENCE))
    });
}

criterion_group!(benches, bench_lookup, bench_rewrite, bench_pipeline);
criterion_main!(benches);
