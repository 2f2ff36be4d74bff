use codec::{decode_token, encode_token, find_links, ChatLink, CoinLink, ItemLink, Limits};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn sample_links() -> Vec<(&'static str, ChatLink)> {
    vec![
        ("coin", CoinLink::new(12_345).into()),
        ("item", ItemLink::new(46_762).into()),
        (
            "item_all_modifiers",
            ItemLink::new(46_762)
                .with_suffix_item(24_615)
                .with_secondary_suffix_item(24_618)
                .with_skin(3_710)
                .into(),
        ),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_token");
    group.throughput(Throughput::Elements(1));
    for (name, link) in sample_links() {
        group.bench_function(name, |b| {
            b.iter(|| encode_token(black_box(&link)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let limits = Limits::default();
    let mut group = c.benchmark_group("decode_token");
    group.throughput(Throughput::Elements(1));
    for (name, link) in sample_links() {
        let token = encode_token(&link).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| decode_token(black_box(&token), &limits).unwrap());
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let message = "wts [&AgGqtgAA] for [&ATkwAAA=], also [&AgGqtgDgJ2AAACpgAAB+DgAA] pst";
    let mut group = c.benchmark_group("find_links");
    group.throughput(Throughput::Bytes(message.len() as u64));
    group.bench_function("chat_message", |b| {
        b.iter(|| find_links(black_box(message)).count());
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_scan);
criterion_main!(benches);
