#![allow(clippy::all)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{
    distributions::{Alphanumeric, DistString},
    Rng,
};

use amqp_codec::primitives::{Symbol, Timestamp};
use amqp_codec::read::SliceReader;
use amqp_codec::{de, ser};

fn criterion_benchmark(c: &mut Criterion) {
    let value = rand::random::<bool>();
    c.bench_function("write bool", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_bool(&mut buf, black_box(value));
        })
    });

    let value = rand::random::<u32>();
    c.bench_function("write uint", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_uint(&mut buf, black_box(value));
        })
    });
    c.bench_function("read uint", |b| {
        let mut buf = Vec::new();
        ser::write_uint(&mut buf, value);
        b.iter(|| {
            let mut r = SliceReader::new(black_box(&buf));
            de::read_uint(&mut r).unwrap()
        })
    });

    let value = rand::random::<u64>();
    c.bench_function("write ulong", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_ulong(&mut buf, black_box(value));
        })
    });

    let value = rand::random::<i64>();
    c.bench_function("write long", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_long(&mut buf, black_box(value));
        })
    });

    let timestamp = Timestamp::from_milliseconds(rand::random::<i64>());
    c.bench_function("write timestamp", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_timestamp(&mut buf, black_box(timestamp));
        })
    });

    let short = Alphanumeric.sample_string(&mut rand::thread_rng(), 16);
    c.bench_function("write short string", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_string(&mut buf, black_box(&short)).unwrap();
        })
    });
    c.bench_function("read short string", |b| {
        let mut buf = Vec::new();
        ser::write_string(&mut buf, &short).unwrap();
        b.iter(|| {
            let mut r = SliceReader::new(black_box(&buf));
            de::read_string(&mut r).unwrap()
        })
    });

    let long = Alphanumeric.sample_string(&mut rand::thread_rng(), 4096);
    c.bench_function("write long string", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_string(&mut buf, black_box(&long)).unwrap();
        })
    });

    let symbol = Symbol::new("amqp:accepted:list");
    c.bench_function("write symbol", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_symbol(&mut buf, black_box(&symbol)).unwrap();
        })
    });

    let binary: Vec<u8> = (0..256).map(|_| rand::thread_rng().gen()).collect();
    c.bench_function("write binary", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            ser::write_binary(&mut buf, black_box(&binary)).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
