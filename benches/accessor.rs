use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use keydex::{Accessor, JsonArray, JsonObject, WriteConfig};

fn create_object(entries: usize) -> JsonObject {
    let mut object = JsonObject::with_capacity(entries);
    for i in 0..entries {
        let key = format!("key{i}");
        let stored = match i % 4 {
            0 => object.put(key, i as i32),
            1 => object.put(key, i.to_string()),
            2 => object.put(key, i as f64 + 0.5),
            _ => object.put(key, JsonArray::from_values([1, 2, 3]).unwrap()),
        };
        stored.unwrap();
    }
    object
}

fn bench_get(c: &mut Criterion) {
    let object = create_object(256);
    let keys: Vec<String> = (0..256).map(|i| format!("key{i}")).collect();

    c.bench_function("get_int", |b| {
        b.iter(|| {
            for key in keys.iter().step_by(4) {
                black_box(object.get_int(key).unwrap());
            }
        })
    });

    c.bench_function("get_int_from_string", |b| {
        b.iter(|| {
            for key in keys.iter().skip(1).step_by(4) {
                black_box(object.get_int(key).unwrap());
            }
        })
    });
}

fn bench_opt(c: &mut Criterion) {
    let object = create_object(256);
    let keys: Vec<String> = (0..256).map(|i| format!("key{i}")).collect();

    c.bench_function("opt_int_fallback", |b| {
        b.iter(|| {
            for key in keys.iter().skip(3).step_by(4) {
                black_box(object.opt_int_or(key, -1));
            }
        })
    });

    c.bench_function("opt_string", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(object.opt_string(key));
            }
        })
    });
}

fn bench_write(c: &mut Criterion) {
    let object = create_object(256);

    c.bench_function("write_compact", |b| {
        b.iter(|| black_box(object.write(Vec::with_capacity(8192)).unwrap()))
    });

    c.bench_function("write_pretty", |b| {
        b.iter(|| {
            black_box(
                object
                    .write_with(Vec::with_capacity(16384), &WriteConfig::pretty(2))
                    .unwrap(),
            )
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = create_object(256).to_string();

    c.bench_function("parse_object", |b| {
        b.iter(|| black_box(text.parse::<JsonObject>().unwrap()))
    });
}

criterion_group!(benches, bench_get, bench_opt, bench_write, bench_parse);
criterion_main!(benches);
