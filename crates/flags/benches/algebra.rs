use criterion::{Criterion, criterion_group, criterion_main};
use samara_flags::{FlagValue, define_flag_set, flag_value};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let names: Vec<String> = (0..FlagValue::BITS).map(|bit| format!("FLAG_{bit}")).collect();
    let perms = define_flag_set(names.iter().cloned().zip((0..FlagValue::BITS).map(|bit| 1u32 << bit))).unwrap();
    let flags: Vec<FlagValue> = perms.values().collect();

    c.bench_function("define 31 flags", |b| {
        b.iter(|| {
            define_flag_set(black_box(&names).iter().cloned().zip((0..FlagValue::BITS).map(|bit| 1u32 << bit)))
        })
    });

    c.bench_function("has / add / remove / toggle", |b| {
        let handle = flag_value(0x5555_5555u32 & FlagValue::MAX.get());
        b.iter(|| {
            let handle = black_box(handle);
            let flags = black_box(&flags[..8]);
            (handle.has(flags), handle.add(flags), handle.remove(flags), handle.toggle(flags))
        })
    });

    for bits in [0u32, 1, 0x5555, 0x7FFF_FFFF] {
        c.bench_function(&format!("describe {bits:#x}"), |b| {
            b.iter(|| flag_value(black_box(bits)).describe().count())
        });

        c.bench_function(&format!("describe_with {bits:#x}"), |b| {
            b.iter(|| flag_value(black_box(bits)).describe_with(&perms).count())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
