use criterion::{black_box, criterion_group, criterion_main, Criterion};
use remora_core::{MatchMode, ProcessInfo, ProcessList};

fn bench_process_lookup(c: &mut Criterion) {
    let names: Vec<String> = (0..1000).map(|i| format!("process_{i:04}")).collect();
    let pids: Vec<i32> = (0..1000).collect();
    let list = ProcessList::new(1000, names, pids);

    c.bench_function("find_process_contains_worst_case", |b| {
        b.iter(|| {
            let _ = black_box(list.find_process(black_box("process_0999"), MatchMode::Contains));
        })
    });
}

fn bench_process_record_decode(c: &mut Criterion) {
    let bytes = ProcessInfo {
        pid: 42,
        name: "eboot.bin".to_string(),
        path: "/app0/eboot.bin".to_string(),
        titleid: "CUSA00001".to_string(),
        contentid: "UP0000-CUSA00001_00-0000000000000000".to_string(),
    }
    .to_bytes();

    c.bench_function("process_info_decode", |b| {
        b.iter(|| {
            let _ = black_box(ProcessInfo::from_bytes(black_box(&bytes)));
        })
    });
}

criterion_group!(benches, bench_process_lookup, bench_process_record_decode);
criterion_main!(benches);
