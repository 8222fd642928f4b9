use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use std::fmt::Write;

/// Build a synthetic ascii PLY with colored vertices and quad faces.
fn generate_ply(vertex_count: usize) -> String {
    let face_count = vertex_count / 4;
    let mut data = String::new();
    data.push_str("ply\nformat ascii 1.0\n");
    writeln!(data, "element vertex {vertex_count}").unwrap();
    data.push_str(
        "property float x\nproperty float y\nproperty float z\n\
         property uchar red\nproperty uchar green\nproperty uchar blue\n",
    );
    writeln!(data, "element face {face_count}").unwrap();
    data.push_str("property list uchar int vertex_indices\nend_header\n");

    for i in 0..vertex_count {
        let f = i as f32;
        writeln!(data, "{} {} {} {} {} {}", f, f * 0.5, f * 0.25, i % 256, 128, 64).unwrap();
    }
    for i in 0..face_count {
        let base = i * 4;
        writeln!(data, "4 {} {} {} {}", base, base + 1, base + 2, base + 3).unwrap();
    }
    data
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for vertex_count in [1_000, 100_000] {
        let data = generate_ply(vertex_count);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(format!("ascii_{vertex_count}_vertices"), |b| {
            b.iter(|| ply_mesh::from_str(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
