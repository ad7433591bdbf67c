use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chroma_schemes::{contrast_ratio, generate_scheme, SchemeGenerator, SchemeKind};

fn benchmark_scheme_generation(c: &mut Criterion) {
    let generator = SchemeGenerator::default();

    for kind in SchemeKind::ALL {
        c.bench_function(&format!("generate_{}", kind.token().to_lowercase()), |b| {
            b.iter(|| generator.generate(kind, black_box("#3498DB"), None))
        });
    }

    c.bench_function("generate_scheme_by_name", |b| {
        b.iter(|| generate_scheme(black_box("Monocromatico"), black_box("#E74C3C"), Some(8)))
    });
}

fn benchmark_contrast(c: &mut Criterion) {
    c.bench_function("contrast_ratio", |b| {
        b.iter(|| contrast_ratio(black_box("#3498DB"), black_box("#2C3E50")))
    });
}

criterion_group!(benches, benchmark_scheme_generation, benchmark_contrast);
criterion_main!(benches);
