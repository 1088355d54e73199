use criterion::{Criterion, criterion_group, criterion_main};
use heapkit::command::parse_script;
use heapkit::fixture::{FixtureConfig, FixtureGenerator};
use heapkit::simulator::HeapSimulator;

fn bench_generate(c: &mut Criterion) {
    let generator = FixtureGenerator::try_new(FixtureConfig::new(50, 1000, 42)).unwrap();
    c.bench_function("fixture_generate_1000_steps", |b| {
        b.iter(|| std::hint::black_box(generator.generate().unwrap()))
    });
}

fn bench_replay(c: &mut Criterion) {
    let fixture = FixtureGenerator::try_new(FixtureConfig::new(50, 1000, 42))
        .unwrap()
        .generate()
        .unwrap();
    let text = fixture.input_text();
    c.bench_function("fixture_parse_and_replay", |b| {
        b.iter(|| {
            let commands = parse_script(std::hint::black_box(&text)).unwrap();
            std::hint::black_box(HeapSimulator::new(50).run(&commands))
        })
    });
}

criterion_group!(benches, bench_generate, bench_replay);
criterion_main!(benches);
