use criterion::{Criterion, criterion_group, criterion_main};
use spec_syntax::{Lexer, parse};

fn generate_stanza(rules: usize) -> String {
    (0..rules)
        .map(|i| format!("RuleNumber{i} ::=\n    $$kw$$ OtherRule? ( SomeItem | $$;$$ )*\n"))
        .collect()
}

fn bench_stanza(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_stanza(500);
    group.bench_function("lex", |b| {
        b.iter(|| {
            let tokens: Vec<_> = Lexer::new(std::hint::black_box(&content)).collect();
            std::hint::black_box(tokens);
        });
    });
    group.bench_function("parse", |b| {
        b.iter(|| {
            let nodes: Vec<_> = parse(std::hint::black_box(&content), "bench").collect();
            std::hint::black_box(nodes);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_stanza);
criterion_main!(benches);
