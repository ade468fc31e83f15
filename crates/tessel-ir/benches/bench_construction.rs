use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::Rng;
use tessel_element::F32;
use tessel_ir::{op, Graph, Shape};

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");
    let mut rng = rand::rng();

    for rank in [1, 4, 8] {
        let lhs: Vec<usize> = (0..rank).map(|_| rng.random_range(1..64)).collect();
        let rhs: Vec<usize> = lhs
            .iter()
            .map(|&d| if rng.random::<bool>() { 1 } else { d })
            .collect();
        let (lhs, rhs) = (Shape::new(lhs), Shape::new(rhs));

        group.bench_function(format!("rank_{}", rank), |bencher| {
            bencher.iter(|| black_box(lhs.broadcast(&rhs)))
        });
    }

    group.finish();
}

fn bench_minimum(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum");

    let a = op::parameter(F32.clone(), [64, 64]);
    let b = op::parameter(F32.clone(), [1, 64]);
    group.bench_function("single", |bencher| {
        bencher.iter(|| black_box(op::minimum(&a, &b).unwrap()))
    });

    for depth in [16, 256] {
        group.bench_function(format!("chain_{}", depth), |bencher| {
            bencher.iter(|| {
                let mut acc = a.clone();
                for _ in 0..depth {
                    acc = op::minimum(&acc, &b).unwrap();
                }
                black_box(Graph::new(vec![acc], vec![a.clone(), b.clone()]).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_broadcast, bench_minimum);
criterion_main!(benches);
