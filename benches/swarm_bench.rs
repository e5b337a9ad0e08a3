//! Criterion benchmarks for the cuckoo search and particle swarm runners.
//!
//! Uses synthetic problems (Sphere, Michalewicz) to measure pure
//! algorithm overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::f64::consts::PI;
use u_swarm::{CuckooConfig, CuckooSearch, Optimizer, ParticleSwarm, Problem, PsoConfig, Solution};

// ===========================================================================
// Sphere: maximize -sum(x_i^2) on [-5, 5]^d
// ===========================================================================

struct Sphere {
    dim: usize,
}

impl Problem for Sphere {
    fn num_variables(&self) -> usize {
        self.dim
    }

    fn fitness(&self, s: &Solution) -> f64 {
        -s.variables.iter().map(|x| x * x).sum::<f64>()
    }

    fn within_constraints(&self, s: &Solution) -> bool {
        s.variables.iter().all(|x| (-5.0..=5.0).contains(x))
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        Solution::new((0..self.dim).map(|_| rng.random_range(-5.0..=5.0)).collect())
    }
}

// ===========================================================================
// Michalewicz (m = 10) on [0, pi]^d, minimum negated into a fitness
// ===========================================================================

struct Michalewicz {
    dim: usize,
}

impl Problem for Michalewicz {
    fn num_variables(&self) -> usize {
        self.dim
    }

    fn fitness(&self, s: &Solution) -> f64 {
        s.variables
            .iter()
            .enumerate()
            .map(|(i, &x)| x.sin() * ((i as f64 + 1.0) * x * x / PI).sin().powi(20))
            .sum()
    }

    fn within_constraints(&self, s: &Solution) -> bool {
        s.variables.iter().all(|x| (0.0..=PI).contains(x))
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        Solution::new((0..self.dim).map(|_| rng.random_range(0.0..=PI)).collect())
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_cuckoo_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("cuckoo_sphere");
    group.sample_size(10);

    for &dim in &[2usize, 10, 30] {
        let problem = Sphere { dim };
        let config = CuckooConfig::default()
            .with_max_generations(2_000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &problem, |b, p| {
            b.iter(|| {
                let mut cs = CuckooSearch::new(config.clone());
                cs.solve(black_box(p)).unwrap();
                black_box(cs.stats().map(|s| s.generations))
            })
        });
    }
    group.finish();
}

fn bench_pso_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_sphere");
    group.sample_size(10);

    for (dim, particles, gens) in [(2usize, 20usize, 100usize), (10, 30, 200), (30, 50, 200)] {
        let problem = Sphere { dim };
        let config = PsoConfig::default()
            .with_population_size(particles)
            .with_max_generations(gens)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{dim}_p{particles}_g{gens}"), dim),
            &problem,
            |b, p| {
                b.iter(|| {
                    let mut pso = ParticleSwarm::new(config.clone());
                    pso.solve(black_box(p)).unwrap();
                    black_box(pso.stats().map(|s| s.generations))
                })
            },
        );
    }
    group.finish();
}

fn bench_michalewicz(c: &mut Criterion) {
    let mut group = c.benchmark_group("michalewicz_d5");
    group.sample_size(10);
    let problem = Michalewicz { dim: 5 };

    group.bench_function("cuckoo", |b| {
        b.iter(|| {
            let mut cs =
                CuckooSearch::new(CuckooConfig::default().with_max_generations(5_000).with_seed(1));
            cs.solve(black_box(&problem)).unwrap();
            black_box(cs.best_solution(&problem).unwrap())
        })
    });
    group.bench_function("pso", |b| {
        b.iter(|| {
            let mut pso = ParticleSwarm::new(PsoConfig::default().with_seed(1));
            pso.solve(black_box(&problem)).unwrap();
            black_box(pso.best_solution(&problem).unwrap())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_cuckoo_sphere, bench_pso_sphere, bench_michalewicz);
criterion_main!(benches);
