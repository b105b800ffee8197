use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lg::cs::tree::{
    diameter_of_binary_tree, diameter_of_binary_tree_iterative, Side, TreeNode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_tree(rng: &mut StdRng, depth: usize) -> Option<Box<TreeNode<i64>>> {
    if depth == 0 || rng.gen_bool(0.1) {
        return None;
    }
    Some(Box::new(TreeNode::with_children(
        rng.gen(),
        random_tree(rng, depth - 1),
        random_tree(rng, depth - 1),
    )))
}

fn bench_diameter(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_diameter");
    let mut rng = StdRng::seed_from_u64(543);

    for depth in [8, 12, 16] {
        let root = random_tree(&mut rng, depth);
        group.bench_with_input(BenchmarkId::new("recursive", depth), &root, |b, root| {
            b.iter(|| diameter_of_binary_tree(black_box(root.as_deref())))
        });
        group.bench_with_input(BenchmarkId::new("iterative", depth), &root, |b, root| {
            b.iter(|| diameter_of_binary_tree_iterative(black_box(root.as_deref())))
        });
    }

    let chain = TreeNode::chain(0..50_000_i64, Side::Left);
    group.bench_function("iterative_chain_50000", |b| {
        b.iter(|| diameter_of_binary_tree_iterative(black_box(chain.as_deref())))
    });

    group.finish();
}

criterion_group!(benches, bench_diameter);
criterion_main!(benches);
