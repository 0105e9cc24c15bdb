use packtree::{BoundingBox, EuclideanPlane, RTree};
use packtree_int_test::test_util::{random_entries, seeded_rng};

fn main() {
    println!("Starting stress test...");
    let mut rng = seeded_rng(42);

    let count = 1_000_000;
    let entries = random_entries(&mut rng, count);

    let start = std::time::Instant::now();
    let tree = RTree::bulk_load_with_capacity(entries, 16).expect("bulk load failed");
    println!("Bulk loaded {} entries in {:?}", count, start.elapsed());
    println!("Tree height: {}, mbr: {}", tree.height(), tree.mbr());

    let start = std::time::Instant::now();
    let mut hits = 0usize;
    for i in 0..1000 {
        let offset = (i % 100) as f32 * 10.0 - 500.0;
        let query = BoundingBox::new(offset, offset, offset + 50.0, offset + 50.0);
        hits += tree.find_intersecting(&query).len();
    }
    println!("Ran 1000 rectangle queries ({} hits) in {:?}", hits, start.elapsed());

    let start = std::time::Instant::now();
    for i in 0..1000 {
        let probe = (i % 200) as f32 * 10.0 - 1000.0;
        let _ = tree.find_nearest(probe, -probe, None, &EuclideanPlane);
    }
    println!("Ran 1000 nearest queries in {:?}", start.elapsed());

    let removals = tree.entries().into_iter().take(1000).collect::<Vec<_>>();
    let insertions = random_entries(&mut rng, 1000);
    let start = std::time::Instant::now();
    let updated = tree
        .update(&removals, &insertions, 16)
        .expect("update failed");
    println!(
        "Updated tree ({} entries -> {} entries) in {:?}",
        tree.len(),
        updated.len(),
        start.elapsed()
    );
}
