//! # SPV Benchmarks
//!
//! | Area | Operation | Expectation |
//! |------|-----------|-------------|
//! | Header chain | `add_header` | Dominated by one SHA-256d |
//! | Header chain | `create_locator` | Linear in chain height |
//! | Bloom filter | `insert` / `contains` | k Murmur3 rounds |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use spv_01_header_chain::{BlockHeader, ChainIndex};
use spv_02_bloom_filters::{BloomFilter, BloomFlags};
use spv_tests::fixtures::header_chain;

// ============================================================================
// Header chain
// ============================================================================

fn bench_header_chain_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("spv-01-header-chain");
    let genesis = BlockHeader::mainnet_genesis();

    for count in [100usize, 1_000, 10_000] {
        let headers = header_chain(&genesis, count, 0);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("add_header", count), &headers, |b, headers| {
            b.iter(|| {
                let mut index = ChainIndex::from_genesis_header(genesis);
                for header in headers {
                    let _ = index.add_header(*header);
                }
                black_box(index.height())
            })
        });

        let mut index = ChainIndex::from_genesis_header(genesis);
        for header in &headers {
            let _ = index.add_header(*header);
        }
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("create_locator", count), &index, |b, index| {
            b.iter(|| black_box(index.create_locator()))
        });
    }

    group.bench_function("block_hash", |b| b.iter(|| black_box(genesis.block_hash())));

    group.finish();
}

// ============================================================================
// Bloom filter
// ============================================================================

fn bench_bloom_filter_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("spv-02-bloom-filters");
    let mut rng = rand::thread_rng();

    for (n, fpr) in [(100usize, 0.01), (1_000, 0.001), (10_000, 0.0001)] {
        let items: Vec<[u8; 32]> = (0..n).map(|_| rng.gen()).collect();
        let label = format!("n{}_p{}", n, fpr);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("insert", &label), &items, |b, items| {
            b.iter(|| {
                let mut filter = match BloomFilter::for_elements(n, fpr, 0, BloomFlags::None) {
                    Ok(filter) => filter,
                    Err(_) => return,
                };
                for item in items {
                    filter.insert(item);
                }
                black_box(filter.bits_set());
            })
        });

        let mut filter = match BloomFilter::for_elements(n, fpr, 0, BloomFlags::None) {
            Ok(filter) => filter,
            Err(_) => continue,
        };
        for item in &items {
            filter.insert(item);
        }
        let candidates: Vec<[u8; 32]> = (0..n).map(|_| rng.gen()).collect();
        group.bench_with_input(BenchmarkId::new("contains_miss", &label), &candidates, |b, candidates| {
            b.iter(|| candidates.iter().filter(|p| filter.contains(&p[..])).count())
        });
        group.bench_with_input(BenchmarkId::new("contains_hit", &label), &items, |b, items| {
            b.iter(|| items.iter().filter(|p| filter.contains(&p[..])).count())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_header_chain_operations,
    bench_bloom_filter_operations
);
criterion_main!(benches);
