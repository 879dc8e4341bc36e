use alloc::format;
use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use chain_hash::ChainedHashMap;
use chain_hash::HashTable as ChainedHashTable;
use chain_hash::TableConfig;
use chain_hash::hash_table::Entry as ChainedEntry;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownHashMap;
use hashbrown::hash_table::Entry as HashbrownEntry;
use hashbrown::hash_table::HashTable as HashbrownHashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

extern crate alloc;

trait KeyValuePair: Clone {
    fn new(key: u64) -> Self;

    fn hash_key(&self) -> u64;
    fn eq_key(&self, other: &Self) -> bool;
}

#[derive(Clone)]
struct TestItem {
    key: String,
    _value: u64,
}

impl KeyValuePair for TestItem {
    fn new(key: u64) -> Self {
        black_box(Self {
            key: format!("key_{:016X}", key),
            _value: key,
        })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[derive(Clone)]
struct SmallTestItem {
    key: u64,
}

impl KeyValuePair for SmallTestItem {
    fn new(key: u64) -> Self {
        black_box(Self { key })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 11),
    (1 << 12),
    (1 << 13),
    (1 << 14),
    (1 << 15),
    (1 << 16),
];

fn random_items<TestItem: KeyValuePair>(count: usize) -> Vec<(u64, TestItem)> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| {
            let key = rng.try_next_u64().unwrap();
            let item = TestItem::new(key);
            let hash = item.hash_key();
            (hash, item)
        })
        .collect()
}

fn fill_chained<TestItem: KeyValuePair>(
    hash_and_item: &[(u64, TestItem)],
) -> ChainedHashTable<TestItem> {
    let mut table = ChainedHashTable::<TestItem>::new();
    for (hash, item) in hash_and_item.iter().cloned() {
        match table.entry(hash, |v| v.eq_key(&item)) {
            ChainedEntry::Vacant(entry) => {
                entry.insert(item);
            }
            ChainedEntry::Occupied(_) => unreachable!(),
        }
    }
    table
}

fn fill_hashbrown<TestItem: KeyValuePair>(
    hash_and_item: &[(u64, TestItem)],
) -> HashbrownHashTable<TestItem> {
    let mut table = HashbrownHashTable::<TestItem>::new();
    for (hash, item) in hash_and_item.iter().cloned() {
        match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key()) {
            HashbrownEntry::Vacant(entry) => {
                entry.insert(item);
            }
            HashbrownEntry::Occupied(_) => unreachable!(),
        }
    }
    table
}

fn bench_insert_random<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_random_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut hash_and_item = hash_and_item.clone();
                    hash_and_item.shuffle(&mut SmallRng::from_os_rng());
                    hash_and_item
                },
                |hash_and_item| black_box(fill_chained(&hash_and_item)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut hash_and_item = hash_and_item.clone();
                    hash_and_item.shuffle(&mut SmallRng::from_os_rng());
                    hash_and_item
                },
                |hash_and_item| black_box(fill_hashbrown(&hash_and_item)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_insert_load_factor<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_load_factor_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(*size);

        group.throughput(Throughput::Elements(*size as u64));
        for load_factor in [0.75, 1.0, 3.0] {
            let config = TableConfig::new().with_max_load_factor(load_factor);
            group.bench_function(format!("chain_hash_{load_factor:.02}/{size}"), |b| {
                b.iter_batched(
                    || hash_and_item.clone(),
                    |hash_and_item| {
                        let mut table =
                            ChainedHashTable::<TestItem>::with_config(config).unwrap();
                        for (hash, item) in hash_and_item {
                            if let ChainedEntry::Vacant(entry) =
                                table.entry(hash, |v| v.eq_key(&item))
                            {
                                black_box(entry.insert(item));
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_find_hit_miss<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_hit_miss_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let present = random_items::<TestItem>(*size);
        let mut probes = present.clone();
        probes.extend(random_items::<TestItem>(*size));
        probes.shuffle(&mut SmallRng::from_os_rng());

        let chained = fill_chained(&present);
        let hashbrown = fill_hashbrown(&present);

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for (hash, item) in probes.iter() {
                    black_box(chained.find(*hash, |v| v.eq_key(item)));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for (hash, item) in probes.iter() {
                    black_box(hashbrown.find(*hash, |v| v.eq_key(item)));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<TestItem>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(*size);
        let chained = fill_chained(&hash_and_item);
        let hashbrown = fill_hashbrown(&hash_and_item);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || chained.clone(),
                |mut table| {
                    for (hash, item) in hash_and_item.iter() {
                        black_box(table.remove(*hash, |v| v.eq_key(item)));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || hashbrown.clone(),
                |mut table| {
                    for (hash, item) in hash_and_item.iter() {
                        if let Ok(entry) = table.find_entry(*hash, |v| v.eq_key(item)) {
                            black_box(entry.remove().0);
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "iteration_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(*size);
        let chained = fill_chained(&hash_and_item);
        let hashbrown = fill_hashbrown(&hash_and_item);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for item in chained.iter() {
                    black_box(item);
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for item in hashbrown.iter() {
                    black_box(item);
                }
            })
        });
    }

    group.finish();
}

/// Removes every other entry during a single walk: the chained cursor
/// against hashbrown's `retain`.
fn bench_cursor_remove<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "cursor_remove_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(*size);
        let chained = fill_chained(&hash_and_item);
        let hashbrown = fill_hashbrown(&hash_and_item);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || chained.clone(),
                |mut table| {
                    let mut cursor = table.cursor();
                    let mut keep = false;
                    while cursor.next().is_ok() {
                        if !keep {
                            black_box(cursor.remove().unwrap());
                        }
                        keep = !keep;
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || hashbrown.clone(),
                |mut table| {
                    let mut keep = false;
                    table.retain(|_| {
                        keep = !keep;
                        !keep
                    });
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Insert,
    Remove,
    Find,
}

fn bench_mixed_probabilistic_zipf<TestItem: KeyValuePair, const MAX_SIZE: usize>(
    c: &mut Criterion,
) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "mixed_probabilistic_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<TestItem>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        const KEY_SPACE_MULTIPLIER: u64 = 2;

        for size in SIZES[..=MAX_SIZE].iter() {
            let mut rng = SmallRng::from_os_rng();
            let op_distr = Zipf::new(3.0, exponent).unwrap();

            let operations = (0..size * 3)
                .map(|_| {
                    let op_choice: f64 = rng.sample(op_distr);
                    if op_choice <= 1.0 {
                        Operation::Find
                    } else if op_choice <= 2.0 {
                        Operation::Insert
                    } else {
                        Operation::Remove
                    }
                })
                .collect::<Vec<Operation>>();

            let mut rng = SmallRng::from_os_rng();
            let insert_distr = Zipf::new(*size as f32 - 1.0, 1.0).unwrap();
            let find_remove_distr =
                Zipf::new(*size as f32 * KEY_SPACE_MULTIPLIER as f32 - 1.0, 1.0).unwrap();

            let keyed_operations = operations
                .into_iter()
                .map(|operation| {
                    let key = match operation {
                        Operation::Insert => rng.sample(insert_distr) as u64,
                        Operation::Remove | Operation::Find => {
                            rng.sample(find_remove_distr) as u64
                        }
                    };
                    let item = TestItem::new(key);
                    (operation, item.hash_key(), item)
                })
                .collect::<Vec<(Operation, u64, TestItem)>>();

            group.throughput(Throughput::Elements(*size as u64 * 3));
            group.bench_function(format!("chain_hash/{size}"), |b| {
                b.iter_batched(
                    || keyed_operations.clone(),
                    |operations| {
                        let mut table = ChainedHashTable::<TestItem>::new();
                        for (operation, hash, item) in operations {
                            match operation {
                                Operation::Insert => {
                                    match table.entry(hash, |v| v.eq_key(&item)) {
                                        ChainedEntry::Vacant(entry) => {
                                            black_box(entry.insert(item));
                                        }
                                        ChainedEntry::Occupied(mut occupied) => {
                                            *occupied.get_mut() = item;
                                        }
                                    }
                                }
                                Operation::Remove => {
                                    black_box(table.remove(hash, |v| v.eq_key(&item)));
                                }
                                Operation::Find => {
                                    black_box(table.find(hash, |v| v.eq_key(&item)));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });

            group.bench_function(format!("hashbrown/{size}"), |b| {
                b.iter_batched(
                    || keyed_operations.clone(),
                    |operations| {
                        let mut table = HashbrownHashTable::<TestItem>::new();
                        for (operation, hash, item) in operations {
                            match operation {
                                Operation::Insert => {
                                    match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key())
                                    {
                                        HashbrownEntry::Vacant(entry) => {
                                            black_box(entry.insert(item));
                                        }
                                        HashbrownEntry::Occupied(mut occupied) => {
                                            *occupied.get_mut() = item;
                                        }
                                    }
                                }
                                Operation::Remove => {
                                    if let Ok(entry) = table.find_entry(hash, |v| v.eq_key(&item))
                                    {
                                        black_box(entry.remove().0);
                                    }
                                }
                                Operation::Find => {
                                    black_box(table.find(hash, |v| v.eq_key(&item)));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

fn bench_map_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_put_get_u64");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES.iter() {
        let mut rng = OsRng;
        let keys = (0..*size)
            .map(|_| rng.try_next_u64().unwrap())
            .collect::<Vec<u64>>();

        group.throughput(Throughput::Elements(*size as u64 * 2));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                let mut map = ChainedHashMap::new();
                for &key in keys.iter() {
                    black_box(map.put(key, key));
                }
                for key in keys.iter() {
                    black_box(map.get(key));
                }
                black_box(map)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut map = HashbrownHashMap::new();
                for &key in keys.iter() {
                    black_box(map.insert(key, key));
                }
                for key in keys.iter() {
                    black_box(map.get(key));
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random::<SmallTestItem, 6>,
    bench_insert_random::<TestItem, 6>,
    bench_insert_load_factor::<SmallTestItem, 4>,
    bench_find_hit_miss::<SmallTestItem, 6>,
    bench_find_hit_miss::<TestItem, 6>,
    bench_remove::<SmallTestItem, 6>,
    bench_remove::<TestItem, 6>,
    bench_iteration::<SmallTestItem, 6>,
    bench_iteration::<TestItem, 6>,
    bench_cursor_remove::<SmallTestItem, 6>,
    bench_cursor_remove::<TestItem, 6>,
    bench_mixed_probabilistic_zipf::<SmallTestItem, 6>,
    bench_mixed_probabilistic_zipf::<TestItem, 6>,
    bench_map_put_get,
);

criterion_main!(benches);
