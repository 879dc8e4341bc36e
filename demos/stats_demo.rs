use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use chain_hash::HashTable;
use chain_hash::TableConfig;
use chain_hash::hash_table::Entry;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: u64,

    #[arg(short = 'c', long = "initial_capacity", default_value_t = 101)]
    initial_capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = 3.0)]
    load_factor: f64,
}

fn hash_u64(value: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn main() {
    let args = Args::parse();

    let config = TableConfig::new()
        .with_initial_capacity(args.initial_capacity)
        .with_max_load_factor(args.load_factor);
    let mut table: HashTable<u64> = match HashTable::with_config(config) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    println!(
        "Filling table of {} slots (load factor {:.2}) with {} u64 values...",
        table.capacity(),
        args.load_factor,
        args.entries
    );

    let mut rehashes = 0;
    for value in 0..args.entries {
        let before = table.capacity();
        match table.entry(hash_u64(value), |&v| v == value) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(_) => {
                panic!("Value already exists in table: {}", value);
            }
        }
        if table.capacity() != before {
            rehashes += 1;
        }
    }

    println!(
        "Inserted {} values; {} rehashes, final capacity {}",
        table.len(),
        rehashes,
        table.capacity()
    );

    table.print_chain_histogram();
    table.debug_stats().print();

    let mut removed = 0;
    let mut cursor = table.cursor();
    while let Ok(&mut value) = cursor.next() {
        if value % 3 == 0 && cursor.remove().is_ok() {
            removed += 1;
        }
    }
    println!(
        "Removed {} multiples of three through the cursor; {} values remain",
        removed,
        table.len()
    );
    table.debug_stats().print();
}
