//! Cache Metrics Demonstration
//!
//! Shows the counters the cache keeps while it works: requests, hits,
//! misses, capacity evictions, and lazy expirations, reported through the
//! `CacheMetrics` interface in deterministic key order.
//!
//! Run with: cargo run --example metrics_demo

use std::thread::sleep;
use std::time::{Duration, Instant};
use ttlru::{CacheMetrics, LruCache};

fn main() {
    println!("Cache Metrics Demonstration");
    println!("===========================\n");

    // Small capacity on purpose, so the workload triggers evictions
    let mut cache = LruCache::new(3).unwrap();

    println!("Workload: insert 5 keys into a capacity-3 cache, read a mix of");
    println!("live, missing, and expired keys.\n");

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);
    cache.put("date", 4); // evicts "apple"
    cache.put("elderberry", 5); // evicts "banana"

    cache.get(&"cherry"); // hit
    cache.get(&"date"); // hit
    cache.get(&"apple"); // miss (evicted)

    // One entry with an already-elapsed deadline: the read both misses and
    // counts an expiration
    cache.put_with_expiry("fig", 6, Instant::now());
    sleep(Duration::from_millis(5));
    cache.get(&"fig");

    print_report(&cache);
}

fn print_report(cache: &impl CacheMetrics) {
    println!("{} metrics:", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("   {:<14} {:.3}", name, value);
    }
}
