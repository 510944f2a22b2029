//! Concurrent Cache Usage Examples
//!
//! This example demonstrates multi-threaded usage patterns for the
//! mutex-guarded cache wrapper.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use ttlru::ConcurrentLruCache;

fn main() {
    println!("Concurrent Cache Usage Examples");
    println!("================================\n");

    basic_concurrent_usage();
    println!();

    zero_copy_get_with();
    println!();

    session_expiry();
}

/// Basic multi-threaded cache usage
fn basic_concurrent_usage() {
    println!("1. Basic Concurrent Usage");
    println!("   -----------------------");

    let cache = Arc::new(ConcurrentLruCache::new(1000).unwrap());

    // Spawn multiple threads that read and write concurrently
    let num_threads = 4;
    let ops_per_thread = 1000;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("thread{}-key{}", thread_id, i);
                    let value = thread_id * 10000 + i;

                    // Write
                    cache.put(key.clone(), value);

                    // Read
                    if let Some(v) = cache.get(&key) {
                        assert_eq!(v, value);
                    }
                }
            })
        })
        .collect();

    // Wait for all threads to complete
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    println!(
        "   Completed {} operations across {} threads",
        num_threads * ops_per_thread * 2, // 2 ops per iteration (put + get)
        num_threads
    );
    println!("   Final cache size: {} items", cache.len());
}

/// Zero-copy access pattern using get_with()
fn zero_copy_get_with() {
    println!("2. Zero-Copy Access with get_with()");
    println!("   ----------------------------------");

    let cache: ConcurrentLruCache<String, Vec<u8>> = ConcurrentLruCache::new(100).unwrap();

    // Store a large value
    let large_data = vec![1u8; 1024]; // 1KB of data
    cache.put("large_key".to_string(), large_data);

    // Process the value without cloning using get_with()
    let sum: Option<u64> = cache.get_with(&"large_key".to_string(), |data| {
        data.iter().map(|&x| x as u64).sum()
    });

    println!("   Stored 1KB of data in cache");
    println!(
        "   Computed sum without cloning: {}",
        sum.unwrap_or_default()
    );

    // Compare: get() would clone the entire 1KB vector
    let _cloned_data = cache.get(&"large_key".to_string());
    println!("   get() returns a clone - use get_with() to avoid cloning");
}

/// Entries with deadlines disappear on the read that finds them stale
fn session_expiry() {
    println!("3. Per-Entry Expiration");
    println!("   ---------------------");

    let sessions: ConcurrentLruCache<String, String> = ConcurrentLruCache::new(1000).unwrap();

    sessions.put_with_expiry(
        "sid-1".to_string(),
        "alice".to_string(),
        Instant::now() + Duration::from_millis(50),
    );
    sessions.put("sid-2".to_string(), "bob".to_string());

    println!(
        "   sid-1 before deadline: {:?}",
        sessions.get(&"sid-1".to_string())
    );

    thread::sleep(Duration::from_millis(60));

    // The stale session is removed by this read
    println!(
        "   sid-1 after deadline:  {:?}",
        sessions.get(&"sid-1".to_string())
    );
    println!(
        "   sid-2 (no deadline):   {:?}",
        sessions.get(&"sid-2".to_string())
    );
    println!("   Cache size after expiry: {} items", sessions.len());
}
