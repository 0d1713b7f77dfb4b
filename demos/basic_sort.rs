//! Sorts, reverses and searches several containers through the same generic
//! algorithms.
//!
//! Run with: `cargo run --example basic_sort`

use std::collections::BTreeSet;

use cursorkit::prelude::*;

fn main() -> Result<(), ConfigError> {
    // Contiguous storage takes the in-place path.
    let mut scores = vec![72, 95, 61, 88, 95, 40];
    sort(&mut scores, |a, b| a.cmp(b));
    println!("scores sorted:    {scores:?}");
    match binary_search(&scores, &88, |e, t| e.cmp(t)) {
        Some(index) => println!("88 found at:      {index}"),
        None => println!("88 not found"),
    }

    // Linked lists are sorted through scratch copies and written back.
    let mut names: LinkedList<String> = ["mallory", "alice", "trent", "bob"]
        .into_iter()
        .map(String::from)
        .collect();
    SortConfig::seeded(2024)
        .sorter()
        .sort(&mut names, |a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    println!("names by length:  {:?}", map(&names, |n| n.clone()));
    reverse(&mut names);
    println!("names reversed:   {:?}", map(&names, |n| n.clone()));

    // Fixed-stride byte records sort by their raw bytes.
    let mut records = RawBlock::try_from_bytes(b"cabbaaabc".to_vec(), 3)?;
    sort(&mut records, |a: &[u8], b: &[u8]| a.cmp(b));
    println!(
        "records sorted:   {:?}",
        map(&records, |r| String::from_utf8_lossy(r).into_owned())
    );

    let mut text = CharSeq::from("cursor");
    reverse(&mut text);
    println!("text reversed:    {text}");

    // Ordered sets offer basic traversal only.
    let primes: BTreeSet<u32> = [7, 2, 11, 3, 5].into_iter().collect();
    println!(
        "primes: count={} first={:?} last={:?} capabilities={:?}",
        count(&primes),
        first(&primes),
        last(&primes),
        <BTreeSet<u32> as Traversal>::CAPABILITIES
    );
    let caps = <BTreeSet<u32> as Traversal>::CAPABILITIES;
    if let Err(violation) = caps.require_random_access("binary_search") {
        println!("as expected:      {violation}");
    }

    Ok(())
}
