#![no_main]

use libfuzzer_sys::fuzz_target;
use cursorkit::algo::traversal::{for_each_reverse, map, reverse};
use cursorkit::ds::{CharSeq, LinkedList};

// Fuzz reverse on every bidirectional cloning container
//
// Reversing twice restores the input; reversing once matches a backward walk.
fuzz_target!(|data: &[u8]| {
    let mut backward = Vec::with_capacity(data.len());
    let original: LinkedList<u8> = data.iter().copied().collect();
    for_each_reverse(&original, |x| backward.push(*x));

    let mut list = original;
    reverse(&mut list);
    assert_eq!(map(&list, |x| *x), backward);
    reverse(&mut list);
    assert_eq!(map(&list, |x| *x), data);

    let mut text = CharSeq::from(data.to_vec());
    reverse(&mut text);
    assert_eq!(text.as_bytes(), backward.as_slice());
    reverse(&mut text);
    assert_eq!(text.as_bytes(), data);

    let mut v = data.to_vec();
    reverse(v.as_mut_slice());
    assert_eq!(v, backward);
});
