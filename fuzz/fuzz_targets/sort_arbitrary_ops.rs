#![no_main]

use libfuzzer_sys::fuzz_target;
use cursorkit::algo::search::{NOT_FOUND, binary_search_index};
use cursorkit::algo::sort::{SortConfig, check_sorted, partition_3_way};
use cursorkit::ds::{CharSeq, RawBlock};

// Fuzz arbitrary sort / partition / search sequences on contiguous containers
//
// Byte 0 picks the container, bytes 1..9 seed the pivot generator, the rest
// is element data. Every path must leave a sorted permutation behind.
fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    let selector = data[0] % 4;
    let seed = u64::from_le_bytes([
        data[1], data[2], data[3], data[4], data[5], data[6], data[7], data[8],
    ]);
    let payload = &data[9..];

    match selector {
        0 => sort_vec(payload, seed),
        1 => sort_char_seq(payload, seed),
        2 => sort_raw_block(payload, seed),
        3 => partition_vec(payload, seed),
        _ => unreachable!(),
    }
});

fn sort_vec(payload: &[u8], seed: u64) {
    let mut values: Vec<i16> = payload
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let mut expected = values.clone();
    expected.sort();

    SortConfig::seeded(seed).sorter().sort(&mut values, |a, b| a.cmp(b));
    assert_eq!(values, expected);

    for probe in payload.iter().map(|&b| i16::from(b)) {
        let index = binary_search_index(&values, &probe, |e, t| e.cmp(t));
        if index == NOT_FOUND {
            assert!(!values.contains(&probe));
        } else {
            assert_eq!(values[index], probe);
        }
    }
}

fn sort_char_seq(payload: &[u8], seed: u64) {
    let mut text = CharSeq::from(payload.to_vec());
    SortConfig::seeded(seed).sorter().sort(&mut text, |a, b| a.cmp(b));

    let mut expected = payload.to_vec();
    expected.sort_unstable();
    assert_eq!(text.as_bytes(), expected.as_slice());
}

fn sort_raw_block(payload: &[u8], seed: u64) {
    let stride = usize::from(payload[0] % 7) + 1;
    let body = &payload[1..];
    let usable = body.len() - body.len() % stride;
    let Ok(mut block) = RawBlock::try_from_bytes(body[..usable].to_vec(), stride) else {
        return;
    };

    let mut expected: Vec<&[u8]> = body[..usable].chunks_exact(stride).collect();
    expected.sort_unstable();
    let expected: Vec<u8> = expected.concat();

    SortConfig::seeded(seed)
        .sorter()
        .sort(&mut block, |a: &[u8], b: &[u8]| a.cmp(b));
    assert!(check_sorted(&block, |a: &[u8], b: &[u8]| a.cmp(b)).is_ok());
    assert_eq!(block.as_bytes(), expected.as_slice());
}

fn partition_vec(payload: &[u8], seed: u64) {
    if payload.is_empty() {
        return;
    }
    let mut values = payload.to_vec();
    let end = values.len() - 1;
    let pivot_pos = (seed as usize) % values.len();
    let pivot = values[pivot_pos];

    let partition = partition_3_way(&mut values, 0, end, pivot_pos, |a, b| a.cmp(b));
    let equal_start = partition.less_end.map_or(0, |i| i + 1);
    assert!(equal_start < partition.greater_start);
    for (i, &x) in values.iter().enumerate() {
        if i < equal_start {
            assert!(x < pivot);
        } else if i < partition.greater_start {
            assert_eq!(x, pivot);
        } else {
            assert!(x > pivot);
        }
    }
}
