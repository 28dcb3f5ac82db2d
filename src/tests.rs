use voxell_rng::rng::XorShift128;

use crate::config::{CoderConfig, SingleSymbolCode};
use crate::huffman::{CodeTable, build_tree, byte_histogram, count_symbols};

const SHORT_DATA: &[u8] = b"Hello, World!";
const LONG_DATA: &[u8] =
    b"This is a longer string to test the huffman coding tables. It should be able to handle various lengths and characters.";
const RNG_DATA: &[u8] = &const {
    let mut arr = [0u8; 1000];
    let mut rng = XorShift128::new(0xdeadcafe);
    let mut i = 0;
    while i < 1000 {
        let data = rng.peek_next_u64();
        arr[i] = (data & 0xFF) as u8;
        rng = XorShift128::new(data);
        i += 1;
    }
    arr
};
const REPEATING_DATA: &[u8] = b"a baba da babble da dabble babble doo bee babble dabble dooble dee boo dooble daddle boo";
const SINGLE_BYTE_DATA: &[u8] = b"zzzzzzzzzzzzzzzz";
const EMPTY_DATA: &[u8] = &[];

pub const TEST_CASES: &[(&[u8], &str)] = &[
    (REPEATING_DATA, "repeating data"),
    (SHORT_DATA, "short data"),
    (LONG_DATA, "long data"),
    (RNG_DATA, "rng data"),
    (SINGLE_BYTE_DATA, "single byte data"),
    (EMPTY_DATA, "empty data"),
];

/// Codes every test case with a table built from its full byte histogram, decodes the result
/// and checks that the original bytes come back.
pub fn roundtrip_test(config: CoderConfig) {
    for &(test_case, test_name) in TEST_CASES {
        let histogram = byte_histogram(test_case);
        let result = build_tree(histogram.iter().copied())
            .and_then(|tree| CodeTable::from_tree_with(&tree, &config))
            .and_then(|table| {
                let bits = table.encode(test_case)?;
                let decoded = table.decode(&bits)?;
                Ok((table, bits, decoded))
            });

        match result {
            Ok((table, bits, decoded)) => {
                eprintln!(
                    "Bits per symbol for {} with {:?}: {:.3}",
                    test_name,
                    config,
                    bits_per_symbol(test_case.len(), bits.len())
                );

                assert!(table.is_prefix_free(), "Code table for {} is not prefix free", test_name);
                assert_eq!(
                    decoded, test_case,
                    "Roundtrip test failed at {}:\n\tExpected: {:?}\n\tGot: {:?}\n\tEncoded: {}",
                    test_name, test_case, decoded, bits,
                );
            }
            Err(e) => {
                panic!("Fatal error while trying to code {} with {:?}: {}", test_name, config, e);
            }
        }
    }
}

pub fn bits_per_symbol(symbols: usize, bits: usize) -> f64 {
    if symbols == 0 {
        return 0.0;
    }
    bits as f64 / symbols as f64
}

#[test]
fn roundtrip_default_config() {
    roundtrip_test(CoderConfig::default());
}

#[test]
fn roundtrip_with_flipped_bits_and_single_bit_codes() {
    let config = CoderConfig {
        heavier_bit: crate::config::HeavierBit::Zero,
        single_symbol: SingleSymbolCode::SingleBit,
    };
    roundtrip_test(config);
}

#[test]
fn roundtrip_over_observed_symbols_only() {
    let config = CoderConfig::default().with_single_symbol(SingleSymbolCode::SingleBit);
    for &(test_case, test_name) in TEST_CASES.iter().filter(|(data, _)| !data.is_empty()) {
        let tree = build_tree(count_symbols(test_case.iter().copied())).unwrap();
        let table = CodeTable::from_tree_with(&tree, &config).unwrap();
        let bits = table.encode(test_case).unwrap();
        assert_eq!(table.decode(&bits).unwrap(), test_case, "{}", test_name);
        if table.len() == 1 {
            assert_eq!(bits.len(), test_case.len(), "{}", test_name);
        } else {
            assert_eq!(bits.len() as u128, tree.weighted_path_length(), "{}", test_name);
        }
    }
}

#[test]
fn huffman_beats_fixed_width_on_skewed_text() {
    let tree = build_tree(count_symbols(REPEATING_DATA.iter().copied())).unwrap();
    let table = CodeTable::from_tree(&tree).unwrap();
    let bits = table.encode(REPEATING_DATA).unwrap();
    assert!(bits_per_symbol(REPEATING_DATA.len(), bits.len()) < 4.0);
}
