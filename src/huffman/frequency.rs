use core::hash::Hash;
use std::collections::HashMap;

/// Counts how often each symbol occurs, listing symbols in the order they were first seen.
pub fn count_symbols<S, I>(symbols: I) -> Vec<(S, u64)>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
{
    let mut index: HashMap<S, usize> = HashMap::new();
    let mut counts: Vec<(S, u64)> = vec![];
    for symbol in symbols {
        match index.get(&symbol) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(symbol.clone(), counts.len());
                counts.push((symbol, 1));
            }
        }
    }
    counts
}

/// Histogram over every byte value, 0 through 255 in order, including values that never occur.
pub fn byte_histogram(data: &[u8]) -> Vec<(u8, u64)> {
    let mut freq = [0u64; 256];
    for &byte in data {
        freq[byte as usize] += 1;
    }
    (0..=u8::MAX).zip(freq).collect()
}

/// Shannon entropy of a frequency distribution in bits per symbol. Zero counts contribute
/// nothing; an all-zero distribution has entropy 0.
pub fn entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = u64>,
{
    let counts: Vec<u64> = counts.into_iter().filter(|&c| c > 0).collect();
    let total: f64 = counts.iter().map(|&c| c as f64).sum();
    if total == 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_keep_first_seen_order() {
        let counts = count_symbols("abracadabra".chars());
        assert_eq!(counts, vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]);
    }

    #[test]
    fn counts_of_nothing() {
        let counts = count_symbols(Vec::<u8>::new());
        assert!(counts.is_empty());
    }

    #[test]
    fn histogram_covers_all_bytes() {
        let hist = byte_histogram(b"aab\xff");
        assert_eq!(hist.len(), 256);
        assert_eq!(hist[0], (0, 0));
        assert_eq!(hist[b'a' as usize], (b'a', 2));
        assert_eq!(hist[b'b' as usize], (b'b', 1));
        assert_eq!(hist[255], (255, 1));
        assert_eq!(hist.iter().map(|&(_, c)| c).sum::<u64>(), 4);
    }

    #[test]
    fn entropy_of_simple_distributions() {
        assert_eq!(entropy([0, 0]), 0.0);
        assert_eq!(entropy([9]), 0.0);
        assert!((entropy([1, 1]) - 1.0).abs() < 1e-12);
        assert!((entropy([1, 1, 1, 1, 0]) - 2.0).abs() < 1e-12);
        assert!((entropy([1, 1, 2, 4]) - 1.75).abs() < 1e-12);
    }
}
