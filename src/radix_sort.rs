// Least significant digit radix sort over decimal digits. Sequential by
// construction, one counting pass per digit of the largest key.
pub(crate) fn sort(keys: &mut [u32]) {
    if keys.len() <= 1 {
        return;
    }
    let max = u64::from(*keys.iter().max().unwrap());
    let mut output = vec![0u32; keys.len()];
    // exp walks 1, 10, 100, ... and is u64 so the step past the highest
    // decimal place of u32::MAX cannot overflow
    let mut exp: u64 = 1;
    while max / exp > 0 {
        count_pass(keys, &mut output, exp);
        keys.copy_from_slice(&output);
        exp *= 10;
    }
}

// One stable counting pass over the digit at place `exp`. The input is
// scanned back to front so keys with an equal digit keep the relative order
// established by the previous pass.
fn count_pass(keys: &[u32], output: &mut [u32], exp: u64) {
    let mut count = [0usize; 10];
    for key in keys {
        count[digit(*key, exp)] += 1;
    }
    for place in 1..10 {
        count[place] += count[place - 1];
    }
    for key in keys.iter().rev() {
        let place = digit(*key, exp);
        count[place] -= 1;
        output[count[place]] = *key;
    }
}

fn digit(key: u32, exp: u64) -> usize {
    ((u64::from(key) / exp) % 10) as usize
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::radix_sort::{count_pass, sort};

    fn histogram(keys: &[u32]) -> HashMap<u32, usize> {
        let mut result = HashMap::new();
        for key in keys {
            *result.entry(*key).or_insert(0usize) += 1;
        }
        result
    }

    #[test]
    fn test_sorts_random_keys() {
        let mut keys: Vec<u32> = (0..10_000).map(|_| rand::random::<u32>() % 86_400).collect();
        let before = histogram(&keys);
        sort(&mut keys);
        assert!(keys.is_sorted());
        assert_eq!(histogram(&keys), before);
    }

    #[test]
    fn test_sorts_keys_of_uneven_digit_counts() {
        let mut keys = vec![802, 2, 24, 45, 75, 66, 170, 90];
        sort(&mut keys);
        assert_eq!(keys, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_handles_duplicates_and_zero() {
        let mut keys = vec![5, 0, 5, 0, 5];
        sort(&mut keys);
        assert_eq!(keys, vec![0, 0, 5, 5, 5]);
    }

    #[test]
    fn test_empty_and_single_key() {
        let mut empty: Vec<u32> = vec![];
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_full_u32_range() {
        let mut keys = vec![u32::MAX, 0, 1_000_000_000, u32::MAX - 1, 1];
        sort(&mut keys);
        assert_eq!(keys, vec![0, 1, 1_000_000_000, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_counting_pass_is_stable() {
        // equal tens digits, distinguishable by the ones digit already in order
        let keys = vec![31, 11, 32, 12, 33];
        let mut output = vec![0u32; keys.len()];
        count_pass(&keys, &mut output, 10);
        assert_eq!(output, vec![11, 12, 31, 32, 33]);
    }

    #[test]
    fn test_already_sorted_input_is_unchanged() {
        let mut keys: Vec<u32> = (0..1000).collect();
        sort(&mut keys);
        assert_eq!(keys, (0..1000).collect::<Vec<u32>>());
    }
}
