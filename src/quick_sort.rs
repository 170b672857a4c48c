use crate::task_gauge::TaskGauge;

// Recursive quicksort with the same depth gated forking as the merge sort.
// The partition is Lomuto with a fixed last element pivot, so presorted and
// reverse sorted batches degrade to quadratic time.
pub(crate) fn sort(keys: &mut [u32], parallel_depth: u32, gauge: &TaskGauge) {
    sort_range(keys, 0, parallel_depth, gauge);
}

fn sort_range(keys: &mut [u32], depth: u32, parallel_depth: u32, gauge: &TaskGauge) {
    if keys.len() <= 1 {
        return;
    }
    let pivot = partition(keys);
    let (left, rest) = keys.split_at_mut(pivot);
    // rest[0] is the pivot, already in its final position
    let right = &mut rest[1..];
    if depth < parallel_depth {
        gauge.suspend(|| {
            rayon::join(
                || gauge.task(|| sort_range(left, depth + 1, parallel_depth, gauge)),
                || gauge.task(|| sort_range(right, depth + 1, parallel_depth, gauge)),
            )
        });
    } else {
        sort_range(left, depth + 1, parallel_depth, gauge);
        sort_range(right, depth + 1, parallel_depth, gauge);
    }
}

// Lomuto partition around the last element. On return everything below the
// returned index is smaller than the pivot and everything above it is not.
fn partition(keys: &mut [u32]) -> usize {
    let high = keys.len() - 1;
    let pivot = keys[high];
    let mut next = 0;
    for current in 0..high {
        if keys[current] < pivot {
            keys.swap(next, current);
            next += 1;
        }
    }
    keys.swap(next, high);
    next
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::quick_sort::{partition, sort};
    use crate::task_gauge::TaskGauge;

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
        let gauge = TaskGauge::new();
        gauge.task(|| sort(&mut keys, 3, &gauge));
        assert!(keys.is_sorted());
        assert_eq!(histogram(&keys), before);
    }

    #[test]
    fn test_all_equal_keys() {
        let mut keys = vec![4; 1000];
        let gauge = TaskGauge::new();
        gauge.task(|| sort(&mut keys, 2, &gauge));
        assert_eq!(keys, vec![4; 1000]);
    }

    #[test]
    fn test_reverse_sorted_keys() {
        let mut keys: Vec<u32> = (0..2000).rev().collect();
        let gauge = TaskGauge::new();
        gauge.task(|| sort(&mut keys, 3, &gauge));
        assert!(keys.is_sorted());
    }

    #[test]
    fn test_already_sorted_input_is_unchanged() {
        let mut keys: Vec<u32> = (0..1000).collect();
        let gauge = TaskGauge::new();
        gauge.task(|| sort(&mut keys, 3, &gauge));
        assert_eq!(keys, (0..1000).collect::<Vec<u32>>());
    }

    #[test]
    fn test_live_tasks_stay_under_the_depth_bound() {
        let mut keys: Vec<u32> = (0..1_000_000).map(|_| rand::random()).collect();
        let gauge = TaskGauge::new();
        gauge.task(|| sort(&mut keys, 3, &gauge));
        assert!(keys.is_sorted());
        assert!(gauge.peak() <= 8, "peak {} exceeds 2^3", gauge.peak());
    }

    #[test]
    fn test_empty_and_single_key() {
        let gauge = TaskGauge::new();
        let mut empty: Vec<u32> = vec![];
        sort(&mut empty, 3, &gauge);
        assert!(empty.is_empty());

        let mut single = vec![9];
        sort(&mut single, 3, &gauge);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_partition_places_the_pivot() {
        let mut keys = vec![7, 2, 9, 4, 5];
        let position = partition(&mut keys);
        assert_eq!(keys[position], 5);
        for key in &keys[..position] {
            assert!(*key < 5);
        }
        for key in &keys[position + 1..] {
            assert!(*key >= 5);
        }
    }

    #[test]
    fn test_partition_with_pivot_already_largest() {
        let mut keys = vec![3, 1, 2, 8];
        let position = partition(&mut keys);
        assert_eq!(position, 3);
        assert_eq!(keys, vec![3, 1, 2, 8]);
    }
}
