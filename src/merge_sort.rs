use crate::task_gauge::TaskGauge;

// Recursive merge sort. Halves fork into rayon tasks while the recursion is
// shallower than `parallel_depth`; below the gate the recursion is plain
// sequential calls on the same thread.
pub(crate) fn sort(keys: &mut [u32], parallel_depth: u32, gauge: &TaskGauge) {
    sort_range(keys, 0, parallel_depth, gauge);
}

fn sort_range(keys: &mut [u32], depth: u32, parallel_depth: u32, gauge: &TaskGauge) {
    if keys.len() <= 1 {
        return;
    }
    let middle = keys.len() / 2;
    {
        let (left, right) = keys.split_at_mut(middle);
        if depth < parallel_depth {
            // the parent contributes no work while blocked on the join
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
    merge(keys, middle);
}

// Merge the sorted runs keys[..middle] and keys[middle..] back into keys.
// Ties take the left run's head first.
fn merge(keys: &mut [u32], middle: usize) {
    let left = keys[..middle].to_vec();
    let right = keys[middle..].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            keys[k] = left[i];
            i += 1;
        } else {
            keys[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        keys[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        keys[k] = right[j];
        j += 1;
        k += 1;
    }
}
