use std::sync::atomic::{AtomicUsize, Ordering};

// Tracks how many sort tasks are runnable at once and the high water mark.
// A parent blocked on a join barrier is suspended, not runnable, so it is
// taken out of the live count for the duration of the join.
pub(crate) struct TaskGauge {
    live: AtomicUsize,
    peak: AtomicUsize,
}

impl TaskGauge {
    pub(crate) fn new() -> TaskGauge {
        TaskGauge {
            live: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub(crate) fn task<T>(&self, f: impl FnOnce() -> T) -> T {
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(live, Ordering::SeqCst);
        let result = f();
        self.live.fetch_sub(1, Ordering::SeqCst);
        result
    }

    // Must be called from within a task.
    pub(crate) fn suspend<T>(&self, f: impl FnOnce() -> T) -> T {
        let previous = self.live.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "suspend outside of a running task");
        let result = f();
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(live, Ordering::SeqCst);
        result
    }

    pub(crate) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}
