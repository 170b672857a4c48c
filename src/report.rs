use std::time::Duration;

/// Timing and memory record for one sorted batch.
#[derive(Clone, Debug)]
pub struct BatchReport {
    number: usize,
    entries: usize,
    elapsed: Duration,
    resident_kb: Option<u64>,
    peak_tasks: usize,
}

impl BatchReport {
    pub(crate) fn new(
        number: usize,
        entries: usize,
        elapsed: Duration,
        resident_kb: Option<u64>,
        peak_tasks: usize,
    ) -> BatchReport {
        BatchReport {
            number,
            entries,
            elapsed,
            resident_kb,
            peak_tasks,
        }
    }

    /// Get the batch number. Numbering starts at 1.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Get the number of entries sorted in this batch.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Get the wall time spent sorting this batch.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the resident set size sampled right after the batch was sorted,
    /// in kB. None when the platform offers no reading.
    pub fn resident_kb(&self) -> Option<u64> {
        self.resident_kb
    }

    /// Get the peak number of concurrently runnable sort tasks observed
    /// while this batch was sorted. At most 2^parallel_depth for the
    /// comparison sorts and always 1 for radix.
    pub fn peak_tasks(&self) -> usize {
        self.peak_tasks
    }
}

/// Outcome of a batched sort run.
#[derive(Clone, Debug)]
pub struct SortSummary {
    reports: Vec<BatchReport>,
    total_valid: usize,
}

impl SortSummary {
    pub(crate) fn new(reports: Vec<BatchReport>, total_valid: usize) -> SortSummary {
        SortSummary {
            reports,
            total_valid,
        }
    }

    /// Get the per batch reports in processing order.
    pub fn reports(&self) -> &Vec<BatchReport> {
        &self.reports
    }

    /// Get the number of sorted batches.
    pub fn batches(&self) -> usize {
        self.reports.len()
    }

    /// Get the count of input lines that yielded a valid key.
    pub fn total_valid(&self) -> usize {
        self.total_valid
    }

    /// Get the total number of entries sorted across all batches.
    pub fn total_sorted(&self) -> usize {
        self.reports.iter().map(|report| report.entries()).sum()
    }
}
