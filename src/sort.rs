use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context};
use regex::Regex;

use crate::algorithm::Algorithm;
use crate::batch::{Batch, Offer};
use crate::config::Config;
use crate::extract;
use crate::memory;
use crate::merge_sort;
use crate::quick_sort;
use crate::radix_sort;
use crate::report::{BatchReport, SortSummary};
use crate::task_gauge::TaskGauge;

/// Sort one numeric field of a delimited text file in fixed capacity batches
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use batch_key_sort::sort::BatchSort;
///
/// // sort the departure time field in batches of one million keys
/// fn sort_departures(input: PathBuf) -> Result<(), anyhow::Error> {
///     let mut batch_sort = BatchSort::new(input);
///     // set the number of CPU cores the sort will use for each batch. The
///     // default of zero uses all available cores.
///     batch_sort.with_tasks(2);
///     let summary = batch_sort.sort()?;
///     for report in summary.reports() {
///         println!("batch {}: {} entries", report.number(), report.entries());
///     }
///     Ok(())
/// }
/// ```
pub struct BatchSort {
    input: PathBuf,
    algorithm: Algorithm,
    batch_capacity: usize,
    max_batches: Option<usize>,
    tasks: usize,
    parallel_depth: u32,
    field_separator: char,
    field_index: usize,
    header: bool,
    ignore_lines: Option<Regex>,
}

impl BatchSort {
    /// Create a default BatchSort definition.
    ///
    /// * the default algorithm is merge sort
    /// * the default batch capacity is 1,000,000 keys
    /// * all batches are sorted, there is no batch cap
    /// * the default field separator is a comma
    /// * the key is taken from field 5, the sixth field of the line
    /// * the first line is treated as a header and skipped
    /// * no lines are ignored by pattern
    ///
    /// The batch buffer is allocated once at full capacity and reused for
    /// every batch, so peak memory stays flat however large the input is.
    pub fn new(input: PathBuf) -> BatchSort {
        BatchSort {
            input,
            algorithm: Algorithm::Merge,
            batch_capacity: 1_000_000,
            max_batches: None,
            tasks: 0,
            parallel_depth: 3,
            field_separator: ',',
            field_index: 5,
            header: true,
            ignore_lines: None,
        }
    }

    /// Set the sorting algorithm. The default is [Algorithm::Merge]
    pub fn with_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Set the number of keys accumulated before a batch is sorted.
    /// The default is 1,000,000
    pub fn with_batch_capacity(&mut self, batch_capacity: usize) {
        self.batch_capacity = batch_capacity;
    }

    /// Stop after sorting `max_batches` batches even when input remains.
    /// Input past the cap is not read and a cap of zero sorts nothing
    pub fn with_max_batches(&mut self, max_batches: usize) {
        self.max_batches = Some(max_batches);
    }

    /// Set the number of tasks. The default is zero which will result in using all system cores
    pub fn with_tasks(&mut self, tasks: usize) {
        self.tasks = tasks;
    }

    /// Set the recursion depth below which merge sort and quicksort fork
    /// their halves into parallel tasks. The default is 3, which caps the
    /// number of concurrently runnable tasks at 8
    pub fn with_parallel_depth(&mut self, parallel_depth: u32) {
        self.parallel_depth = parallel_depth;
    }

    /// Set the field separator. The default is ','
    pub fn with_field_separator(&mut self, field_separator: char) {
        self.field_separator = field_separator
    }

    /// Set the zero based index of the key field. The default is 5
    pub fn with_field_index(&mut self, field_index: usize) {
        self.field_index = field_index;
    }

    /// Treat the first line as data instead of a header
    pub fn with_header(&mut self, header: bool) {
        self.header = header;
    }

    /// Specify which lines to ignore. Each line matching the regex is skipped
    /// without being offered to the extractor.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r)
    }

    /// Read the input, accumulate keys into batches and sort each batch as it
    /// fills, with one final sort for a partially filled batch at end of
    /// input. Returns a report per sorted batch and the total count of lines
    /// that yielded a valid key.
    pub fn sort(&self) -> Result<SortSummary, anyhow::Error> {
        if self.batch_capacity == 0 {
            return Err(anyhow!("batch capacity must be at least 1"));
        }
        let config = self.create_config();
        log::info!(
            "Start batched {} sort, batch capacity: {}, tasks: {}",
            config.algorithm(),
            config.batch_capacity(),
            config.tasks()
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.tasks())
            .thread_name(|index| format!("sorting-{}", index))
            .build()
            .with_context(|| "Failed to build the sorting thread pool")?;

        let file = File::open(&self.input)
            .with_context(|| anyhow!("Failed to open input file: {}", self.input.to_string_lossy()))?;
        let mut reader = BufReader::new(file);
        let mut line = String::new();

        if config.header() && reader.read_line(&mut line)? == 0 {
            return Err(anyhow!("Empty input, expected a header line: {}", self.input.to_string_lossy()));
        }
        line.clear();

        let mut batch = Batch::new(config.batch_capacity());
        let mut reports: Vec<BatchReport> = Vec::new();
        let mut total_valid: usize = 0;

        while !Self::reached_batch_cap(&config, reports.len()) && reader.read_line(&mut line)? != 0 {
            let skip = config.ignore_lines().as_ref().map_or(false, |r| r.is_match(line.trim()));
            if !skip {
                if let Some(key) = extract::extract_key(&line, config.field_separator(), config.field_index()) {
                    total_valid += 1;
                    match batch.offer(key) {
                        Offer::Accepted => {}
                        Offer::Full => {
                            let report = Self::sort_batch(&pool, &config, reports.len() + 1, batch.keys_mut());
                            log::info!(
                                "Batch #{}: sorted {} entries in {:.6} seconds",
                                report.number(),
                                report.entries(),
                                report.elapsed().as_secs_f64()
                            );
                            Self::log_memory(&report);
                            batch.clear();
                            reports.push(report);
                        }
                        Offer::Rejected => {
                            // cannot happen, a full batch is flushed above
                            return Err(anyhow!("Batch at capacity was not flushed before the next key"));
                        }
                    }
                }
            }
            line.clear();
        }

        if !batch.is_empty() && !Self::reached_batch_cap(&config, reports.len()) {
            let report = Self::sort_batch(&pool, &config, reports.len() + 1, batch.keys_mut());
            log::info!(
                "Final batch #{}: sorted {} entries in {:.6} seconds",
                report.number(),
                report.entries(),
                report.elapsed().as_secs_f64()
            );
            Self::log_memory(&report);
            batch.clear();
            reports.push(report);
        }

        log::info!("Total valid lines processed: {}", total_valid);
        Ok(SortSummary::new(reports, total_valid))
    }

    // Sort one batch on the pool and collect its timing, memory and task
    // gauge readings. The driver wraps the dispatch in the root task so the
    // gauge counts the whole recursion tree.
    fn sort_batch(pool: &rayon::ThreadPool, config: &Config, number: usize, keys: &mut [u32]) -> BatchReport {
        if config.algorithm() == Algorithm::Quicksort && keys.is_sorted() {
            // diagnostic only, the sort still runs on its worst case input
            log::info!("Batch #{} was already sorted", number);
        }
        let gauge = TaskGauge::new();
        let entries = keys.len();
        let start = Instant::now();
        pool.install(|| {
            gauge.task(|| {
                match config.algorithm() {
                    Algorithm::Merge => merge_sort::sort(keys, config.parallel_depth(), &gauge),
                    Algorithm::Quicksort => quick_sort::sort(keys, config.parallel_depth(), &gauge),
                    Algorithm::Radix => radix_sort::sort(keys),
                }
            })
        });
        let elapsed = start.elapsed();
        BatchReport::new(number, entries, elapsed, memory::resident_kb(), gauge.peak())
    }

    fn log_memory(report: &BatchReport) {
        if let Some(resident_kb) = report.resident_kb() {
            log::info!("RAM usage: {} kB", resident_kb);
        }
    }

    fn reached_batch_cap(config: &Config, sorted: usize) -> bool {
        match config.max_batches() {
            Some(max_batches) => sorted >= max_batches,
            None => false,
        }
    }

    fn create_config(&self) -> Config {
        let mut tasks = self.tasks;
        if self.tasks == 0 {
            tasks = num_cpus::get();
        }

        let config = Config::new(
            self.algorithm,
            self.batch_capacity,
            self.max_batches,
            tasks,
            self.parallel_depth,
            self.field_separator,
            self.field_index,
            self.header,
            self.ignore_lines.clone(),
        );
        config
    }
}
