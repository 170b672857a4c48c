//! This crate implements a bounded memory, batched sort for one numeric field of
//! very large delimited text files. For example CSV or TSV.
//!
//! Lines are read one at a time, a single integer field is extracted from each
//! line and accumulated into a fixed capacity batch, and every full batch is
//! sorted in place before the next line is read. Example for such files are
//! [CSV](https://www.rfc-editor.org/rfc/rfc4180) and
//! [GTFS](https://gtfs.org/schedule/reference/) data files, where a multi
//! gigabyte `stop_times.txt` can be processed while holding only one batch of
//! keys in memory. The motivation for writing this module was measuring sort
//! algorithm behavior on transit schedule dumps with hundreds of millions of
//! rows without ever loading a full file.
//!
//! Three algorithms are provided: a parallel merge sort, a parallel quicksort
//! and a sequential radix sort. The parallel variants fork their recursion
//! into tasks on a thread pool down to a configurable depth, which bounds the
//! number of concurrently runnable tasks while still engaging multiple CPU
//! cores. Each sorted batch is reported with its wall time, resident memory
//! reading and the peak task count observed during the sort.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use batch_key_sort::algorithm::Algorithm;
//! use batch_key_sort::sort::BatchSort;
//!
//! // optimized for use with Jemalloc
//! use tikv_jemallocator::Jemalloc;
//! #[global_allocator]
//! static GLOBAL: Jemalloc = Jemalloc;
//!
//! // batched parallel sort of GTFS departure times
//! fn sort_departure_times(input: PathBuf) -> Result<(), anyhow::Error> {
//!     let mut batch_sort = BatchSort::new(input);
//!
//!     // set number of CPU cores the sort will attempt to use. When given the number that exceeds
//!     // the number of available CPU cores the work will be split among available cores with
//!     // somewhat degraded performance. The default is to use all available cores.
//!     batch_sort.with_tasks(2);
//!
//!     // sort one million keys at a time
//!     batch_sort.with_batch_capacity(1_000_000);
//!
//!     batch_sort.with_algorithm(Algorithm::Merge);
//!
//!     let summary = batch_sort.sort()?;
//!     log::info!("sorted {} entries in {} batches", summary.total_sorted(), summary.batches());
//!     Ok(())
//! }
//! ```
//!

pub(crate) mod batch;
pub(crate) mod config;
pub(crate) mod extract;
pub(crate) mod memory;
pub(crate) mod merge_sort;
pub(crate) mod quick_sort;
pub(crate) mod radix_sort;
pub(crate) mod task_gauge;

pub mod sort;
pub mod algorithm;
pub mod report;
