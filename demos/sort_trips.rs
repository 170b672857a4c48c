use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::Error;
use simple_logger::SimpleLogger;
use batch_key_sort::algorithm::Algorithm;
use batch_key_sort::sort::BatchSort;

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn write_trips(path: &Path, lines: usize) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "route_id,service_id,trip_id,trip_headsign,direction_id,departure_time")?;
    for i in 0..lines {
        let time = rand::random::<u32>() % 86_400;
        writeln!(writer, "r{},weekday,t{},Downtown,0,{}", i % 7, i, time)?;
    }
    Ok(())
}

fn sort_with(input_path: &Path, algorithm: Algorithm) -> Result<(), Error> {
    let mut batch_sort = BatchSort::new(input_path.to_path_buf());
    batch_sort.with_algorithm(algorithm);
    batch_sort.with_batch_capacity(100_000);
    batch_sort.with_tasks(4);
    let summary = batch_sort.sort()?;
    log::info!("{}: {} entries in {} batches", algorithm, summary.total_sorted(), summary.batches());
    Ok(())
}

// cargo run -r --example sort_trips -- [trips.csv] [merge|quicksort|radix]
pub fn main() -> Result<(), Error> {
    SimpleLogger::new().init()?;
    let mut args = std::env::args().skip(1);

    let input_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            // no input given, generate a synthetic trips file
            let path = PathBuf::from("./target/trips-350000.csv");
            write_trips(&path, 350_000)?;
            path
        }
    };

    match args.next() {
        Some(name) => {
            sort_with(&input_path, Algorithm::from_str(&name)?)?;
        }
        None => {
            sort_with(&input_path, Algorithm::Merge)?;
            sort_with(&input_path, Algorithm::Quicksort)?;
            sort_with(&input_path, Algorithm::Radix)?;
        }
    }

    Ok(())
}
