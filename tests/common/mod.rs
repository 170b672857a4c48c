use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::io::{BufWriter, Write};
use std::fs::File;
use data_encoding::HEXLOWER;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    } else {
        println!("Results directory exists at {:?}", results_dir_path);
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

// One trip row per departure time, the time in the sixth field.
#[allow(dead_code)]
pub fn write_trips_file(path: &PathBuf, times: &[u32]) -> Result<(), anyhow::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "route_id,service_id,trip_id,trip_headsign,direction_id,departure_time")?;
    for (i, time) in times.iter().enumerate() {
        writeln!(writer, "r{},weekday,t{},Downtown,0,{}", i % 7, i, time)?;
    }
    Ok(())
}

#[allow(dead_code)]
pub fn write_lines(path: &PathBuf, lines: &[&str]) -> Result<(), anyhow::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

#[allow(dead_code)]
pub fn random_times(n: usize) -> Vec<u32> {
    (0..n).map(|_| rand::random::<u32>() % 86_400).collect()
}
