use std::fs;

// Resident set size of the current process in kB, read from the VmRSS line of
// /proc/self/status. None on platforms without procfs.
pub(crate) fn resident_kb() -> Option<u64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    for line in status.lines() {
        if let Some(value) = line.strip_prefix("VmRSS:") {
            return value.split_whitespace().next()?.parse::<u64>().ok();
        }
    }
    None
}
