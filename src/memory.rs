//! Best-effort process memory sampling
//!
//! On Linux the current resident set comes from `/proc/self/statm`. Anywhere
//! else, or when procfs is unreadable, the peak resident set reported by
//! `getrusage` is used instead. A sample of 0 means nothing was available.

use nix::sys::resource::{getrusage, UsageWho};
use nix::unistd::{sysconf, SysconfVar};

/// Resident memory of this process in kilobytes
pub fn resident_kb() -> i64 {
    #[cfg(target_os = "linux")]
    {
        match statm_resident_kb() {
            Some(kb) => return kb,
            None => tracing::warn!("/proc/self/statm unavailable, falling back to getrusage"),
        }
    }
    peak_resident_kb().unwrap_or(0)
}

#[cfg(target_os = "linux")]
fn statm_resident_kb() -> Option<i64> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    parse_statm_resident_pages(&statm).map(|pages| pages * page_size_kb())
}

/// Second field of statm: resident pages
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_statm_resident_pages(statm: &str) -> Option<i64> {
    statm.split_whitespace().nth(1)?.parse().ok()
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn page_size_kb() -> i64 {
    match sysconf(SysconfVar::PAGE_SIZE) {
        Ok(Some(bytes)) if bytes > 0 => (bytes as i64) / 1024,
        _ => 4,
    }
}

fn peak_resident_kb() -> Option<i64> {
    let usage = getrusage(UsageWho::RUSAGE_SELF).ok()?;
    let max_rss = usage.max_rss() as i64;
    // macOS reports bytes, Linux and the BSDs kilobytes
    if cfg!(target_os = "macos") {
        Some(max_rss / 1024)
    } else {
        Some(max_rss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_statm() {
        assert_eq!(
            parse_statm_resident_pages("10573 1843 1267 2 0 1214 0\n"),
            Some(1843)
        );
        assert_eq!(parse_statm_resident_pages("10573"), None);
        assert_eq!(parse_statm_resident_pages("a b c"), None);
    }

    #[test]
    fn test_page_size_is_positive() {
        assert!(page_size_kb() > 0);
    }

    #[test]
    fn test_resident_kb_is_positive() {
        assert!(resident_kb() > 0);
    }
}
