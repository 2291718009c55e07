use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Completeness of a discovered host pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStatus {
    Complete,
    MissingPost,
    MissingPre,
}

/// A `(pre-check log, post-check log)` pair associated with one device,
/// keyed by the IPv4 address extracted from the filenames. Either side may
/// be absent if only one half of the pair was found in the directory.
#[derive(Debug, Clone)]
pub struct HostPair {
    pub ip: String,
    pub pre: Option<PathBuf>,
    pub post: Option<PathBuf>,
}

impl HostPair {
    pub fn status(&self) -> PairStatus {
        match (&self.pre, &self.post) {
            (Some(_), Some(_)) => PairStatus::Complete,
            (Some(_), None) => PairStatus::MissingPost,
            (None, Some(_)) => PairStatus::MissingPre,
            (None, None) => unreachable!("a discovered pair always has at least one side"),
        }
    }
}

/// Scans `dir` (non-recursively) for `<ipv4>_preCheck.log` /
/// `<ipv4>_postCheck.log` files, grouping them by the IPv4 key. Matching is
/// case-insensitive on the suffix, mirroring `original_source/core.py`'s
/// `IP_RE`. Pairs are returned sorted by IP for deterministic ordering;
/// host-pair discovery has no opinion on diffing itself.
pub fn discover_pairs(dir: &Path) -> std::io::Result<Vec<HostPair>> {
    let pre_re = Regex::new(r"(?i)^(?P<ip>\d{1,3}(?:\.\d{1,3}){3})_preCheck\.log$")
        .expect("static pattern is valid regex");
    let post_re = Regex::new(r"(?i)^(?P<ip>\d{1,3}(?:\.\d{1,3}){3})_postCheck\.log$")
        .expect("static pattern is valid regex");

    let mut by_ip: BTreeMap<String, HostPair> = BTreeMap::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(caps) = pre_re.captures(name) {
            let ip = caps["ip"].to_string();
            by_ip
                .entry(ip.clone())
                .or_insert_with(|| HostPair { ip, pre: None, post: None })
                .pre = Some(path);
        } else if let Some(caps) = post_re.captures(name) {
            let ip = caps["ip"].to_string();
            by_ip
                .entry(ip.clone())
                .or_insert_with(|| HostPair { ip, pre: None, post: None })
                .post = Some(path);
        }
    }

    let mut pairs: Vec<HostPair> = by_ip.into_values().collect();
    pairs.sort_by_key(|pair| ip_sort_key(&pair.ip));
    Ok(pairs)
}

/// Sorts dotted-quad IPv4 strings numerically rather than lexicographically
/// (`"9.0.0.1"` before `"10.0.0.1"`). Falls back to the raw string for
/// anything that doesn't parse as four octets, which cannot happen for a
/// key produced by [`discover_pairs`]'s own regex but keeps this safe to
/// reuse on arbitrary input.
pub(crate) fn ip_sort_key(ip: &str) -> [u8; 4] {
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(ip.split('.')) {
        *slot = part.parse().unwrap_or(0);
    }
    octets
}
