use logdiff_core::{DiffEngine, DiffResult};

use crate::discover::{HostPair, ip_sort_key};

/// Outcome of diffing one host pair.
pub enum HostOutcome {
    /// Both logs were present and read; `result` carries the engine output.
    Diffed(DiffResult),
    /// One side of the pair was never discovered on disk.
    Missing,
    /// The file existed but could not be read.
    Unreadable,
}

pub struct HostReport {
    pub ip: String,
    pub outcome: HostOutcome,
}

/// Runs one engine invocation per host pair on a scoped thread per pair,
/// mirroring `original_source/main.py`'s `multiprocessing` fan-out but with
/// in-process threads rather than processes (the engine has no GIL to work
/// around). Engine invocations share no mutable state beyond the read-only
/// `engine`, so no synchronization is needed beyond collecting results.
/// Fan-out gives no ordering guarantee, so results are sorted by IP key
/// before being returned.
pub fn run_fanout(pairs: &[HostPair], engine: &DiffEngine) -> Vec<HostReport> {
    let mut reports = std::thread::scope(|scope| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|pair| scope.spawn(move || process_pair(pair, engine)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("host-pair worker thread panicked"))
            .collect::<Vec<_>>()
    });

    reports.sort_by_key(|report| ip_sort_key(&report.ip));
    reports
}

fn process_pair(pair: &HostPair, engine: &DiffEngine) -> HostReport {
    let (Some(pre_path), Some(post_path)) = (&pair.pre, &pair.post) else {
        tracing::warn!(ip = %pair.ip, "host pair is incomplete, skipping diff");
        return HostReport { ip: pair.ip.clone(), outcome: HostOutcome::Missing };
    };

    let pre = match read_lines(pre_path) {
        Ok(lines) => lines,
        Err(error) => {
            tracing::error!(ip = %pair.ip, path = %pre_path.display(), %error, "failed to read pre-check log");
            return HostReport { ip: pair.ip.clone(), outcome: HostOutcome::Unreadable };
        }
    };
    let post = match read_lines(post_path) {
        Ok(lines) => lines,
        Err(error) => {
            tracing::error!(ip = %pair.ip, path = %post_path.display(), %error, "failed to read post-check log");
            return HostReport { ip: pair.ip.clone(), outcome: HostOutcome::Unreadable };
        }
    };

    let result = engine.diff(&pre, &post);
    HostReport { ip: pair.ip.clone(), outcome: HostOutcome::Diffed(result) }
}

fn read_lines(path: &std::path::Path) -> std::io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}
