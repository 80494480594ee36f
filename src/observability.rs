//! Prometheus snapshot of the pipeline counters.
//!
//! A run is short-lived, so there is no scrape endpoint. The recorder's text
//! exposition is written to a file once the run ends, in the layout a
//! node_exporter textfile collector reads.

use crate::error::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fs;
use std::path::Path;
use tracing::info;

/// Install a process-wide Prometheus recorder.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

/// Write the current exposition text to `path`, replacing any previous snapshot.
pub fn write_snapshot(handle: &PrometheusHandle, path: &Path) -> Result<()> {
    fs::write(path, handle.render())?;
    info!("Wrote metrics snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics::counter;

    #[test]
    fn test_snapshot_contains_recorded_counters() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        metrics::with_local_recorder(&recorder, || {
            counter!("aq_records_fetched_total", "source" => "file").increment(3);
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aq_scraper.prom");
        write_snapshot(&handle, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("aq_records_fetched_total{source=\"file\"} 3"), "{text}");
    }
}
