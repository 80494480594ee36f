use crate::error::Result;
use crate::normalizer::normalize_all;
use crate::render::render_records;
use crate::types::SensorSource;
use metrics::{counter, histogram};
use std::io::Write;
use tracing::{error, info, instrument};

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub source_name: String,
    pub total_records: usize,
}

pub struct Pipeline;

impl Pipeline {
    /// Fetch, normalize and render every reading from `source`.
    ///
    /// Nothing is written unless the whole batch normalizes. Counters go to
    /// whichever `metrics` recorder is installed and are dropped when there is none
    /// (see [`crate::observability`]).
    #[instrument(skip(source, out), fields(source_name = %source.source_name()))]
    pub async fn run<W: Write>(source: &dyn SensorSource, out: W) -> Result<PipelineResult> {
        let source_name = source.source_name().to_string();
        counter!("aq_pipeline_runs_total", "source" => source_name.clone()).increment(1);

        // Step 1: Fetch raw readings
        info!("📡 Fetching sensor readings from {}...", source_name);
        let t_fetch = std::time::Instant::now();
        let raw_records = source.fetch_records().await?;
        histogram!("aq_fetch_duration_seconds", "source" => source_name.clone())
            .record(t_fetch.elapsed().as_secs_f64());
        counter!("aq_records_fetched_total", "source" => source_name.clone())
            .increment(raw_records.len() as u64);
        info!("✅ Fetched {} raw readings", raw_records.len());

        // Step 2: Normalize
        let records = match normalize_all(&raw_records) {
            Ok(records) => records,
            Err(e) => {
                counter!("aq_normalize_errors_total", "source" => source_name.clone()).increment(1);
                error!(error = ?e, "Normalization failed");
                return Err(e);
            }
        };
        counter!("aq_records_normalized_total", "source" => source_name.clone())
            .increment(records.len() as u64);

        // Step 3: Render
        render_records(&records, out)?;
        info!("🖨️ Rendered {} readings", records.len());

        Ok(PipelineResult {
            source_name,
            total_records: records.len(),
        })
    }
}
