//! Report module: prints per-strategy timings with the page each strategy saw.

use paged_list_api::PageMetadata;
use paged_list_db::repository::paging_strategy::PagingStrategy;
use serde::Serialize;
use std::time::Duration;

/// Samples collected for one strategy.
#[derive(Debug, Clone)]
pub struct StrategyResult {
    pub strategy: PagingStrategy,
    pub metadata: PageMetadata,
    /// Rows returned by the last timed load.
    pub rows: usize,
    pub durations: Vec<Duration>,
}

impl StrategyResult {
    pub fn new(strategy: PagingStrategy, metadata: PageMetadata, rows: usize) -> Self {
        Self {
            strategy,
            metadata,
            rows,
            durations: Vec::new(),
        }
    }

    pub fn add_sample(&mut self, elapsed: Duration) {
        self.durations.push(elapsed);
    }

    pub fn mean_ms(&self) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.durations.iter().map(|d| d.as_secs_f64() * 1e3).sum();
        sum / self.durations.len() as f64
    }

    pub fn percentile_ms(&self, pct: f64) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self
            .durations
            .iter()
            .map(|d| d.as_secs_f64() * 1e3)
            .collect();
        sorted.sort_by(f64::total_cmp);
        let idx = ((pct / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }

    pub fn min_ms(&self) -> f64 {
        self.durations
            .iter()
            .min()
            .map_or(0.0, |d| d.as_secs_f64() * 1e3)
    }

    pub fn max_ms(&self) -> f64 {
        self.durations
            .iter()
            .max()
            .map_or(0.0, |d| d.as_secs_f64() * 1e3)
    }

    pub fn summary(&self) -> StrategySummary {
        StrategySummary {
            strategy: self.strategy,
            iterations: self.durations.len(),
            mean_ms: self.mean_ms(),
            p50_ms: self.percentile_ms(50.0),
            min_ms: self.min_ms(),
            max_ms: self.max_ms(),
            rows: self.rows,
            page: self.metadata,
        }
    }
}

/// Serializable digest of a [`StrategyResult`].
#[derive(Debug, Clone, Serialize)]
pub struct StrategySummary {
    pub strategy: PagingStrategy,
    pub iterations: usize,
    pub mean_ms: f64,
    pub p50_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub rows: usize,
    pub page: PageMetadata,
}

/// Human-readable report, one line per strategy.
pub fn render_text(results: &[StrategyResult]) -> String {
    let mut out = String::new();
    let Some(first) = results.first() else {
        out.push_str("no strategies were run\n");
        return out;
    };

    let meta = &first.metadata;
    out.push_str(&format!(
        "page {} of {} (size {}, {} items in total, items {}..={})\n",
        meta.page_number,
        meta.page_count,
        meta.page_size,
        meta.total_item_count,
        meta.first_item_on_page,
        meta.last_item_on_page
    ));

    for result in results {
        out.push_str(&format!(
            "{:>13} : {:>9.3} ms  (p50 {:.3}, min {:.3}, max {:.3}, n={})  pages {} / total {}\n",
            result.strategy.as_str(),
            result.mean_ms(),
            result.percentile_ms(50.0),
            result.min_ms(),
            result.max_ms(),
            result.durations.len(),
            result.metadata.page_count,
            result.metadata.total_item_count
        ));
    }

    out
}

/// Machine-readable report, an array of [`StrategySummary`].
pub fn render_json(results: &[StrategyResult]) -> serde_json::Result<String> {
    let summaries: Vec<StrategySummary> = results.iter().map(StrategyResult::summary).collect();
    serde_json::to_string_pretty(&summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> StrategyResult {
        let metadata = PageMetadata::compute(1000, 1, 100).unwrap();
        let mut result = StrategyResult::new(PagingStrategy::Sequential, metadata, 100);
        for ms in [4, 1, 3, 2] {
            result.add_sample(Duration::from_millis(ms));
        }
        result
    }

    #[test]
    fn test_statistics() {
        let result = sample_result();
        assert!((result.mean_ms() - 2.5).abs() < 1e-9);
        assert!((result.min_ms() - 1.0).abs() < 1e-9);
        assert!((result.max_ms() - 4.0).abs() < 1e-9);
        assert!((result.percentile_ms(100.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_result_reports_zero() {
        let metadata = PageMetadata::compute(0, 1, 10).unwrap();
        let result = StrategyResult::new(PagingStrategy::Batched, metadata, 0);
        assert_eq!(result.mean_ms(), 0.0);
        assert_eq!(result.percentile_ms(50.0), 0.0);
        assert_eq!(result.max_ms(), 0.0);
    }

    #[test]
    fn test_text_report_lists_counts() {
        let text = render_text(&[sample_result()]);
        assert!(text.starts_with("page 1 of 10 (size 100, 1000 items in total, items 1..=100)"));
        assert!(text.contains("sequential :"));
        assert!(text.contains("pages 10 / total 1000"));
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
        assert_eq!(render_text(&[]), "no strategies were run\n");
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&[sample_result()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["strategy"], "sequential");
        assert_eq!(value[0]["iterations"], 4);
        assert_eq!(value[0]["page"]["page_count"], 10);
    }
}
