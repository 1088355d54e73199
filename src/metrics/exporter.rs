use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for heap metrics snapshots.
///
/// Writes in the Prometheus text exposition format so the output can be
/// scraped or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", &self.metric_name(suffix), value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<HeapMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &HeapMetricsSnapshot) {
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_rejected_total", snapshot.insert_rejected);
        self.write_counter("extract_calls_total", snapshot.extract_calls);
        self.write_counter("replace_calls_total", snapshot.replace_calls);
        self.write_counter("empty_rejected_total", snapshot.empty_rejected);
        self.write_counter("find_min_calls_total", snapshot.find_min_calls);
        self.write_counter("find_min_empty_total", snapshot.find_min_empty);
        self.write_counter("heapify_calls_total", snapshot.heapify_calls);
        self.write_counter("heapify_rejected_total", snapshot.heapify_rejected);
        self.write_counter("heap_sort_calls_total", snapshot.heap_sort_calls);
        self.write_counter("decrease_key_calls_total", snapshot.decrease_key_calls);
        self.write_counter("delete_key_calls_total", snapshot.delete_key_calls);
        self.write_counter("key_rejected_total", snapshot.key_rejected);
        self.write_counter("sift_up_swaps_total", snapshot.sift_up_swaps);
        self.write_counter("sift_down_swaps_total", snapshot.sift_down_swaps);
        self.write_gauge("heap_len", snapshot.heap_len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
    }
}
