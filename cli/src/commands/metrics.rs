use svcprobe_core::Exporter;

use crate::terminal::print;

pub fn list(exporter: &dyn Exporter) {
    print::header(exporter.name());
    for metric in exporter.metrics() {
        print::metric(metric.key, metric.description);
    }
}
