//! Metrics collection and exposition.
//!
//! # Metrics
//! - `route_resolutions_total` (counter): successful resolutions by route
//! - `route_no_match_total` (counter): paths that matched no route
//!
//! # Design Decisions
//! - Counters are recorded by callers of the route table, not by `resolve`
//! - Without an installed recorder the macros are no-ops

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and serve it on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_resolution(route: &str) {
    ::metrics::counter!("route_resolutions_total", "route" => route.to_string()).increment(1);
}

pub fn record_no_match() {
    ::metrics::counter!("route_no_match_total").increment(1);
}

#[cfg(test)]
mod tests {
    use metrics_exporter_prometheus::PrometheusBuilder;

    use crate::history::{HistoryBase, Navigator};
    use crate::views::app_routes;

    #[test]
    fn test_navigation_records_resolution_counters() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            let mut nav = Navigator::new(app_routes(), HistoryBase::default());
            nav.push("/operadoras/12345678000190").unwrap();
            assert!(nav.push("/unknown").is_err());
        });

        let rendered = handle.render();
        assert!(
            rendered.contains("route_resolutions_total{route=\"operadora\"} 1"),
            "{}",
            rendered
        );
        assert!(rendered.contains("route_no_match_total 1"), "{}", rendered);
        assert!(!rendered.contains("route=\"home\""), "{}", rendered);
    }
}
