use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub transform_total: IntCounter,
    pub analyze_total: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Self {
        let transform_total =
            IntCounter::new("transform_total", "Number of cipher transforms performed").unwrap();
        let analyze_total =
            IntCounter::new("analyze_total", "Number of frequency analyses performed").unwrap();
        registry
            .register(Box::new(transform_total.clone()))
            .unwrap();
        registry.register(Box::new(analyze_total.clone())).unwrap();
        Self {
            transform_total,
            analyze_total,
        }
    }
}
