//! Boolean search query generation.
//!
//! The harvest runs the full Cartesian product of the three term
//! vocabularies; each combination becomes one arXiv API query over the
//! `all:` field. Generation is exhaustive and deterministic (outer loop over
//! model terms, then signal terms, then domain terms). Order only affects
//! progress reporting: aggregation is order-independent after dedup.

use crate::config::HarvestConfig;

/// Build the query list for a run: exactly `m * s * h` conjunctions of the
/// form `all:<model> AND all:<signal> AND all:<health>`.
pub fn generate_queries(config: &HarvestConfig) -> Vec<String> {
    let mut queries =
        Vec::with_capacity(config.model_terms.len() * config.signal_terms.len() * config.health_terms.len());

    for model in &config.model_terms {
        for signal in &config.signal_terms {
            for health in &config.health_terms {
                queries.push(format!("all:{} AND all:{} AND all:{}", model, signal, health));
            }
        }
    }

    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(model: &[&str], signal: &[&str], health: &[&str]) -> HarvestConfig {
        HarvestConfig {
            model_terms: model.iter().map(|s| s.to_string()).collect(),
            signal_terms: signal.iter().map(|s| s.to_string()).collect(),
            health_terms: health.iter().map(|s| s.to_string()).collect(),
            ..HarvestConfig::default()
        }
    }

    #[test]
    fn test_cartesian_product_count() {
        let config = HarvestConfig::default();
        let queries = generate_queries(&config);
        assert_eq!(queries.len(), 4 * 2 * 3);
    }

    #[test]
    fn test_query_shape_and_order() {
        let config = config_with(&["transformer", "cnn"], &["wearable"], &["health", "clinical"]);
        let queries = generate_queries(&config);

        assert_eq!(
            queries,
            vec![
                "all:transformer AND all:wearable AND all:health",
                "all:transformer AND all:wearable AND all:clinical",
                "all:cnn AND all:wearable AND all:health",
                "all:cnn AND all:wearable AND all:clinical",
            ]
        );
    }

    #[test]
    fn test_multiword_terms_kept_verbatim() {
        let config = config_with(&["foundation model"], &["biosignal"], &["human activity recognition"]);
        let queries = generate_queries(&config);
        assert_eq!(
            queries,
            vec!["all:foundation model AND all:biosignal AND all:human activity recognition"]
        );
    }
}
