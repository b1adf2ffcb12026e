//! Recommend command handler

use caddie::config::Config;
use caddie::core::recommend::{Recommender, Source};
use caddie::{error, verbose};

/// Recommend a club for `distance` metres from the configured bag
///
/// # Errors
/// Returns a printable message when the distance is unusable, the bag cannot
/// be loaded, or the bag is empty and the policy does not allow a fallback.
pub fn run(distance: f64, config: &Config) -> Result<(), String> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(format!("✗ Invalid distance: {distance}"));
    }

    let recommender = Recommender::new(config.bag_repository(), config.empty_bag_policy());
    let recommendation = recommender.recommend(distance).map_err(|e| {
        error!("Recommendation failed for {distance} m: {e}");
        format!("✗ {e}")
    })?;

    println!("{}", recommendation.club);
    if recommendation.source == Source::DefaultBands {
        verbose!("(no clubs configured; using the default distance bands)");
    }
    Ok(())
}
