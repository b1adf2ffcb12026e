//! Distance command handler

use crate::args::DistanceSubcommand;
use caddie::config::Config;
use caddie::core::distance::{DistanceCalculator, Haversine, ImageDistance, ImageScale};
use caddie::core::models::{GeoPoint, ImagePoint};
use caddie::verbose;

/// Print the distance between two points, in metres
pub fn run(subcommand: DistanceSubcommand, config: &Config) {
    let metres = match subcommand {
        DistanceSubcommand::Image {
            x1,
            y1,
            x2,
            y2,
            span,
            height_span,
        } => {
            let configured = config.image_scale();
            let width_m = span.unwrap_or(configured.width_m);
            // An explicit width without an explicit height keeps the diagram square
            let height_m = height_span.unwrap_or(if span.is_some() {
                width_m
            } else {
                configured.height_m
            });
            verbose!("Diagram scale: {width_m} m x {height_m} m");
            ImageDistance::new(ImageScale { width_m, height_m })
                .distance(&ImagePoint::new(x1, y1), &ImagePoint::new(x2, y2))
        }
        DistanceSubcommand::Geo {
            lat1,
            lon1,
            lat2,
            lon2,
        } => Haversine.distance(&GeoPoint::new(lat1, lon1), &GeoPoint::new(lat2, lon2)),
    };
    println!("{metres:.2} m");
}
