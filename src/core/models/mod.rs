//! Data models for `AI Caddie`

pub mod bag;
pub mod club;
pub mod course;
pub mod hole;
pub mod point;

pub use bag::Bag;
pub use club::Club;
pub use course::Course;
pub use hole::Hole;
pub use point::{GeoPoint, ImagePoint};
