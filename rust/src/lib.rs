pub mod config;
pub mod geometry;
pub mod report;

// Re-export main types and functions
pub use config::ShapeConfig;
pub use geometry::{Coordinate, GeometryError, Point, Rectangle};
pub use report::{write_report, Coordinates, OutputFormat, RectangleReport};
