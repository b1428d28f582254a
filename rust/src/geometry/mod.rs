pub mod coordinate;
pub mod error;
pub mod model;

pub use coordinate::Coordinate;
pub use error::GeometryError;
pub use model::{Point, Rectangle};
