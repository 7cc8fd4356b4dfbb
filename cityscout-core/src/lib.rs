pub mod error;
pub mod normalize;
pub mod payload;
pub mod records;

pub use error::{NormalizeError, Result};
pub use records::{Business, Film, ForecastDay, NewPlace, Place, PlaceAddress, PlaceRef};
