mod drivers;
mod health;
mod map;
mod predict;
mod races;
mod venues;

pub use drivers::list_drivers;
pub use health::health_check;
pub use map::{get_markers, get_viewport};
pub use predict::{predict_by_search, predict_race};
pub use races::list_races;
pub use venues::resolve_venue;
