mod request;
mod response;

pub use request::{DriversQuery, MapQuery, SeasonQuery, VenueQuery};
pub use response::{
    DriversResponse, HealthResponse, MappedRace, RacesResponse, VenueResponse, ViewportResponse,
};
