mod branch;
mod direction;
mod locomotive;
mod locomotive_direction_stats;
mod record;
mod route_error;
mod station_stats;
mod trip;

pub use branch::{branch_id, Branch};
pub use direction::{direction_id, Direction};
pub use locomotive::Locomotive;
pub use locomotive_direction_stats::{percentage, LocomotiveDirectionStats};
pub use record::{locomotive_key, Record};
pub use route_error::RouteError;
pub use station_stats::StationStats;
pub use trip::Trip;
