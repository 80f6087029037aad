pub mod constants;
pub mod baseline;
pub mod error;
pub mod units;
pub mod math_utils;
pub mod sunshade;
pub mod stationkeeping;
pub mod reflector;
pub mod scalability;
pub mod swarm;
pub mod scenario;
