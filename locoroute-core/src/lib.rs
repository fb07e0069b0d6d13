//! route analytics over locomotive station-visit logs: splits each locomotive's
//! visit history into trips, discovers recurring branch routes per depot and
//! profiles which direction each locomotive works most often.
pub mod algorithm;
pub mod lookup;
pub mod model;
