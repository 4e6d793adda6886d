//! cafe-service: answers `GET /cafe?city=<city>&count=<n>` with up to `n`
//! café names for the city, joined with commas.

pub mod config;
pub mod directory;
pub mod handlers;
pub mod startup;
