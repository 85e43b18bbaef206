//! parcelmeter - Geodetic area and edge-length measurement for land parcels

pub mod config;
pub mod domain;
pub mod geodesy;
pub mod input;
pub mod report;
pub mod units;
