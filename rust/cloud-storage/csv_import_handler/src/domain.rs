//! The import domain: the ports it needs and the service that drives them

pub mod ports;
pub mod service;
