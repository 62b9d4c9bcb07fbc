//! Application layer - Use cases over the domain
//!
//! - Ports: the random source, item catalog and save notifier the services need
//! - Services: attribute rolling, slot resolution, validation, the editors and
//!   the roster coordinator

pub mod ports;
pub mod services;
