//! Ports - The seams between the application and its collaborators

pub mod outbound;
