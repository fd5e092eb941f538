//! Les pages de l'interface.

pub mod browse;
pub mod error;
