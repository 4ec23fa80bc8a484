// Request/record models and the read-only lookup traits the resolver depends on.

pub mod model;
pub mod ports;
