// Domain layer: the record model and the lookup port. No I/O lives here.

pub mod model;
pub mod ports;
