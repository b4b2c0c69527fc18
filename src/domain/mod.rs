// Domain layer: request/response models and the service port. No HTTP here.

pub mod model;
pub mod ports;
