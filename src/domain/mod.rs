// Domain layer: models and ports. No IO here beyond the trait seams.

pub mod model;
pub mod ports;
