pub mod bsn;
pub mod engine;
pub mod fields;

pub use crate::domain::model::{Dataset, Person, TransformResult};
pub use crate::domain::ports::{ConfigProvider, DigitSource, Pipeline, Storage, Telemetry};
pub use crate::utils::error::Result;
