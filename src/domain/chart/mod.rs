//! Price series aggregate: value objects, the series entity and the
//! generator/updater domain services.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
