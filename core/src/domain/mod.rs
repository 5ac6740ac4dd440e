//! Domain layer
//!
//! Contains the business records and the contracts this layer needs from
//! the outside world.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Gateway traits implemented by persistence adapters

pub mod entities;
pub mod ports;
