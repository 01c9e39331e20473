//! Domain layer: participants, their validation and the cost model.

pub mod calculator;
pub mod duration;
pub mod money;
pub mod participant;
pub mod ports;
pub mod validation;
