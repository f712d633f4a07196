//! Domain models for the weather proxy

mod city;
mod condition;
mod reading;

pub use city::*;
pub use condition::*;
pub use reading::*;
