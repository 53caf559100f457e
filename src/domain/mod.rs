// Domain layer - Core trimming types and rules

pub mod model;
pub mod rules;
