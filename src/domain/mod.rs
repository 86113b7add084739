// Domain layer: the frozen magnitude catalogue and the accepted input shapes.

pub mod input;
pub mod order;
