// Domain layer: the cuboid model and the ports the programs and config plug into.

pub mod input;
pub mod model;
pub mod ports;
