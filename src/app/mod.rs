// Application layer: the concrete run modes built on the domain ports.

pub mod programs;
