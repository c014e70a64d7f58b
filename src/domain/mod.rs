// Domain layer: the public config record's input port. std only.

pub mod ports;
