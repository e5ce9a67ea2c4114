mod measurement;

pub use measurement::*;
