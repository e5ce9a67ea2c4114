mod observer;

pub use observer::*;
