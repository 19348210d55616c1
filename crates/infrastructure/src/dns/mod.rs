pub mod message;
mod probe;

pub use probe::UdpProbe;
