pub mod gateway;
pub mod transport;
pub mod types;
