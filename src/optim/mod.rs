pub mod rprop;

pub use rprop::Rprop;
