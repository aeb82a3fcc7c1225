pub mod teleservice;

pub use teleservice::Teleservice;
