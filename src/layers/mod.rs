pub mod dni;

pub use dni::{DniLayer, ForwardPass, SyntheticPass};
