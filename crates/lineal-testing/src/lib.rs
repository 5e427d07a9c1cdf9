//! Testing utilities and harness for Lineal

pub mod probe;

pub use probe::*;

pub mod prelude {
    pub use crate::probe::*;
}
