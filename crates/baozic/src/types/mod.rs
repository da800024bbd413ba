//! Static types of the Baozi language

mod ty;

pub use ty::Type;
