//! Page components for Bento Bio.

mod bio;

pub use bio::Bio;
