//! Wire and domain types shared by the phone-book client crates.

pub mod domain;
pub mod protocol;
