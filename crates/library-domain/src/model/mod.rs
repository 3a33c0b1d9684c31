//! Domain Models - The vocabulary of the catalogue

pub mod author;
pub mod sort;
