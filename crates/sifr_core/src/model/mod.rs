//! Typed symbols of the SIFR code space.
//!
//! # Responsibility
//! - Give every named slot a closed variant type, one enum per band.
//! - Keep the byte value of each variant equal to its SIFR slot.
//!
//! # Invariants
//! - `X::from_byte(x.byte()) == Some(x)` for every band enum `X`.
//! - Band enums never overlap in byte values.

pub mod category;
pub mod control;
pub mod letter;
pub mod mark;
pub mod symbol;
