//! Extended-range governance.
//!
//! Bytes 0xF0–0xFF carry no meaning in table version 1. This module defines
//! the declaration contract for claiming them: an allocation names one slot
//! and is validated and registered in-process. The code-space table itself
//! is never modified.

pub mod allocation;
pub mod registry;
