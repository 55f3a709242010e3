//! Content identifier derivation and shape validation.
//!
//! Two deliberately independent halves: [`generate_cid`] produces demo-grade
//! placeholder tokens, while [`validate_cid`] checks the shapes of real IPFS
//! CIDs. A generated token never passes validation; see [`cid`] for details.

pub mod cid;

pub use cid::{generate_cid, validate_cid};
