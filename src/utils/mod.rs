//! Utility functions

mod id_gen;
mod common;

pub use id_gen::{IdGenerator, UuidIdGenerator, SequentialIdGenerator, generate_account_id};
pub use common::{mask_string, mask_password};
