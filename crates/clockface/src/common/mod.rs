//! Validation predicates and string helpers shared by construction and formatting.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Total** - every helper returns a value for every input, nothing here fails

pub mod validation;

pub use validation::{
    describe_kind, describe_value, is_integer, is_non_negative_integer,
    is_non_negative_whole, is_number, is_string, is_whole, pad,
};
