//! Leaf utilities for Trove.
//!
//! Every helper here is a pure function. Most fail soft, returning `None`,
//! `false`, or their input unchanged; [`parse_json`] is the exception and
//! reports a positioned parse error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arrays;
pub mod json;
pub mod period;
pub mod strings;
pub mod validate;

pub use arrays::{
    chunk, difference, group_by, intersection, remove_item, remove_where, sample, shuffle, unique,
    unique_by,
};
pub use json::{parse_json, to_json};
pub use period::{format_period, format_relative, parse_date, parse_period};
pub use strings::{
    camel_case, capitalize, kebab_case, pascal_case, slugify, snake_case, title_case, truncate,
    words,
};
pub use validate::{is_color, is_css_length, is_email, is_hex_color, is_url};
