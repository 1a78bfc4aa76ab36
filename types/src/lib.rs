//! Signed sexagesimal angle types and hour-pair conversions

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    ddm::DdmAngle,
    dms::DmsAngle,
    errors::{InvalidHp, InvalidSign, ParseAngleError},
    sign::resolve_sign,
    Angle,
};
pub use convert::{dec2ddm, dec2dms, dec2hp, hp2ddm, hp2dec, hp2dec_checked, hp2dms};

mod angle;
mod convert;
mod utils;

// only the serialization tests use it
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;
