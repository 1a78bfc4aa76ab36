//! Sign-correct conversions between geodetic angle notations
//! (decimal degrees, hour-pair, DMS, DDM) and between
//! calendar dates and day-of-year codes.

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![allow(unknown_lints)]
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use date::{date_to_yyyydoy, yyyydoy_to_date, ParseDoyError};
pub use geoconv_types::{
    dec2ddm, dec2dms, dec2hp, hp2ddm, hp2dec, hp2dec_checked, hp2dms, resolve_sign, Angle,
    DdmAngle, DmsAngle, InvalidHp, InvalidSign, ParseAngleError,
};

mod date;
