#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod components;

pub use components::common::{CtabError, DEFAULT_NAME, OUTPUT_SUFFIX, ROW_WIDTH};
pub use components::emitter::{to_c_array, write_array};
#[cfg(feature = "std")]
pub use components::file::{DumpError, default_output_path, dump_file};
pub use components::parser::{ParsedArray, parse_array};
