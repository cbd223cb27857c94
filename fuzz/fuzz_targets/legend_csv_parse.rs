//! Fuzz target for legend CSV parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the legend reader,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mosaicprep::legend::from_legend_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_legend_slice(data);
});
