//! Capability probing against the linked FFmpeg libraries.
//!
//! Everything here is read-only introspection: library versions and build
//! configuration, hardware device types, per-decoder hardware configurations
//! and the codec registry. Formatting of the codec and hardware config dumps
//! lives in [`dump`] and works on plain Rust records so it can be tested
//! without touching FFmpeg.

mod codecs;
mod dump;
mod hardware;
mod library;
#[cfg(test)]
mod tests;
mod types;

use std::ffi::CStr;
use std::os::raw::c_char;

pub use codecs::{available_codecs, merge_codecs};
pub use dump::{CodecTable, HardwareConfigTable};
pub use hardware::{decoder_hardware_configs, device_types, select_decoders};
pub use library::{linked_libraries, unpack_version, LibraryInfo};
pub use types::{
    CodecEntry, DecoderHardwareConfigs, HardwareConfigEntry, HwConfigMethods, MediaKind,
};

/// Copies a C string owned by FFmpeg. Returns `None` for null pointers.
unsafe fn c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}
