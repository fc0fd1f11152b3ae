use std::collections::HashMap;

use crate::{MediaClientError, RawLibraryMeta};

/// The queries the reporter needs from a media backend.
///
/// Implementations only read backend state; calling any method twice without
/// the backend changing returns the same data.
pub trait MediaBackend {
    fn package_version(&self) -> Result<String, MediaClientError>;

    /// Metadata per library name. The map carries no ordering.
    fn library_meta(&self) -> Result<HashMap<String, RawLibraryMeta>, MediaClientError>;

    /// Device type names in the backend's enumeration order.
    fn hardware_device_types(&self) -> Result<Vec<String>, MediaClientError>;

    /// Preformatted dump of per-codec hardware configurations.
    fn dump_hardware_configs(&self) -> Result<String, MediaClientError>;

    /// Preformatted dump of every codec the backend knows.
    fn dump_codecs(&self) -> Result<String, MediaClientError>;
}
