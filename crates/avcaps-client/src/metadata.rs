use std::fmt;

use crate::MediaClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub micro: i32,
}

impl Version {
    pub fn new(major: i32, minor: i32, micro: i32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// A negative major version marks a library that is absent or unversioned.
    /// Only the major component is considered.
    pub fn is_present(&self) -> bool {
        self.major >= 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:3}.{:3}.{:3}", self.major, self.minor, self.micro)
    }
}

/// Library metadata as reported by the backend, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLibraryMeta {
    pub version: Option<Version>,
    pub configuration: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMeta {
    pub name: String,
    pub version: Version,
    pub configuration: String,
    pub license: String,
}

impl LibraryMeta {
    pub fn from_raw(name: &str, raw: RawLibraryMeta) -> Result<Self, MediaClientError> {
        let missing = |field: &'static str| MediaClientError::MalformedMetadataEntry {
            library: name.to_string(),
            field,
        };

        Ok(LibraryMeta {
            name: name.to_string(),
            version: raw.version.ok_or_else(|| missing("version"))?,
            configuration: raw.configuration.ok_or_else(|| missing("configuration"))?,
            license: raw.license.ok_or_else(|| missing("license"))?,
        })
    }
}
