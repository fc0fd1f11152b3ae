//! Renders backend capabilities as plain text.
//!
//! Every report is a single query-then-write pass over the backend. The
//! reporter keeps no state between reports, so the same backend state always
//! produces the same bytes.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use log::{debug, warn};

use crate::{LibraryMeta, MediaBackend, MediaClientError, RawLibraryMeta};

/// Name printed in front of the package version.
pub const PACKAGE_LABEL: &str = "avcaps";

const LIBRARY_NAME_WIDTH: usize = 13;

/// Libraries grouped by `(configuration, license)`, each group sorted by name.
pub type LibraryGroups = BTreeMap<(String, String), Vec<LibraryMeta>>;

/// Drops absent libraries and malformed entries, then groups the rest.
pub fn group_libraries(libraries: HashMap<String, RawLibraryMeta>) -> LibraryGroups {
    let mut entries: Vec<(String, RawLibraryMeta)> = libraries.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut groups = LibraryGroups::new();
    for (name, raw) in entries {
        if raw.version.is_some_and(|version| !version.is_present()) {
            debug!("Skipping {}: library not present", name);
            continue;
        }
        match LibraryMeta::from_raw(&name, raw) {
            Ok(meta) => groups
                .entry((meta.configuration.clone(), meta.license.clone()))
                .or_default()
                .push(meta),
            Err(e) => warn!("Skipping library entry: {}", e),
        }
    }
    groups
}

pub struct CapabilityReporter<'a, B: MediaBackend + ?Sized, W: Write> {
    backend: &'a B,
    out: W,
}

impl<'a, B: MediaBackend + ?Sized, W: Write> CapabilityReporter<'a, B, W> {
    pub fn new(backend: &'a B, out: W) -> Self {
        Self { backend, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn report_version(&mut self) -> Result<(), MediaClientError> {
        let package_version = self.backend.package_version()?;
        let groups = group_libraries(self.backend.library_meta()?);

        writeln!(self.out, "{} v{}", PACKAGE_LABEL, package_version)?;
        for ((configuration, license), libraries) in &groups {
            writeln!(self.out, "library configuration: {}", configuration)?;
            writeln!(self.out, "library license: {}", license)?;
            for library in libraries {
                writeln!(
                    self.out,
                    "{:<width$.width$} {}",
                    library.name,
                    library.version,
                    width = LIBRARY_NAME_WIDTH
                )?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn report_hardware_devices(&mut self) -> Result<(), MediaClientError> {
        let device_types = self.backend.hardware_device_types()?;

        writeln!(self.out, "Hardware device types:")?;
        for device_type in &device_types {
            writeln!(self.out, "    {}", device_type)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn report_hardware_configs(&mut self) -> Result<(), MediaClientError> {
        let dump = self.backend.dump_hardware_configs()?;
        self.out.write_all(dump.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn report_codecs(&mut self) -> Result<(), MediaClientError> {
        let dump = self.backend.dump_codecs()?;
        self.out.write_all(dump.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
