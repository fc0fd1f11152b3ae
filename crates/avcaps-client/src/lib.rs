use std::collections::HashMap;
use std::path::Path;

use avcaps_types::{LibraryMetaEntry, MediaLibError, MediaLibInit};
use stabby::libloading::StabbyLibrary;

mod backend;
mod metadata;
mod reporter;

pub use backend::MediaBackend;
pub use metadata::{LibraryMeta, RawLibraryMeta, Version};
pub use reporter::{group_libraries, CapabilityReporter, LibraryGroups, PACKAGE_LABEL};

#[derive(Debug, thiserror::Error)]
pub enum MediaClientError {
    #[error("media backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("media backend error: {0}")]
    MediaLibError(MediaLibError),
    #[error("malformed metadata for {library}: missing {field}")]
    MalformedMetadataEntry { library: String, field: &'static str },
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MediaLibError> for MediaClientError {
    fn from(error: MediaLibError) -> Self {
        MediaClientError::MediaLibError(error)
    }
}

// Symbol lookups report their failures this way.
impl From<Box<dyn std::error::Error + Send + Sync>> for MediaClientError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        MediaClientError::BackendUnavailable(error.to_string())
    }
}

/// File name of the backend library on the current platform.
pub fn backend_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "avcaps_lib.dll"
    } else if cfg!(target_os = "macos") {
        "libavcaps_lib.dylib"
    } else {
        "libavcaps_lib.so"
    }
}

type DumpFn = extern "C" fn() -> stabby::result::Result<stabby::string::String, MediaLibError>;

/// Report entry points resolved from the backend library.
#[derive(Clone, Copy)]
struct Symbols {
    package_version: extern "C" fn() -> stabby::string::String,
    library_meta: extern "C" fn() -> stabby::vec::Vec<LibraryMetaEntry>,
    hardware_device_types: extern "C" fn() -> stabby::vec::Vec<stabby::string::String>,
    dump_hardware_configs: DumpFn,
    dump_codecs: DumpFn,
}

fn resolve_symbols(library: &libloading::Library) -> Result<Symbols, MediaClientError> {
    let package_version = *unsafe {
        library.get_stabbied::<extern "C" fn() -> stabby::string::String>(b"package_version")
    }?;
    let library_meta = *unsafe {
        library.get_stabbied::<extern "C" fn() -> stabby::vec::Vec<LibraryMetaEntry>>(
            b"library_meta",
        )
    }?;
    let hardware_device_types = *unsafe {
        library.get_stabbied::<extern "C" fn() -> stabby::vec::Vec<stabby::string::String>>(
            b"hardware_device_types",
        )
    }?;
    let dump_hardware_configs =
        *unsafe { library.get_stabbied::<DumpFn>(b"dump_hardware_configs") }?;
    let dump_codecs = *unsafe { library.get_stabbied::<DumpFn>(b"dump_codecs") }?;

    Ok(Symbols {
        package_version,
        library_meta,
        hardware_device_types,
        dump_hardware_configs,
        dump_codecs,
    })
}

/// Runs `shutdown` when a step after a successful backend init failed.
fn shutdown_on_error<T, F: FnOnce()>(
    result: Result<T, MediaClientError>,
    shutdown: F,
) -> Result<T, MediaClientError> {
    if result.is_err() {
        shutdown();
    }
    result
}

/// Handle to a loaded and initialized backend library.
///
/// The backend is initialized by [`load`] and shut down either explicitly with
/// [`DynamicBackend::shutdown`] or when the handle is dropped.
pub struct DynamicBackend {
    symbols: Symbols,
    shutdown_media_lib: extern "C" fn(),
    shut_down: bool,
    // Dropped last: every function pointer above points into it.
    _library: libloading::Library,
}

pub fn load(lib: &Path) -> Result<DynamicBackend, MediaClientError> {
    log::debug!("Loading media backend from {}", lib.display());
    let library = unsafe { libloading::Library::new(lib) }.map_err(|e| {
        MediaClientError::BackendUnavailable(format!("{}: {}", lib.display(), e))
    })?;

    let init_logging = *unsafe { library.get_stabbied::<extern "C" fn()>(b"init_logging") }?;
    let init_media_lib = *unsafe {
        library
            .get_stabbied::<extern "C" fn() -> stabby::result::Result<MediaLibInit, MediaLibError>>(
                b"init_media_lib",
            )
    }?;
    let shutdown_media_lib =
        *unsafe { library.get_stabbied::<extern "C" fn()>(b"shutdown_media_lib") }?;

    init_logging();
    init_media_lib().match_owned(
        |_| Ok(()),
        |e| Err(MediaClientError::BackendUnavailable(e.to_string())),
    )?;

    let symbols = shutdown_on_error(resolve_symbols(&library), || shutdown_media_lib())?;

    Ok(DynamicBackend {
        symbols,
        shutdown_media_lib,
        shut_down: false,
        _library: library,
    })
}

fn owned_string(value: stabby::option::Option<stabby::string::String>) -> Option<String> {
    value.match_owned(|s| Some(s.to_string()), || None)
}

impl From<LibraryMetaEntry> for RawLibraryMeta {
    fn from(entry: LibraryMetaEntry) -> Self {
        RawLibraryMeta {
            version: Some(Version::new(entry.major, entry.minor, entry.micro)),
            configuration: owned_string(entry.configuration),
            license: owned_string(entry.license),
        }
    }
}

impl DynamicBackend {
    pub fn shutdown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.shut_down {
            (self.shutdown_media_lib)();
            self.shut_down = true;
        }
    }
}

impl Drop for DynamicBackend {
    fn drop(&mut self) {
        self.release();
    }
}

fn dump_result(
    result: stabby::result::Result<stabby::string::String, MediaLibError>,
) -> Result<String, MediaClientError> {
    result.match_owned(|text| Ok(text.to_string()), |e| Err(e.into()))
}

impl MediaBackend for DynamicBackend {
    fn package_version(&self) -> Result<String, MediaClientError> {
        Ok((self.symbols.package_version)().to_string())
    }

    fn library_meta(&self) -> Result<HashMap<String, RawLibraryMeta>, MediaClientError> {
        let entries = (self.symbols.library_meta)();
        Ok(entries
            .iter()
            .cloned()
            .map(|entry| (entry.name.to_string(), RawLibraryMeta::from(entry)))
            .collect())
    }

    fn hardware_device_types(&self) -> Result<Vec<String>, MediaClientError> {
        let names = (self.symbols.hardware_device_types)();
        Ok(names.iter().map(|name| name.to_string()).collect())
    }

    fn dump_hardware_configs(&self) -> Result<String, MediaClientError> {
        dump_result((self.symbols.dump_hardware_configs)())
    }

    fn dump_codecs(&self) -> Result<String, MediaClientError> {
        dump_result((self.symbols.dump_codecs)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reports_missing_library_as_unavailable() {
        let missing = std::env::temp_dir()
            .join("avcaps-does-not-exist")
            .join(backend_library_name());
        match load(&missing) {
            Err(MediaClientError::BackendUnavailable(message)) => {
                assert!(message.contains("avcaps-does-not-exist"), "{}", message)
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("loading a missing library succeeded"),
        }
    }

    #[test]
    fn failed_setup_after_init_shuts_down() {
        let calls = std::cell::Cell::new(0);
        let failed: Result<(), MediaClientError> = shutdown_on_error(
            Err(MediaClientError::BackendUnavailable("missing dump_codecs".to_string())),
            || calls.set(calls.get() + 1),
        );
        assert!(failed.is_err());
        assert_eq!(calls.get(), 1);

        let ok = shutdown_on_error(Ok(7), || calls.set(calls.get() + 1));
        assert_eq!(ok.unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn it_can_load_lib() {
        let lib = test::get_backend_lib();
        let backend = load(&lib).unwrap();

        assert!(!backend.package_version().unwrap().is_empty());

        let libraries = backend.library_meta().unwrap();
        let avutil = libraries.get("libavutil").expect("libavutil is always linked");
        assert!(avutil.version.unwrap().major >= 0);
        assert!(avutil.configuration.is_some());
        assert!(avutil.license.is_some());

        let groups = group_libraries(libraries.clone());
        assert!(groups.values().flatten().any(|meta| meta.name == "libavcodec"));

        let device_types = backend.hardware_device_types().unwrap();
        assert!(!device_types.iter().any(|name| name == "none"));

        let codecs = backend.dump_codecs().unwrap();
        assert!(codecs.starts_with("Codecs:\n"));
        let configs = backend.dump_hardware_configs().unwrap();
        assert!(configs.starts_with("Hardware configs:\n"));

        backend.shutdown();
    }
}
