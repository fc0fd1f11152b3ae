pub mod probe;

use avcaps_types::{LibraryMetaEntry, MediaLibError, MediaLibInit};
use ffmpeg_next as ffmpeg;
use probe::{CodecTable, HardwareConfigTable};

#[stabby::stabby]
#[stabby::export]
pub fn init_media_lib() -> stabby::result::Result<MediaLibInit, MediaLibError> {
    let init = ffmpeg::init();
    match init {
        Ok(_) => Ok(MediaLibInit {}).into(),
        Err(e) => Err(MediaLibError::FFmpegError(e.to_string().into())).into(),
    }
}

#[stabby::stabby]
#[stabby::export]
pub fn shutdown_media_lib() {
    log::debug!("shutting down media backend");
    ffmpeg::format::network::deinit();
}

#[stabby::stabby]
#[stabby::export]
pub fn init_logging() {
    // FFmpeg logs to stderr on its own; keep it quiet unless something breaks.
    ffmpeg::util::log::set_level(ffmpeg::util::log::Level::Error);
    let _ = pretty_env_logger::try_init();
}

#[stabby::stabby]
#[stabby::export]
pub fn package_version() -> stabby::string::String {
    env!("CARGO_PKG_VERSION").into()
}

#[stabby::stabby]
#[stabby::export]
pub fn library_meta() -> stabby::vec::Vec<LibraryMetaEntry> {
    let mut entries = stabby::vec::Vec::new();
    for library in probe::linked_libraries() {
        entries.push(library.to_entry());
    }
    entries
}

#[stabby::stabby]
#[stabby::export]
pub fn hardware_device_types() -> stabby::vec::Vec<stabby::string::String> {
    let mut names = stabby::vec::Vec::new();
    for name in probe::device_types() {
        names.push(name.into());
    }
    names
}

/// Runs a dump, turning a panic into an error so it never unwinds across the C ABI.
fn guarded<F>(dump: F) -> Result<String, MediaLibError>
where
    F: FnOnce() -> Result<String, MediaLibError> + std::panic::UnwindSafe,
{
    std::panic::catch_unwind(dump).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "media backend panicked".to_string());
        log::error!("dump panicked: {}", message);
        Err(MediaLibError::UnknownError(message.into()))
    })
}

fn hardware_config_dump() -> Result<String, MediaLibError> {
    let decoders = probe::decoder_hardware_configs();
    Ok(HardwareConfigTable(&decoders).to_string())
}

fn codec_dump() -> Result<String, MediaLibError> {
    let codecs = probe::available_codecs();
    if codecs.is_empty() {
        return Err(MediaLibError::FFmpegError(
            "no codecs are registered in this FFmpeg build".into(),
        ));
    }
    Ok(CodecTable(&codecs).to_string())
}

#[stabby::stabby]
#[stabby::export]
pub fn dump_hardware_configs() -> stabby::result::Result<stabby::string::String, MediaLibError> {
    guarded(hardware_config_dump).map(stabby::string::String::from).into()
}

#[stabby::stabby]
#[stabby::export]
pub fn dump_codecs() -> stabby::result::Result<stabby::string::String, MediaLibError> {
    guarded(codec_dump).map(stabby::string::String::from).into()
}
