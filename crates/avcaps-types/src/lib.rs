use stabby::option::Option;
use stabby::string::String;

#[stabby::stabby]
#[repr(stabby)]
#[derive(Debug, Clone)]
pub enum MediaLibError {
    FFmpegError(String),
    UnknownError(String),
}

impl std::fmt::Display for MediaLibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = self.match_ref(
            |e| format!("FFmpeg error: {}", e),
            |e| format!("unknown error: {}", e),
        );
        write!(f, "{}", output)
    }
}

impl std::error::Error for MediaLibError {}

#[stabby::stabby]
pub struct MediaLibInit {}

/// Version and build information for one backend library.
///
/// A negative `major` means the library is not present in this build.
/// `configuration` and `license` are `None` when the library did not report them.
#[stabby::stabby]
#[derive(Debug, Clone)]
pub struct LibraryMetaEntry {
    pub name: String,
    pub major: i32,
    pub minor: i32,
    pub micro: i32,
    pub configuration: Option<String>,
    pub license: Option<String>,
}
