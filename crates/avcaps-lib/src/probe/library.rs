use avcaps_types::LibraryMetaEntry;
use ffmpeg_next as ffmpeg;

/// Version, license and build configuration of one linked FFmpeg library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryInfo {
    pub name: &'static str,
    /// Packed as `major << 16 | minor << 8 | micro`.
    pub version: u32,
    pub license: &'static str,
    pub configuration: &'static str,
}

impl LibraryInfo {
    pub fn to_entry(&self) -> LibraryMetaEntry {
        let (major, minor, micro) = unpack_version(self.version);
        LibraryMetaEntry {
            name: self.name.into(),
            major,
            minor,
            micro,
            configuration: Some(stabby::string::String::from(self.configuration)).into(),
            license: Some(stabby::string::String::from(self.license)).into(),
        }
    }
}

/// Splits an `AV_VERSION_INT` value into its components.
pub fn unpack_version(version: u32) -> (i32, i32, i32) {
    let major = (version >> 16) as i32;
    let minor = ((version >> 8) & 0xFF) as i32;
    let micro = (version & 0xFF) as i32;
    (major, minor, micro)
}

pub fn linked_libraries() -> Vec<LibraryInfo> {
    vec![
        LibraryInfo {
            name: "libavutil",
            version: ffmpeg::util::version(),
            license: ffmpeg::util::license(),
            configuration: ffmpeg::util::configuration(),
        },
        LibraryInfo {
            name: "libavcodec",
            version: ffmpeg::codec::version(),
            license: ffmpeg::codec::license(),
            configuration: ffmpeg::codec::configuration(),
        },
        LibraryInfo {
            name: "libavformat",
            version: ffmpeg::format::version(),
            license: ffmpeg::format::license(),
            configuration: ffmpeg::format::configuration(),
        },
        LibraryInfo {
            name: "libavdevice",
            version: ffmpeg::device::version(),
            license: ffmpeg::device::license(),
            configuration: ffmpeg::device::configuration(),
        },
        LibraryInfo {
            name: "libavfilter",
            version: ffmpeg::filter::version(),
            license: ffmpeg::filter::license(),
            configuration: ffmpeg::filter::configuration(),
        },
        LibraryInfo {
            name: "libswscale",
            version: ffmpeg::software::scaling::version(),
            license: ffmpeg::software::scaling::license(),
            configuration: ffmpeg::software::scaling::configuration(),
        },
        LibraryInfo {
            name: "libswresample",
            version: ffmpeg::software::resampling::version(),
            license: ffmpeg::software::resampling::license(),
            configuration: ffmpeg::software::resampling::configuration(),
        },
    ]
}
