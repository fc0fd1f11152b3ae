use ffmpeg_next::ffi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    Unknown,
}

impl MediaKind {
    pub fn letter(&self) -> char {
        match self {
            MediaKind::Video => 'V',
            MediaKind::Audio => 'A',
            MediaKind::Subtitle => 'S',
            MediaKind::Data => 'D',
            MediaKind::Attachment => 'T',
            MediaKind::Unknown => '?',
        }
    }
}

impl From<ffi::AVMediaType> for MediaKind {
    fn from(value: ffi::AVMediaType) -> Self {
        match value {
            ffi::AVMediaType::AVMEDIA_TYPE_VIDEO => MediaKind::Video,
            ffi::AVMediaType::AVMEDIA_TYPE_AUDIO => MediaKind::Audio,
            ffi::AVMediaType::AVMEDIA_TYPE_SUBTITLE => MediaKind::Subtitle,
            ffi::AVMediaType::AVMEDIA_TYPE_DATA => MediaKind::Data,
            ffi::AVMediaType::AVMEDIA_TYPE_ATTACHMENT => MediaKind::Attachment,
            _ => MediaKind::Unknown,
        }
    }
}

/// One line of the codec dump. Decoder and encoder implementations that
/// share a name are merged into a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecEntry {
    pub name: String,
    pub long_name: String,
    pub kind: MediaKind,
    pub decoder: bool,
    pub encoder: bool,
    pub intra_only: bool,
    pub lossy: bool,
    pub lossless: bool,
}

/// Bit set of `AV_CODEC_HW_CONFIG_METHOD_*` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwConfigMethods(i32);

impl HwConfigMethods {
    pub const HW_DEVICE_CTX: i32 = ffi::AV_CODEC_HW_CONFIG_METHOD_HW_DEVICE_CTX as i32;
    pub const HW_FRAMES_CTX: i32 = ffi::AV_CODEC_HW_CONFIG_METHOD_HW_FRAMES_CTX as i32;
    pub const INTERNAL: i32 = ffi::AV_CODEC_HW_CONFIG_METHOD_INTERNAL as i32;
    pub const AD_HOC: i32 = ffi::AV_CODEC_HW_CONFIG_METHOD_AD_HOC as i32;

    const NAMES: [(i32, &'static str); 4] = [
        (Self::HW_DEVICE_CTX, "hw_device_ctx"),
        (Self::HW_FRAMES_CTX, "hw_frames_ctx"),
        (Self::INTERNAL, "internal"),
        (Self::AD_HOC, "ad_hoc"),
    ];

    pub fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub fn contains(&self, method: i32) -> bool {
        self.0 & method != 0
    }

    /// Names of the set methods in ascending bit order.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareConfigEntry {
    pub device_type: String,
    /// `None` when FFmpeg has no name for the pixel format.
    pub pixel_format: Option<String>,
    pub methods: HwConfigMethods,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderHardwareConfigs {
    pub decoder: String,
    pub configs: Vec<HardwareConfigEntry>,
}
