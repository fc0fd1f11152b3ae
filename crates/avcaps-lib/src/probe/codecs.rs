use super::c_string;
use super::types::{CodecEntry, MediaKind};
use ffmpeg_next::ffi::{
    av_codec_is_decoder, av_codec_is_encoder, av_codec_iterate, avcodec_descriptor_get, AVCodec,
};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::ptr::null_mut;

// AV_CODEC_PROP_* bits of AVCodecDescriptor::props
const PROP_INTRA_ONLY: i32 = 1 << 0;
const PROP_LOSSY: i32 = 1 << 1;
const PROP_LOSSLESS: i32 = 1 << 2;

/// Describes a single codec implementation; exactly one of `decoder` and
/// `encoder` is normally set.
unsafe fn describe(codec: *const AVCodec, name: String) -> CodecEntry {
    let descriptor = avcodec_descriptor_get((*codec).id);
    let props = if descriptor.is_null() {
        0
    } else {
        (*descriptor).props
    };

    CodecEntry {
        name,
        long_name: c_string((*codec).long_name).unwrap_or_default(),
        kind: MediaKind::from((*codec).type_),
        decoder: av_codec_is_decoder(codec) != 0,
        encoder: av_codec_is_encoder(codec) != 0,
        intra_only: props & PROP_INTRA_ONLY != 0,
        lossy: props & PROP_LOSSY != 0,
        lossless: props & PROP_LOSSLESS != 0,
    }
}

/// Folds codec implementations into one entry per name.
///
/// Availability flags accumulate. Descriptive fields come from the first
/// encoder with that name, or from the first decoder when there is no encoder.
pub fn merge_codecs<I>(implementations: I) -> Vec<CodecEntry>
where
    I: IntoIterator<Item = CodecEntry>,
{
    let mut by_name: BTreeMap<String, CodecEntry> = BTreeMap::new();
    for codec in implementations {
        match by_name.get_mut(&codec.name) {
            None => {
                by_name.insert(codec.name.clone(), codec);
            }
            Some(entry) => {
                let decoder = entry.decoder || codec.decoder;
                let encoder = entry.encoder || codec.encoder;
                if codec.encoder && !entry.encoder {
                    *entry = codec;
                }
                entry.decoder = decoder;
                entry.encoder = encoder;
            }
        }
    }
    by_name.into_values().collect()
}

/// Every codec in the FFmpeg registry, one entry per name, sorted by name.
pub fn available_codecs() -> Vec<CodecEntry> {
    let mut implementations = Vec::new();
    let mut opaque = null_mut();

    unsafe {
        loop {
            let codec = av_codec_iterate(&mut opaque);
            if codec.is_null() {
                break;
            }
            match c_string((*codec).name) {
                Some(name) => implementations.push(describe(codec, name)),
                None => warn!("Skipping codec without a name"),
            }
        }
    }

    let codecs = merge_codecs(implementations);
    debug!("Found {} codecs", codecs.len());
    codecs
}
