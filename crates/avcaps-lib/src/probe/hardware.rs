use super::c_string;
use super::types::{DecoderHardwareConfigs, HardwareConfigEntry, HwConfigMethods};
use ffmpeg_next::ffi::{
    av_codec_is_decoder, av_codec_iterate, av_get_pix_fmt_name, av_hwdevice_get_type_name,
    av_hwdevice_iterate_types, avcodec_get_hw_config, AVCodec, AVHWDeviceType,
};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::ptr::null_mut;

fn device_type_name(device_type: AVHWDeviceType) -> Option<String> {
    unsafe { c_string(av_hwdevice_get_type_name(device_type)) }
}

/// Hardware device types compiled into FFmpeg, in FFmpeg's enumeration order.
pub fn device_types() -> Vec<String> {
    let mut names = Vec::new();
    let mut current = AVHWDeviceType::AV_HWDEVICE_TYPE_NONE;
    loop {
        current = unsafe { av_hwdevice_iterate_types(current) };
        if current == AVHWDeviceType::AV_HWDEVICE_TYPE_NONE {
            break;
        }
        match device_type_name(current) {
            Some(name) => names.push(name),
            None => warn!("Hardware device type {:?} has no name", current),
        }
    }
    debug!("Found {} hardware device types", names.len());
    names
}

unsafe fn hardware_configs(codec: *const AVCodec) -> Vec<HardwareConfigEntry> {
    let mut configs = Vec::new();
    let mut i = 0;
    loop {
        let config = avcodec_get_hw_config(codec, i);
        if config.is_null() {
            break;
        }
        let hw_config = &*config;
        match device_type_name(hw_config.device_type) {
            Some(device_type) => configs.push(HardwareConfigEntry {
                device_type,
                pixel_format: c_string(av_get_pix_fmt_name(hw_config.pix_fmt)),
                methods: HwConfigMethods::from_bits(hw_config.methods),
            }),
            None => warn!(
                "Skipping hardware config with unnamed device type {:?}",
                hw_config.device_type
            ),
        }
        i += 1;
    }
    configs
}

/// Keeps the first decoder seen for each name, then drops those without any
/// hardware configuration. The result is ordered by decoder name.
pub fn select_decoders<I>(decoders: I) -> Vec<DecoderHardwareConfigs>
where
    I: IntoIterator<Item = DecoderHardwareConfigs>,
{
    let mut by_name = BTreeMap::new();
    for decoder in decoders {
        by_name.entry(decoder.decoder.clone()).or_insert(decoder);
    }
    by_name
        .into_values()
        .filter(|decoder| !decoder.configs.is_empty())
        .collect()
}

/// Hardware configurations of every decoder that has at least one, ordered by
/// decoder name.
pub fn decoder_hardware_configs() -> Vec<DecoderHardwareConfigs> {
    let mut decoders = Vec::new();
    let mut opaque = null_mut();

    unsafe {
        loop {
            let codec = av_codec_iterate(&mut opaque);
            if codec.is_null() {
                break;
            }
            if av_codec_is_decoder(codec) == 0 {
                continue;
            }
            let Some(decoder) = c_string((*codec).name) else {
                continue;
            };
            decoders.push(DecoderHardwareConfigs {
                decoder,
                configs: hardware_configs(codec),
            });
        }
    }

    select_decoders(decoders)
}
