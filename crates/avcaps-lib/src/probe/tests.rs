#[cfg(test)]
mod tests {
    use super::super::{
        available_codecs, decoder_hardware_configs, device_types, merge_codecs, select_decoders,
        unpack_version, CodecEntry, CodecTable, DecoderHardwareConfigs, HardwareConfigEntry,
        HardwareConfigTable, HwConfigMethods, LibraryInfo, MediaKind,
    };

    fn codec(name: &str, long_name: &str, kind: MediaKind) -> CodecEntry {
        CodecEntry {
            name: name.to_string(),
            long_name: long_name.to_string(),
            kind,
            decoder: false,
            encoder: false,
            intra_only: false,
            lossy: false,
            lossless: false,
        }
    }

    #[test]
    fn test_unpack_version() {
        assert_eq!(unpack_version((61 << 16) | (19 << 8) | 100), (61, 19, 100));
        assert_eq!(unpack_version(0), (0, 0, 0));
    }

    #[test]
    fn test_library_entry() {
        let info = LibraryInfo {
            name: "libavcodec",
            version: (60 << 16) | (31 << 8) | 102,
            license: "LGPL version 2.1 or later",
            configuration: "--enable-shared",
        };
        let entry = info.to_entry();
        assert_eq!(entry.name.to_string(), "libavcodec");
        assert_eq!((entry.major, entry.minor, entry.micro), (60, 31, 102));
    }

    #[test]
    fn test_codec_table_lines() {
        let mut h264 = codec(
            "h264",
            "H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10",
            MediaKind::Video,
        );
        h264.decoder = true;
        h264.lossy = true;
        h264.lossless = true;

        let mut flac = codec("flac", "FLAC (Free Lossless Audio Codec)", MediaKind::Audio);
        flac.decoder = true;
        flac.encoder = true;
        flac.intra_only = true;
        flac.lossless = true;

        let mut srt = codec("srt", "SubRip subtitle", MediaKind::Subtitle);
        srt.encoder = true;

        let output = CodecTable(&[flac, h264, srt]).to_string();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Codecs:");
        assert_eq!(lines[9], " ------");
        assert_eq!(
            lines[10],
            " DEAI.S flac               FLAC (Free Lossless Audio Codec)"
        );
        assert_eq!(
            lines[11],
            " D.V.LS h264               H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10"
        );
        assert_eq!(lines[12], " .ES... srt                SubRip subtitle");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_codec_table_long_name_overflows_column() {
        let mut entry = codec("a_very_long_codec_name", "Long", MediaKind::Data);
        entry.decoder = true;
        let output = CodecTable(&[entry]).to_string();
        assert!(output.ends_with(" D.D... a_very_long_codec_name Long\n"));
    }

    #[test]
    fn test_hw_config_method_names() {
        let methods = HwConfigMethods::from_bits(
            HwConfigMethods::HW_DEVICE_CTX | HwConfigMethods::AD_HOC,
        );
        assert_eq!(methods.names(), vec!["hw_device_ctx", "ad_hoc"]);
        assert!(HwConfigMethods::from_bits(0).names().is_empty());
    }

    #[test]
    fn test_hardware_config_table() {
        let decoders = vec![
            DecoderHardwareConfigs {
                decoder: "h264".to_string(),
                configs: vec![
                    HardwareConfigEntry {
                        device_type: "vaapi".to_string(),
                        pixel_format: Some("vaapi".to_string()),
                        methods: HwConfigMethods::from_bits(
                            HwConfigMethods::HW_DEVICE_CTX | HwConfigMethods::AD_HOC,
                        ),
                    },
                    HardwareConfigEntry {
                        device_type: "cuda".to_string(),
                        pixel_format: None,
                        methods: HwConfigMethods::from_bits(HwConfigMethods::HW_FRAMES_CTX),
                    },
                ],
            },
            DecoderHardwareConfigs {
                decoder: "pcm_s16le".to_string(),
                configs: vec![],
            },
        ];

        let output = HardwareConfigTable(&decoders).to_string();
        assert_eq!(
            output,
            "Hardware configs:\n\
             \x20   h264\n\
             \x20       vaapi format=vaapi methods=hw_device_ctx|ad_hoc\n\
             \x20       cuda format=none methods=hw_frames_ctx\n"
        );
    }

    #[test]
    fn test_hardware_config_table_empty() {
        assert_eq!(HardwareConfigTable(&[]).to_string(), "Hardware configs:\n");
    }

    fn vaapi_config() -> HardwareConfigEntry {
        HardwareConfigEntry {
            device_type: "vaapi".to_string(),
            pixel_format: Some("vaapi".to_string()),
            methods: HwConfigMethods::from_bits(HwConfigMethods::HW_DEVICE_CTX),
        }
    }

    #[test]
    fn test_merge_codecs_prefers_encoder_description() {
        let mut decoder = codec("opus", "Opus (decoder)", MediaKind::Audio);
        decoder.decoder = true;
        decoder.lossy = true;
        let mut encoder = codec("opus", "Opus (encoder)", MediaKind::Audio);
        encoder.encoder = true;
        let mut second_encoder = codec("opus", "Opus (second encoder)", MediaKind::Audio);
        second_encoder.encoder = true;
        let mut aac = codec("aac", "AAC", MediaKind::Audio);
        aac.decoder = true;

        let merged = merge_codecs(vec![decoder, encoder, second_encoder, aac]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "aac");
        assert_eq!(merged[1].name, "opus");
        assert_eq!(merged[1].long_name, "Opus (encoder)");
        assert!(merged[1].decoder && merged[1].encoder);
        assert!(!merged[1].lossy);
    }

    #[test]
    fn test_merge_codecs_keeps_first_decoder_without_encoder() {
        let mut first = codec("hevc", "HEVC", MediaKind::Video);
        first.decoder = true;
        let mut second = codec("hevc", "HEVC (alternate)", MediaKind::Video);
        second.decoder = true;

        let merged = merge_codecs(vec![first, second]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].long_name, "HEVC");
        assert!(merged[0].decoder && !merged[0].encoder);
    }

    #[test]
    fn test_select_decoders_keeps_first_by_name() {
        let decoders = vec![
            DecoderHardwareConfigs {
                decoder: "vp9".to_string(),
                configs: vec![],
            },
            DecoderHardwareConfigs {
                decoder: "h264".to_string(),
                configs: vec![vaapi_config()],
            },
            DecoderHardwareConfigs {
                decoder: "vp9".to_string(),
                configs: vec![vaapi_config()],
            },
            DecoderHardwareConfigs {
                decoder: "av1".to_string(),
                configs: vec![vaapi_config(), vaapi_config()],
            },
        ];

        let selected = select_decoders(decoders);
        let names: Vec<&str> = selected.iter().map(|d| d.decoder.as_str()).collect();
        assert_eq!(names, vec!["av1", "h264"]);
        assert_eq!(selected[0].configs.len(), 2);
    }

    #[test]
    fn test_available_codecs_sorted_and_merged() {
        let codecs = available_codecs();
        assert!(!codecs.is_empty());
        assert!(
            codecs.windows(2).all(|pair| pair[0].name < pair[1].name),
            "codec names are not strictly ascending"
        );

        let flac = codecs
            .iter()
            .find(|c| c.name == "flac")
            .expect("flac is part of every FFmpeg build");
        assert!(flac.decoder && flac.encoder);
        assert_eq!(flac.kind, MediaKind::Audio);
    }

    #[test]
    fn test_decoder_hardware_configs_sorted_and_non_empty() {
        let decoders = decoder_hardware_configs();
        assert!(decoders
            .windows(2)
            .all(|pair| pair[0].decoder < pair[1].decoder));
        assert!(decoders.iter().all(|d| !d.configs.is_empty()));
    }

    #[test]
    fn test_device_types_exclude_none() {
        let names = device_types();
        assert!(!names.iter().any(|name| name == "none"));
        assert!(names.iter().all(|name| !name.is_empty()));
    }
}
