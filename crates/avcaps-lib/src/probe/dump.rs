use super::types::{CodecEntry, DecoderHardwareConfigs};
use std::fmt;

const CODEC_LEGEND: &str = "Codecs:
 D..... = Decoding supported
 .E.... = Encoding supported
 ..V... = Video codec
 ..A... = Audio codec
 ..S... = Subtitle codec
 ...I.. = Intra frame-only codec
 ....L. = Lossy compression
 .....S = Lossless compression
 ------";

fn flag(set: bool, letter: char) -> char {
    if set {
        letter
    } else {
        '.'
    }
}

/// Renders the codec registry, one line per entry in the given order.
pub struct CodecTable<'a>(pub &'a [CodecEntry]);

impl fmt::Display for CodecTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", CODEC_LEGEND)?;
        for codec in self.0 {
            writeln!(
                f,
                " {}{}{}{}{}{} {:<18} {}",
                flag(codec.decoder, 'D'),
                flag(codec.encoder, 'E'),
                codec.kind.letter(),
                flag(codec.intra_only, 'I'),
                flag(codec.lossy, 'L'),
                flag(codec.lossless, 'S'),
                codec.name,
                codec.long_name
            )?;
        }
        Ok(())
    }
}

/// Renders decoder hardware configurations. Decoders without any
/// configuration are skipped.
pub struct HardwareConfigTable<'a>(pub &'a [DecoderHardwareConfigs]);

impl fmt::Display for HardwareConfigTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hardware configs:")?;
        for decoder in self.0.iter().filter(|d| !d.configs.is_empty()) {
            writeln!(f, "    {}", decoder.decoder)?;
            for config in &decoder.configs {
                writeln!(
                    f,
                    "        {} format={} methods={}",
                    config.device_type,
                    config.pixel_format.as_deref().unwrap_or("none"),
                    config.methods.names().join("|")
                )?;
            }
        }
        Ok(())
    }
}
