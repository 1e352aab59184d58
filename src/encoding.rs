use encoding_rs::{Encoding, UTF_8};
use log::{debug, info, warn};

use crate::errors::AppError;

// @module: Character encoding detection, decoding and re-encoding

/// Label and confidence reported by an encoding detector
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingGuess {
    pub label: String,
    /// 0.0 to 1.0
    pub confidence: f32,
}

/// Source of encoding guesses for raw file content
pub trait EncodingDetector {
    fn detect(&self, bytes: &[u8]) -> EncodingGuess;
}

/// Detector backed by the `chardet` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ChardetDetector;

impl EncodingDetector for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> EncodingGuess {
        let (charset, confidence, _language) = chardet::detect(&bytes.to_vec());
        let label = chardet::charset2encoding(&charset).to_string();
        debug!("chardet guessed {:?} ({:?}) with confidence {}", charset, label, confidence);
        EncodingGuess { label, confidence }
    }
}

/// Encoding resolved for one input file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceEncoding {
    pub encoding: &'static Encoding,
    /// Input started with a byte-order mark
    pub bom: bool,
    pub confidence: f32,
}

impl SourceEncoding {
    /// Resolve a guess against the file's bytes. A byte-order mark wins over the guess.
    pub fn resolve(guess: &EncodingGuess, bytes: &[u8]) -> Self {
        if let Some((encoding, _)) = Encoding::for_bom(bytes) {
            return SourceEncoding { encoding, bom: true, confidence: 1.0 };
        }

        let encoding = match Encoding::for_label(guess.label.as_bytes()) {
            Some(encoding) => encoding,
            None => {
                if !guess.label.is_empty() {
                    warn!("Unsupported encoding label '{}', reading as UTF-8", guess.label);
                }
                UTF_8
            }
        };
        SourceEncoding { encoding, bom: false, confidence: guess.confidence }
    }

    /// Detect and resolve in one step
    pub fn detect<D: EncodingDetector + ?Sized>(detector: &D, bytes: &[u8]) -> Self {
        let source = Self::resolve(&detector.detect(bytes), bytes);
        info!("Detected character encoding: {}{}", source.encoding.name(), if source.bom { " (BOM)" } else { "" });
        info!("Confidence of encoding: {}%", (source.confidence.clamp(0.0, 1.0) * 100.0) as u32);
        source
    }

    /// Decode the whole input, dropping any byte-order mark
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, used, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            warn!("Input is not valid {}; malformed sequences were replaced", used.name());
        }
        text.into_owned()
    }
}

/// Encoding used when writing output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputEncoding {
    pub encoding: &'static Encoding,
    pub bom: bool,
}

impl OutputEncoding {
    /// Same as the input unless UTF-8 is forced
    pub fn for_source(source: &SourceEncoding, force_utf8: bool) -> Self {
        if force_utf8 {
            info!("Output encoding forced to UTF-8");
            return OutputEncoding { encoding: UTF_8, bom: false };
        }

        let encoding = source.encoding.output_encoding();
        if encoding != source.encoding {
            warn!("Cannot write {}, output will use {}", source.encoding.name(), encoding.name());
        }
        OutputEncoding { encoding, bom: source.bom && encoding == source.encoding }
    }

    pub fn utf8() -> Self {
        OutputEncoding { encoding: UTF_8, bom: false }
    }

    /// Encode `text`, failing if a character has no representation in the target encoding
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, AppError> {
        let (bytes, used, had_errors) = self.encoding.encode(text);
        if had_errors {
            return Err(AppError::Encoding(format!(
                "text contains characters that cannot be written as {} (use --utf8)",
                used.name()
            )));
        }

        let mut output = Vec::with_capacity(bytes.len() + 3);
        if self.bom {
            output.extend_from_slice(b"\xEF\xBB\xBF");
        }
        output.extend_from_slice(&bytes);
        Ok(output)
    }
}
