//! Core Valuehaus functionality
//!
//! This module contains the `ValueCodec` facade, which ties classification,
//! display decoding and input encoding to one loaded configuration.

use config::CodecConfig;
use type_mapping::{ProcessedValue, RawValue, TypeDecl, UserInput};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::errors::ValuehausError;

/// Entry point for classifying column types and transcoding their values
#[derive(Debug, Clone)]
pub struct ValueCodec {
    config: CodecConfig,
    decoder: Decoder,
    encoder: Encoder,
}

impl ValueCodec {
    /// Create a codec from a configuration, validating it first
    pub fn new(config: CodecConfig) -> Result<Self, ValuehausError> {
        config.validate()?;
        let decoder = Decoder::new(&config)?;
        let encoder = Encoder::new(&config)?;
        Ok(Self {
            config,
            decoder,
            encoder,
        })
    }

    /// Create a codec from `valuehaus.toml` or the environment
    pub fn from_env() -> Result<Self, ValuehausError> {
        Self::new(CodecConfig::load()?)
    }

    /// Get configuration reference
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Classify a column type declaration
    pub fn classify(&self, declaration: &str) -> Result<TypeDecl, ValuehausError> {
        let decl = TypeDecl::parse(declaration)?;
        trace_log!(
            "Classified '{}' as {} ({:?})",
            declaration,
            decl.pure_type(),
            decl.category()
        );
        Ok(decl)
    }

    /// Render a raw value of an already classified column
    pub fn decode(&self, decl: &TypeDecl, raw: &RawValue) -> Option<String> {
        self.decoder.decode(decl, raw)
    }

    /// Encode user input for a write to an already classified column
    pub fn encode(&self, decl: &TypeDecl, input: UserInput) -> Result<ProcessedValue, ValuehausError> {
        self.encoder.encode(decl, input)
    }

    /// Encode user input for a query condition on an already classified column
    pub fn encode_condition(
        &self,
        decl: &TypeDecl,
        input: UserInput,
    ) -> Result<ProcessedValue, ValuehausError> {
        self.encoder.encode_condition(decl, input)
    }

    /// Classify `declaration` and render `raw` in one step
    pub fn decode_column(
        &self,
        declaration: &str,
        raw: &RawValue,
    ) -> Result<Option<String>, ValuehausError> {
        let decl = self.classify(declaration)?;
        Ok(self.decode(&decl, raw))
    }

    /// Classify `declaration` and encode `input` in one step
    pub fn encode_column(
        &self,
        declaration: &str,
        input: UserInput,
    ) -> Result<ProcessedValue, ValuehausError> {
        let decl = self.classify(declaration)?;
        self.encode(&decl, input)
    }
}

impl Default for ValueCodec {
    fn default() -> Self {
        Self {
            config: CodecConfig::default(),
            decoder: Decoder::default(),
            encoder: Encoder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{DisplayConfig, TemporalConfig};

    #[test]
    fn test_decode_column_classifies_first() {
        let codec = ValueCodec::default();
        assert_eq!(
            codec
                .decode_column("binary(5)", &RawValue::Bytes(vec![72, 101, 121, 0, 0]))
                .unwrap(),
            Some("Hey".to_string())
        );
        assert!(codec
            .decode_column("foobar", &RawValue::Null)
            .unwrap_err()
            .is_unsupported_type());
    }

    #[test]
    fn test_encode_column_classifies_first() {
        let codec = ValueCodec::default();
        assert_eq!(
            codec.encode_column("bit(8)", "00000101".into()).unwrap(),
            ProcessedValue::Buffer { bytes: vec![5] }
        );
        assert!(codec
            .encode_column("geography", "x".into())
            .unwrap_err()
            .is_unsupported_type());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CodecConfig::new(
            TemporalConfig::new(
                chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                "not an offset".to_string(),
            ),
            DisplayConfig::default(),
        );
        assert!(matches!(
            ValueCodec::new(config),
            Err(ValuehausError::Config(_))
        ));
    }

    #[test]
    fn test_datetime_edits_are_stable_in_configured_offset() {
        let config = CodecConfig::new(
            TemporalConfig::new(
                chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                "+02:00".to_string(),
            ),
            DisplayConfig::default(),
        );
        let codec = ValueCodec::new(config).unwrap();
        let decl = codec.classify("datetime").unwrap();

        let mut raw = RawValue::from("2024-02-29T10:11:12Z");
        let mut stored = Vec::new();
        for _ in 0..3 {
            let shown = codec.decode(&decl, &raw).unwrap();
            assert_eq!(shown, "2024-02-29 12:11:12+02:00");
            let ProcessedValue::Plain { value } = codec.encode(&decl, shown.into()).unwrap() else {
                panic!("expected a plain value");
            };
            raw = RawValue::from(value.clone());
            stored.push(value);
        }
        assert!(stored.iter().all(|value| *value == stored[0]));
        assert_eq!(raw, RawValue::from("2024-02-29 12:11:12"));
    }

    #[test]
    fn test_default_matches_default_config() {
        let codec = ValueCodec::new(CodecConfig::default()).unwrap();
        let decl = codec.classify("blob").unwrap();
        assert_eq!(
            codec.decode(&decl, &RawValue::Bytes(vec![1, 2, 3])),
            ValueCodec::default().decode(&decl, &RawValue::Bytes(vec![1, 2, 3]))
        );
        assert_eq!(codec.config(), ValueCodec::default().config());
    }
}
