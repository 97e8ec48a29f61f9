use crate::analysis::{generate_report, AnalysisReport};
use crate::media::{CodecOptions, RawImage};
use crate::{Result, VeilError};

pub fn prepare() -> AnalyzeApi {
    AnalyzeApi::default()
}

#[derive(Default, Debug)]
pub struct AnalyzeApi {
    original: Option<RawImage>,
    stego: Option<RawImage>,
    options: CodecOptions,
}

impl AnalyzeApi {
    /// The method used for hiding, it only affects the reported capacity
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_original(mut self, original: RawImage) -> Self {
        self.original = Some(original);
        self
    }

    pub fn with_stego(mut self, stego: RawImage) -> Self {
        self.stego = Some(stego);
        self
    }

    pub fn execute(self) -> Result<AnalysisReport> {
        let Some(original) = self.original else {
            return Err(VeilError::MissingOriginal);
        };
        let Some(stego) = self.stego else {
            return Err(VeilError::MissingStego);
        };

        generate_report(&original, &stego, &self.options)
    }
}
