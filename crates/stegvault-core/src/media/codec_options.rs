/// Options of the LSB codec, they determine which samples of a carrier are used.
///
/// Hiding and unveiling must use identical options, otherwise the unveiled
/// bits are garbage and no envelope is recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Determines the step width when iterating over the color channels.
    /// For example `2` would move from (R)GB to RG(B).
    /// Alpha channels do not count when they are skipped (`skip_alpha_channel`).
    ///
    /// Note this number influences the capacity directly.
    pub color_channel_step_increment: usize,

    /// If true no alpha channel would be used for encoding,
    /// this reduces the capacity by one bit per pixel for images with alpha.
    pub skip_alpha_channel: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            color_channel_step_increment: 1,
            skip_alpha_channel: true,
        }
    }
}

impl CodecOptions {
    pub fn with_color_channel_step_increment(mut self, step: usize) -> Self {
        self.color_channel_step_increment = step;
        self
    }

    pub fn with_alpha_channel(mut self, use_alpha: bool) -> Self {
        self.skip_alpha_channel = !use_alpha;
        self
    }
}
