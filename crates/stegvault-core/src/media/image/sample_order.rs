use crate::media::image::{CarrierImage, ChannelLayout};
use crate::media::CodecOptions;

/// The order in which samples of a carrier are visited.
///
/// Hiding and unveiling both walk the carrier exclusively through this type,
/// so both directions always agree on where bit `n` lives:
/// pixels row by row, channels in storage order within a pixel, alpha left
/// out if configured, then every `color_channel_step_increment`-th of the
/// remaining samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOrder {
    channels: usize,
    used_channels: usize,
    usable_samples: usize,
    step: usize,
}

impl SampleOrder {
    pub fn new(layout: ChannelLayout, sample_count: usize, opts: &CodecOptions) -> Self {
        let channels = layout.channels();
        let used_channels = if layout.has_alpha() && opts.skip_alpha_channel {
            channels - 1
        } else {
            channels
        };

        Self {
            channels,
            used_channels,
            usable_samples: sample_count / channels * used_channels,
            step: opts.color_channel_step_increment.max(1),
        }
    }

    pub fn for_carrier(carrier: &CarrierImage, opts: &CodecOptions) -> Self {
        Self::new(carrier.layout(), carrier.sample_count(), opts)
    }

    /// number of visited samples, which is the capacity in bits
    pub fn len(&self) -> usize {
        self.usable_samples.div_ceil(self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// indices into the flat sample buffer, in visiting order
    pub fn positions(&self) -> SamplePositions {
        SamplePositions {
            order: *self,
            index: 0,
        }
    }
}

/// Iterator over sample indices, see [`SampleOrder::positions`]
#[derive(Debug, Clone)]
pub struct SamplePositions {
    order: SampleOrder,
    /// index among the usable samples
    index: usize,
}

impl Iterator for SamplePositions {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let o = &self.order;
        if self.index >= o.usable_samples {
            return None;
        }
        let position = self.index / o.used_channels * o.channels + self.index % o.used_channels;
        self.index = self.index.saturating_add(o.step);

        Some(position)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = self
            .index
            .saturating_add(n.saturating_mul(self.order.step));
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .order
            .usable_samples
            .saturating_sub(self.index)
            .div_ceil(self.order.step);

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SamplePositions {}
