use std::io::{self, Cursor, Read, Write};

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use log::debug;

use crate::error::StegVaultError;
use crate::media::image::{CarrierImage, SampleOrder, SamplePositions};
use crate::media::{CodecOptions, HideBit, UnveilBit};
use crate::result::Result;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder<'i>(input: &'i CarrierImage, opts: &CodecOptions) -> LsbDecoder<'i> {
        LsbDecoder {
            samples: input.samples(),
            positions: SampleOrder::for_carrier(input, opts).positions(),
        }
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i>(carrier: &'i mut CarrierImage, opts: &CodecOptions) -> LsbEncoder<'i> {
        let positions = SampleOrder::for_carrier(carrier, opts).positions();
        LsbEncoder {
            samples: carrier.samples_mut(),
            positions,
        }
    }
}

/// Hides written bytes, most significant bit first, in the samples of a carrier.
///
/// Only whole bytes are written, once less than 8 samples are left
/// `write` returns `Ok(0)` and `write_all` fails with [`io::ErrorKind::WriteZero`].
pub struct LsbEncoder<'i> {
    samples: &'i mut [u8],
    positions: SamplePositions,
}

impl Write for LsbEncoder<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bytes = buf.len().min(self.positions.len() >> 3);
        let mut bits = BitReader::endian(Cursor::new(&buf[..bytes]), BigEndian);

        for _ in 0..bytes << 3 {
            let bit = bits.read_bit()?;
            match self.positions.next() {
                Some(p) => self.samples[p].hide_bit(bit),
                None => break,
            }
        }

        Ok(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads back what [`LsbEncoder`] has hidden, whole bytes only.
pub struct LsbDecoder<'i> {
    samples: &'i [u8],
    positions: SamplePositions,
}

impl Read for LsbDecoder<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let bytes = buf.len().min(self.positions.len() >> 3);
        let mut bits = BitWriter::endian(&mut buf[..bytes], BigEndian);

        for p in self.positions.by_ref().take(bytes << 3) {
            bits.write_bit(self.samples[p].unveil_bit())?;
        }

        Ok(bytes)
    }
}

/// Writes all bits of `data` into the carrier, starting at the first sample.
///
/// Fails with [`StegVaultError::InsufficientCapacity`] before any sample is modified
/// if the carrier is too small.
pub fn embed_bits(carrier: &mut CarrierImage, opts: &CodecOptions, data: &[u8]) -> Result<()> {
    let order = SampleOrder::for_carrier(carrier, opts);
    let requested_bits = data.len().saturating_mul(8);
    if requested_bits > order.len() {
        return Err(StegVaultError::InsufficientCapacity {
            requested_bits,
            available_bits: order.len(),
        });
    }

    let samples = carrier.samples_mut();
    let mut bits = BitReader::endian(Cursor::new(data), BigEndian);
    for p in order.positions().take(requested_bits) {
        samples[p].hide_bit(bits.read_bit()?);
    }
    debug!("embedded {requested_bits} bits");

    Ok(())
}

/// Reads `bit_count` bits starting at bit `bit_offset` of the sample order.
///
/// The bits are packed most significant bit first, a trailing partial byte is padded with zeros.
pub fn extract_bits(
    carrier: &CarrierImage,
    opts: &CodecOptions,
    bit_offset: usize,
    bit_count: usize,
) -> Result<Vec<u8>> {
    let order = SampleOrder::for_carrier(carrier, opts);
    let requested_bits = bit_offset.saturating_add(bit_count);
    if requested_bits > order.len() {
        return Err(StegVaultError::InsufficientCapacity {
            requested_bits,
            available_bits: order.len(),
        });
    }

    let samples = carrier.samples();
    let mut bits = BitWriter::endian(Vec::with_capacity(bit_count.div_ceil(8)), BigEndian);
    let mut positions = order.positions();
    if bit_offset > 0 {
        // nth(n) consumes n + 1 items
        positions.nth(bit_offset - 1);
    }
    for p in positions.take(bit_count) {
        bits.write_bit(samples[p].unveil_bit())?;
    }
    bits.byte_align()?;

    Ok(bits.into_writer())
}
