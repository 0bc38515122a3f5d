pub mod carrier;
pub mod lsb_codec;
pub mod sample_order;

pub use carrier::{CarrierImage, ChannelLayout};
pub use lsb_codec::{embed_bits, extract_bits, LsbCodec, LsbDecoder, LsbEncoder};
pub use sample_order::{SampleOrder, SamplePositions};
