pub mod aprs;
pub mod config;
pub mod error;
pub mod export;
pub mod fix;
pub mod links;
pub mod output;
pub mod packet;

pub use aprs::AprsDecoder;
pub use config::FinderConfig;
pub use error::{FinderError, Result};
pub use export::{ExportSource, RawRecord, load_records};
pub use fix::{FixReport, SelectedFix, find_last_fix, select_latest_fix};
pub use links::LinkPair;
pub use packet::{DecodeError, DecodedPacket, PacketDecoder, reconstruct};
