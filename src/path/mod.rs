mod split;

pub use split::{SegmentList, Segments, split_segments};
