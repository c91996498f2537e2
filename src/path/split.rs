use memchr::memchr;
use smallvec::SmallVec;

pub type SegmentList<'p> = SmallVec<[&'p str; 8]>;

/// Iterator over the non-empty `/`-delimited segments of a path.
///
/// Leading, trailing and repeated slashes never produce a segment, so `/`,
/// `""` and `//` all yield nothing.
#[derive(Debug, Clone)]
pub struct Segments<'p> {
    rest: &'p str,
}

impl<'p> Segments<'p> {
    pub fn new(path: &'p str) -> Self {
        Self { rest: path }
    }
}

impl<'p> Iterator for Segments<'p> {
    type Item = &'p str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.rest.is_empty() {
                return None;
            }

            let bytes = self.rest.as_bytes();
            let (segment, rest) = match memchr(b'/', bytes) {
                Some(pos) => (&self.rest[..pos], &self.rest[pos + 1..]),
                None => (self.rest, ""),
            };
            self.rest = rest;

            if !segment.is_empty() {
                return Some(segment);
            }
        }
    }
}

#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn split_segments(path: &str) -> SegmentList<'_> {
    Segments::new(path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_paths_yield_no_segments() {
        assert!(split_segments("/").is_empty());
        assert!(split_segments("").is_empty());
        assert!(split_segments("///").is_empty());
    }

    #[test]
    fn strips_leading_and_trailing_slashes() {
        assert_eq!(split_segments("/name/30/").as_slice(), &["name", "30"]);
        assert_eq!(split_segments("name/30").as_slice(), &["name", "30"]);
    }

    #[test]
    fn collapses_repeated_slashes() {
        assert_eq!(split_segments("//a///b//").as_slice(), &["a", "b"]);
    }

    #[test]
    fn keeps_segment_text_verbatim() {
        assert_eq!(
            split_segments("/user/{id:[0-9]+}/Caf%C3%A9").as_slice(),
            &["user", "{id:[0-9]+}", "Caf%C3%A9"]
        );
    }
}
