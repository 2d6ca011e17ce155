use crate::{DanRank, PlayStyle};

/// Page size requested on every call.
///
/// The service ignores `page`: asking for page 1 returns page 0 again. The
/// only way to get a complete ranking is to request more rows than it could
/// ever hold and treat a short page as the end. Keep this value and the page
/// counter as they are; should the service start paginating, the loop in the
/// engine already walks pages in order.
pub const RESULT_LIMIT: u32 = 50_000;

/// Constant the service expects alongside every ranking request.
pub const RELEASE_9_10_KAIDEN: u32 = 2;

/// One outbound ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest<'a> {
    pub rank: &'a DanRank,
    pub play_style: PlayStyle,
    pub page: u32,
    pub limit: u32,
}

impl<'a> FetchRequest<'a> {
    pub fn new(rank: &'a DanRank, play_style: PlayStyle, page: u32, limit: u32) -> Self {
        Self {
            rank,
            play_style,
            page,
            limit,
        }
    }

    /// Form fields in the order the browser client sends them.
    pub fn form_fields(&self) -> [(&'static str, String); 5] {
        [
            ("grade_id", self.rank.grade_id.to_string()),
            ("play_style", self.play_style.code().to_string()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("release_9_10_kaiden", RELEASE_9_10_KAIDEN.to_string()),
        ]
    }

    /// The request for the page after this one.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..*self
        }
    }
}

/// A page shorter than the requested limit is the last one for its pair.
pub fn is_final_page(record_count: usize, limit: u32) -> bool {
    record_count < limit as usize
}
