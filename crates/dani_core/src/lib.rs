//! Dani core: the ranking domain, free of IO.
//!
//! Everything here is pure: the closed set of play styles, the fixed dan rank
//! table, the shape of one outbound ranking request and the URLs it targets.
mod endpoint;
mod play_style;
mod rank;
mod request;

pub use endpoint::{EndpointError, RankingEndpoint, DEFAULT_BASE_URL, DEFAULT_GAME_VERSION};
pub use play_style::PlayStyle;
pub use rank::{dan_ranks, DanRank, DAN_RANK_COUNT};
pub use request::{is_final_page, FetchRequest, RELEASE_9_10_KAIDEN, RESULT_LIMIT};
