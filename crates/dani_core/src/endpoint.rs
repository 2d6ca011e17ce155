use url::Url;

use crate::{DanRank, PlayStyle};

pub const DEFAULT_BASE_URL: &str = "https://p.eagate.573.jp";
/// IIDX 31 EPOLIS.
pub const DEFAULT_GAME_VERSION: u32 = 31;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid ranking base url {base}: {message}")]
    InvalidBase { base: String, message: String },
}

/// Location of the dan ranking pages for one game version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEndpoint {
    base: Url,
    version: u32,
}

impl RankingEndpoint {
    pub fn new(base: &str, version: u32) -> Result<Self, EndpointError> {
        let base = Url::parse(base).map_err(|err| EndpointError::InvalidBase {
            base: base.to_string(),
            message: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(EndpointError::InvalidBase {
                base: base.to_string(),
                message: "url cannot be a base".into(),
            });
        }
        Ok(Self { base, version })
    }

    /// JSON endpoint the ranking rows are posted from.
    pub fn request_url(&self) -> Url {
        self.at(&format!("game/2dx/{}/ranking/json/dani.html", self.version))
    }

    /// Display page a browser would be on when it issues the JSON request.
    pub fn referer_url(&self, rank: &DanRank, play_style: PlayStyle) -> Url {
        let mut url = self.at(&format!("game/2dx/{}/ranking/dani.html", self.version));
        url.query_pairs_mut()
            .append_pair("grade_id", &rank.grade_id.to_string())
            .append_pair("display", "1")
            .append_pair("play_style", &play_style.code().to_string());
        url
    }

    fn at(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}/{path}"));
        url.set_query(None);
        url
    }
}
