use serde::Deserialize;

/// A submitted talk proposal. `id` is 0 until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct Talk {
    pub id: i64,
    pub twitter_username: String,
    pub title: String,
    pub summary: String,
    pub timezone: String,
}

/// Form data from the talk submission form. Absent fields decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TalkForm {
    #[serde(rename = "twitter-username")]
    pub twitter_username: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "time-zone")]
    pub time_zone: String,
}

impl TalkForm {
    /// Decode a URL-encoded body. A body that cannot be decoded is treated
    /// as a submission with every field left empty.
    pub fn from_body(body: &[u8]) -> Self {
        serde_urlencoded::from_bytes(body).unwrap_or_else(|e| {
            log::warn!("Undecodable talk form body: {e}");
            Self::default()
        })
    }

    /// Build the candidate talk. Leading `@`s on the handle are dropped.
    pub fn into_talk(self) -> Talk {
        Talk {
            id: 0,
            twitter_username: self.twitter_username.trim_start_matches('@').to_string(),
            title: self.title,
            summary: self.summary,
            timezone: self.time_zone,
        }
    }
}
