use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Discussion {
    pub author: String,
    pub permlink: String,
    pub created: String,
    #[serde(default)]
    pub active_votes: Vec<ActiveVote>,
    #[serde(default)]
    pub beneficiaries: Option<Vec<Beneficiary>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ActiveVote {
    pub voter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Beneficiary {
    pub account: String,
    pub weight: u16,
}
