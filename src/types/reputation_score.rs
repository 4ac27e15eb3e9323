use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReputationScore {
    pub csi: Option<f64>,
}
