use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[get("/version")]
pub async fn index() -> Result<impl Responder, Error> {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

    Ok(web::Json(Response {
        name: NAME,
        version: VERSION,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response<'a> {
    pub name: &'a str,
    pub version: Option<&'a str>,
}
