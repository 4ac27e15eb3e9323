use actix_web::{post, web, HttpRequest, HttpResponse, Result};

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::dispatch,
    types::ChatMessage,
};

#[post("/message")]
pub async fn index(
    state: web::Data<AppState<State>>,
    message: web::Json<ChatMessage>,
    req: HttpRequest,
) -> Result<HttpResponse, Error> {
    let auth = match req.headers().get("authorization") {
        Some(item) => Some(item.to_str().map_err(|_| Error::Unauthorized())?),
        None => None,
    };

    if !state.config.is_authorized(auth) {
        return Err(Error::Unauthorized());
    }

    match dispatch(&state, &message).await {
        Some(reply) => Ok(HttpResponse::Ok().json(reply)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}
