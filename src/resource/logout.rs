use crate::auth;
use crate::error::Error;
use crate::state::AppState;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};

pub fn logout(id: Identity, state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let conn = state.conn()?;
    auth::require_auth(&conn, &id)?;
    id.forget();
    Ok(super::redirect("/"))
}
