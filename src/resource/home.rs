use crate::auth;
use crate::error::Error;
use crate::state::AppState;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};

pub fn home(id: Identity, state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let conn = state.conn()?;
    let body = match auth::principal(&conn, &id)? {
        Some(user) => format!(
            "<h1>Movie Reviews</h1>\n\
             <p>Welcome back, {}.</p>\n\
             <p><a href=\"/search\">Search for a movie</a> | <a href=\"/logout\">Log out</a></p>",
            user.username
        ),
        None => "<h1>Movie Reviews</h1>\n\
                 <p>Search for movies and share what you thought of them.</p>\n\
                 <p><a href=\"/register\">Register</a> | <a href=\"/login\">Log in</a> | \
                 <a href=\"/search\">Search</a></p>"
            .to_string(),
    };
    Ok(super::page("Movie Reviews", &body))
}
