use crate::error::Error;
use crate::state::AppState;
use crate::{auth, db};
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ReviewForm {
    review_text: String,
}

pub fn review_form(
    title: web::Path<String>,
    id: Identity,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn = state.conn()?;
    auth::require_auth(&conn, &id)?;
    let body = format!(
        "<h1>Review {title}</h1>\n\
         <form action=\"/review/{title}\" method=\"post\">\n\
         <textarea name=\"review_text\" placeholder=\"Your review\" required></textarea><br>\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n\
         <a href=\"/\">Back</a>",
        title = title.as_str()
    );
    Ok(super::page("Write a review", &body))
}

pub fn review(
    title: web::Path<String>,
    form: web::Form<ReviewForm>,
    id: Identity,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn = state.conn()?;
    let user = auth::require_auth(&conn, &id)?;
    if form.review_text.is_empty() {
        return Err(Error::MissingField("review_text"));
    }
    db::insert_review(&conn, &title, &form.review_text, user.id)?;
    Ok(super::redirect("/"))
}
