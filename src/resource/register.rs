use crate::auth;
use crate::error::Error;
use crate::state::AppState;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterForm {
    username: String,
    password: String,
}

pub fn register_form() -> HttpResponse {
    super::page(
        "Register",
        r#"<h1>Register</h1>
<form action="/register" method="post">
    <input type="text" name="username" placeholder="Username" required><br>
    <input type="password" name="password" placeholder="Password" required><br>
    <button type="submit">Register</button>
</form>
<a href="/">Back</a>"#,
    )
}

/// Create the account and log the new user straight in. A taken username
/// sends the visitor back to the form.
pub fn register(
    form: web::Form<RegisterForm>,
    id: Identity,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn = state.conn()?;
    match auth::register(&state, &conn, &form.username, &form.password) {
        Ok(user) => {
            id.remember(user.id.to_string());
            Ok(super::redirect("/"))
        }
        Err(Error::DuplicateUsername) => Ok(super::redirect("/register")),
        Err(e) => Err(e),
    }
}
