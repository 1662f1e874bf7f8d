use crate::auth;
use crate::error::Error;
use crate::state::AppState;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

pub fn login_form() -> HttpResponse {
    super::page(
        "Log in",
        r#"<h1>Log in</h1>
<form action="/login" method="post">
    <input type="text" name="username" placeholder="Username" required><br>
    <input type="password" name="password" placeholder="Password" required><br>
    <button type="submit">Log in</button>
</form>
<a href="/">Back</a>"#,
    )
}

/// Verify credentials and establish the session. Bad credentials send the
/// visitor back to the form.
pub fn login(
    form: web::Form<LoginForm>,
    id: Identity,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn = state.conn()?;
    match auth::login(&conn, &form.username, &form.password) {
        Ok(user) => {
            id.remember(user.id.to_string());
            Ok(super::redirect("/"))
        }
        Err(Error::InvalidCredentials) => Ok(super::redirect("/login")),
        Err(e) => Err(e),
    }
}
