use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use failure::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "username is already taken")]
    DuplicateUsername,
    #[fail(display = "invalid username or password")]
    InvalidCredentials,
    #[fail(display = "authentication required")]
    Unauthenticated,
    #[fail(display = "constraint violation: {}", _0)]
    ConstraintViolation(String),
    #[fail(display = "metadata provider unavailable: {}", _0)]
    UpstreamUnavailable(String),
    #[fail(display = "missing required field: {}", _0)]
    MissingField(&'static str),
    #[fail(display = "database error: {}", _0)]
    Database(String),
    #[fail(display = "connection pool error: {}", _0)]
    Pool(String),
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .header(header::LOCATION, location)
        .finish()
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Form-flow failures go back to the originating form.
            Error::DuplicateUsername => redirect("/register"),
            Error::InvalidCredentials => redirect("/login"),
            Error::Unauthenticated => redirect("/login"),
            Error::MissingField(_) => HttpResponse::BadRequest().finish(),
            Error::UpstreamUnavailable(_) => HttpResponse::BadGateway().finish(),
            Error::Pool(_) => HttpResponse::ServiceUnavailable().finish(),
            Error::ConstraintViolation(_) | Error::Database(_) => {
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

impl From<DieselError> for Error {
    fn from(e: DieselError) -> Error {
        match e {
            // Concurrent inserts of the same username both land here.
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Error::ConstraintViolation(info.message().to_string())
            }
            other => Error::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use actix_web::http::StatusCode;

    fn location(resp: &HttpResponse) -> &str {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    #[test]
    fn test_auth_failures_redirect() {
        let resp = Error::DuplicateUsername.error_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/register");

        let resp = Error::InvalidCredentials.error_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/login");

        let resp = Error::Unauthenticated.error_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/login");
    }

    #[test]
    fn test_storage_failures_are_server_errors() {
        let resp = Error::Database("oops".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = Error::Pool("no connections".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = Error::MissingField("review_text").error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
