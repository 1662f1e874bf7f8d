pub mod home;
pub mod login;
pub mod logout;
pub mod register;
pub mod review;
pub mod reviews;
pub mod search;

pub use home::home;
pub use login::{login, login_form};
pub use logout::logout;
pub use register::{register, register_form};
pub use review::{review, review_form};
pub use reviews::reviews;
pub use search::{search, search_form};

use actix_web::http::header;
use actix_web::HttpResponse;

/// Wrap a view body in the shared page skeleton.
fn page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}\n</body>\n</html>",
            title, body
        ))
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .header(header::LOCATION, location)
        .finish()
}
