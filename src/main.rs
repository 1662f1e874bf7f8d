#[macro_use]
extern crate diesel;

mod auth;
mod config;
mod db;
mod error;
mod hash;
mod models;
mod omdb;
mod resource;
mod schema;
mod state;

use actix_identity::{CookieIdentityPolicy, IdentityService};
use actix_web::{middleware, web, App, HttpServer};
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager};
use log::info;

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type PooledConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Route guide (keep updated!)
/// - /                  GET: landing page
/// - /register          GET: form, POST: create account and log in
/// - /login             GET: form, POST: log in
/// - /logout            GET: log out (login required)
/// - /search            GET: form, POST: look a title up via OMDb
/// - /review/{title}    GET: form, POST: save a review (login required)
/// - /reviews/{title}   GET: all reviews for a title

fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    std::env::set_var("RUST_LOG", "movie_reviews=info,actix_web=info,diesel=info");
    env_logger::init();

    let config = config::Config::from_env();

    let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
    let pool: Pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Pool creation failed.");

    let state = web::Data::new(state::AppState::new(pool, config));

    HttpServer::new(move || {
        info!("Starting HTTP server...");
        App::new()
            .register_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(IdentityService::new(
                CookieIdentityPolicy::new(&state.config.cookie_key)
                    .name("auth-cookie")
                    .path("/")
                    .domain(state.config.domain.as_str())
                    .max_age_time(chrono::Duration::days(1))
                    .secure(false),
            ))
            .service(web::resource("/").route(web::get().to(resource::home)))
            .service(
                web::resource("/register")
                    .route(web::get().to(resource::register_form))
                    .route(web::post().to(resource::register)),
            )
            .service(
                web::resource("/login")
                    .route(web::get().to(resource::login_form))
                    .route(web::post().to(resource::login)),
            )
            .service(web::resource("/logout").route(web::get().to(resource::logout)))
            .service(
                web::resource("/search")
                    .route(web::get().to(resource::search_form))
                    .route(web::post().to(resource::search)),
            )
            .service(
                web::resource("/review/{title}")
                    .route(web::get().to(resource::review_form))
                    .route(web::post().to(resource::review)),
            )
            .service(web::resource("/reviews/{title}").route(web::get().to(resource::reviews)))
    })
    .bind("localhost:8080")
    .unwrap()
    .run()
    .unwrap();

    Ok(())
}
