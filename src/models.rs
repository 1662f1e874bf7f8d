use crate::schema::{reviews, users};
use diesel::prelude::*;

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    /// Argon2-encoded salted hash, never the plaintext.
    pub password: String,
}

#[derive(Queryable)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Insertable)]
#[table_name = "reviews"]
pub struct NewReview {
    pub movie_title: String,
    pub review_text: String,
    pub user_id: i32,
}

#[derive(Queryable)]
pub struct Review {
    pub id: i32,
    pub movie_title: String,
    pub review_text: String,
    pub user_id: i32,
}
