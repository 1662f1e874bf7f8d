use crate::error::Error;
use crate::models::{NewReview, NewUser, Review, User};
use crate::schema::{reviews, users};
use crate::PooledConnection;
use diesel::prelude::*;

/// Exact-match username lookup, no case folding.
pub fn find_user_by_username(
    conn: &PooledConnection,
    username: &str,
) -> Result<Option<User>, Error> {
    let user = users::table
        .filter(users::username.eq(username))
        .first(conn)
        .optional()?;
    Ok(user)
}

pub fn find_user_by_id(conn: &PooledConnection, user_id: i32) -> Result<Option<User>, Error> {
    let user = users::table.find(user_id).first(conn).optional()?;
    Ok(user)
}

/// Insert a new user in a single atomic statement. A duplicate username
/// surfaces as `Error::ConstraintViolation` from the unique constraint;
/// there is deliberately no prior existence check.
pub fn insert_user(
    conn: &PooledConnection,
    username: &str,
    password_hash: &str,
) -> Result<User, Error> {
    let new_user = NewUser {
        username: username.to_string(),
        password: password_hash.to_string(),
    };

    let user = diesel::insert_into(users::table)
        .values(&new_user)
        .get_result(conn)?;
    Ok(user)
}

pub fn insert_review(
    conn: &PooledConnection,
    movie_title: &str,
    review_text: &str,
    user_id: i32,
) -> Result<Review, Error> {
    let new_review = NewReview {
        movie_title: movie_title.to_string(),
        review_text: review_text.to_string(),
        user_id,
    };

    let review = diesel::insert_into(reviews::table)
        .values(&new_review)
        .get_result(conn)?;
    Ok(review)
}

/// All reviews whose title is an exact string match, oldest first, each
/// joined to its author.
pub fn find_reviews_by_title(
    conn: &PooledConnection,
    movie_title: &str,
) -> Result<Vec<(Review, User)>, Error> {
    let rows = reviews::table
        .inner_join(users::table)
        .filter(reviews::movie_title.eq(movie_title))
        .order(reviews::id.asc())
        .load(conn)?;
    Ok(rows)
}
