use crate::db;
use crate::error::Error;
use crate::models::{Review, User};
use crate::state::AppState;
use actix_web::{web, HttpResponse};

pub fn reviews(title: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let conn = state.conn()?;
    let rows = db::find_reviews_by_title(&conn, &title)?;
    Ok(super::page("Reviews", &render(&title, &rows)))
}

fn render(title: &str, rows: &[(Review, User)]) -> String {
    let mut html = format!("<h1>Reviews for {}</h1>\n", title);
    if rows.is_empty() {
        html += "<p>No reviews yet.</p>\n";
    } else {
        html += "<ul>\n";
        for (review, user) in rows {
            html += &format!(
                "<li><p>{}</p><p>&mdash; {}</p></li>\n",
                review.review_text, user.username
            );
        }
        html += "</ul>\n";
    }
    html += &format!(
        "<p><a href=\"/review/{}\">Write a review</a> | <a href=\"/\">Home</a></p>",
        title
    );
    html
}

#[cfg(test)]
pub mod test {
    use super::*;

    fn review_by(id: i32, text: &str, user_id: i32, username: &str) -> (Review, User) {
        (
            Review {
                id,
                movie_title: "Dune".to_string(),
                review_text: text.to_string(),
                user_id,
            },
            User {
                id: user_id,
                username: username.to_string(),
                password: "$argon2d$...".to_string(),
            },
        )
    }

    #[test]
    fn test_render_empty() {
        let html = render("Dune", &[]);
        assert!(html.contains("Reviews for Dune"));
        assert!(html.contains("No reviews yet."));
    }

    #[test]
    fn test_render_reviews_with_authors() {
        let rows = vec![
            review_by(1, "Great", 1, "alice"),
            review_by(2, "Too much sand", 2, "bob"),
        ];
        let html = render("Dune", &rows);
        assert!(html.contains("Great"));
        assert!(html.contains("alice"));
        assert!(html.contains("Too much sand"));
        assert!(html.contains("bob"));
        assert!(!html.contains("No reviews yet."));
    }
}
