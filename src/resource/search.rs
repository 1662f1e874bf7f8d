use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct SearchForm {
    title: String,
}

pub fn search_form() -> HttpResponse {
    super::page("Search", &render(None))
}

/// Look the typed title up at the metadata provider. A failed lookup
/// renders the same view with no movie data.
pub fn search(form: web::Form<SearchForm>, state: web::Data<AppState>) -> HttpResponse {
    let movie = state.omdb.search(&form.title);
    super::page("Search", &render(movie.as_ref()))
}

fn render(movie: Option<&Value>) -> String {
    let mut body = String::from(
        r#"<h1>Search</h1>
<form action="/search" method="post">
    <input type="text" name="title" placeholder="Movie title" required>
    <button type="submit">Search</button>
</form>
<a href="/">Back</a>"#,
    );
    if let Some(movie) = movie {
        body.push('\n');
        body.push_str(&render_movie(movie));
    }
    body
}

fn render_movie(movie: &Value) -> String {
    let title = movie
        .get("Title")
        .and_then(Value::as_str)
        .unwrap_or("Unknown title");
    let year = movie.get("Year").and_then(Value::as_str).unwrap_or("");
    let plot = movie.get("Plot").and_then(Value::as_str).unwrap_or("");

    let mut html = format!("<h2>{} ({})</h2>\n<p>{}</p>", title, year, plot);
    if let Some(poster) = movie.get("Poster").and_then(Value::as_str) {
        html += &format!("\n<img src=\"{}\" alt=\"Poster\">", poster);
    }
    html += &format!(
        "\n<p><a href=\"/review/{title}\">Write a review</a> | \
         <a href=\"/reviews/{title}\">Read reviews</a></p>",
        title = title
    );
    html
}

#[cfg(test)]
pub mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_without_movie() {
        let body = render(None);
        assert!(body.contains("<form action=\"/search\""));
        assert!(!body.contains("<h2>"));
    }

    #[test]
    fn test_render_movie() {
        let movie = json!({
            "Title": "Dune",
            "Year": "2021",
            "Plot": "Paul Atreides leads nomadic tribes.",
            "Poster": "http://example.com/dune.jpg",
        });
        let html = render_movie(&movie);
        assert!(html.contains("<h2>Dune (2021)</h2>"));
        assert!(html.contains("href=\"/review/Dune\""));
        assert!(html.contains("href=\"/reviews/Dune\""));
        assert!(html.contains("http://example.com/dune.jpg"));
    }

    #[test]
    fn test_render_provider_error_payload_passes_through() {
        // A 200 response with an error marker still renders as movie data.
        let movie = json!({ "Response": "False", "Error": "Movie not found!" });
        let html = render_movie(&movie);
        assert!(html.contains("Unknown title"));
    }
}
