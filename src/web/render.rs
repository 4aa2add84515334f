//! Server-rendered HTML pages. Small string-building functions with
//! `html-escape` applied to every piece of user data; no template engine.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::db::{Message, Movie};

/// Per-request data every page needs: the owner's display name for the
/// title, whether the viewer is authenticated, and the drained flashes.
pub struct PageContext {
    pub owner_name: Option<String>,
    pub logged_in: bool,
    pub flashes: Vec<String>,
}

impl PageContext {
    fn watchlist_title(&self) -> String {
        self.owner_name.as_ref().map_or_else(
            || "Watchlist".to_string(),
            |name| format!("{name}'s Watchlist"),
        )
    }
}

fn layout(ctx: &PageContext, title: &str, body: &str) -> String {
    let mut nav = String::new();
    nav.push_str("<a href=\"/\">Home</a> <a href=\"/message\">Guestbook</a> <a href=\"/space\">Space</a>");
    if ctx.logged_in {
        nav.push_str(" <a href=\"/settings\">Settings</a> <a href=\"/logout\">Logout</a>");
    } else {
        nav.push_str(" <a href=\"/login\">Login</a>");
    }

    let mut flashes = String::new();
    for message in &ctx.flashes {
        flashes.push_str(&format!(
            "<div class=\"alert\">{}</div>\n",
            encode_text(message)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>body{{max-width:600px;margin:1em auto;font-family:sans-serif}}\
         .alert{{background:#fff3cd;padding:.5em;margin:.5em 0}}\
         .inline-form{{display:inline}}</style>\n\
         </head>\n<body>\n<nav>{nav}</nav>\n{flashes}{body}\n\
         <footer><small>Watchlist</small></footer>\n</body>\n</html>\n",
        title = encode_text(title),
    )
}

pub fn index_page(ctx: &PageContext, movies: &[Movie]) -> String {
    let title = ctx.watchlist_title();
    let mut body = format!("<h2>{}</h2>\n", encode_text(&title));
    body.push_str(&format!("<p>{} Titles</p>\n", movies.len()));

    if ctx.logged_in {
        body.push_str(
            "<form method=\"post\" action=\"/\">\n\
             <input type=\"text\" name=\"title\" placeholder=\"Movie title\" autocomplete=\"off\" required>\n\
             <input type=\"text\" name=\"year\" placeholder=\"Year\" autocomplete=\"off\" required>\n\
             <input type=\"submit\" value=\"Add\">\n\
             </form>\n",
        );
    }

    body.push_str("<ul class=\"movie-list\">\n");
    for movie in movies {
        body.push_str(&format!(
            "<li>{} - {}",
            encode_text(&movie.title),
            encode_text(&movie.year)
        ));
        if ctx.logged_in {
            body.push_str(&format!(
                " <a href=\"/movie/edit/{id}\">Edit</a>\
                 <form class=\"inline-form\" method=\"post\" action=\"/movie/delete/{id}\">\
                 <input type=\"submit\" value=\"Delete\" onclick=\"return confirm('Are you sure?')\">\
                 </form>",
                id = movie.id
            ));
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n");

    layout(ctx, &title, &body)
}

pub fn login_page(ctx: &PageContext) -> String {
    let body = "<h3>Login</h3>\n\
                <form method=\"post\" action=\"/login\">\n\
                <input type=\"text\" name=\"username\" placeholder=\"Username\" required>\n\
                <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\n\
                <input type=\"submit\" value=\"Login\">\n\
                </form>";
    layout(ctx, "Login", body)
}

pub fn settings_page(ctx: &PageContext, current_name: &str) -> String {
    let body = format!(
        "<h3>Settings</h3>\n\
         <form method=\"post\" action=\"/settings\">\n\
         <label for=\"name\">Your Name</label>\n\
         <input type=\"text\" name=\"name\" value=\"{}\" required>\n\
         <input type=\"submit\" value=\"Update\">\n\
         </form>",
        encode_double_quoted_attribute(current_name)
    );
    layout(ctx, "Settings", &body)
}

pub fn edit_page(ctx: &PageContext, movie: &Movie) -> String {
    let body = format!(
        "<h3>Edit item</h3>\n\
         <form method=\"post\" action=\"/movie/edit/{id}\">\n\
         <input type=\"text\" name=\"title\" value=\"{title}\" required>\n\
         <input type=\"text\" name=\"year\" value=\"{year}\" required>\n\
         <input type=\"submit\" value=\"Update\">\n\
         </form>",
        id = movie.id,
        title = encode_double_quoted_attribute(&movie.title),
        year = encode_double_quoted_attribute(&movie.year),
    );
    layout(ctx, "Edit item", &body)
}

pub fn guestbook_page(ctx: &PageContext, messages: &[Message]) -> String {
    let mut body = String::from(
        "<h3>Guestbook</h3>\n\
         <form method=\"post\" action=\"/message\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Your name\" required>\n\
         <textarea name=\"content\" placeholder=\"Leave a message\" required></textarea>\n\
         <input type=\"submit\" value=\"Post\">\n\
         </form>\n<ul class=\"message-list\">\n",
    );
    for message in messages {
        body.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            encode_text(&message.name),
            encode_text(&message.content)
        ));
    }
    body.push_str("</ul>");
    layout(ctx, "Guestbook", &body)
}

pub fn space_page(ctx: &PageContext) -> String {
    let body = "<h3>Space</h3>\n<p>A quiet corner of this watchlist.</p>";
    layout(ctx, "Space", body)
}

fn error_page(heading: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{heading}</title>\n</head>\n<body>\n\
         <h3>{heading}</h3>\n<a href=\"/\">Go Back</a>\n</body>\n</html>\n"
    )
}

pub fn not_found_page() -> String {
    error_page("Page Not Found - 404")
}

pub fn bad_request_page() -> String {
    error_page("Bad Request - 400")
}

pub fn internal_error_page() -> String {
    error_page("Internal Server Error - 500")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous_ctx() -> PageContext {
        PageContext {
            owner_name: Some("Test".to_string()),
            logged_in: false,
            flashes: vec![],
        }
    }

    #[test]
    fn test_index_hides_controls_for_anonymous() {
        let movies = vec![Movie {
            id: 1,
            title: "Test Movie Title".to_string(),
            year: "2020".to_string(),
        }];
        let html = index_page(&anonymous_ctx(), &movies);

        assert!(html.contains("Test's Watchlist"));
        assert!(html.contains("Test Movie Title"));
        assert!(!html.contains("Settings"));
        assert!(!html.contains("Logout"));
        assert!(!html.contains("Edit"));
        assert!(!html.contains("Delete"));
    }

    #[test]
    fn test_index_shows_controls_when_logged_in() {
        let ctx = PageContext {
            logged_in: true,
            ..anonymous_ctx()
        };
        let movies = vec![Movie {
            id: 1,
            title: "Leon".to_string(),
            year: "1994".to_string(),
        }];
        let html = index_page(&ctx, &movies);

        assert!(html.contains("Settings"));
        assert!(html.contains("Logout"));
        assert!(html.contains("/movie/edit/1"));
        assert!(html.contains("/movie/delete/1"));
    }

    #[test]
    fn test_user_data_is_escaped() {
        let movies = vec![Movie {
            id: 1,
            title: "<script>alert(1)</script>".to_string(),
            year: "2020".to_string(),
        }];
        let html = index_page(&anonymous_ctx(), &movies);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_pages() {
        let html = not_found_page();
        assert!(html.contains("Page Not Found - 404"));
        assert!(html.contains("Go Back"));
    }
}
