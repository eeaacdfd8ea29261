use crate::templates::components::{site_footer, site_header, HeaderVm};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, header: &HeaderVm, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Stays" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body class="min-h-screen bg-white" {
                (site_header(header))
                main {
                    (content)
                }
                (site_footer())
            }
        }
    }
}

/// Bare document with no header or footer (loading screen).
pub fn blank_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Stays" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (content)
            }
        }
    }
}
