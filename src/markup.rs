use maud::{DOCTYPE, Markup, Render, html};

use crate::document::ROOT;

pub const TITLE: &str = "Director of Me";

struct Head<'a> {
    title: &'a str,
    offline: bool,
}

impl Render for Head<'_> {
    fn render(&self) -> Markup {
        html! {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (self.title) }

                link rel="stylesheet" href="/static/index.css";
                link rel="stylesheet" href="/static/auth.css";

                @if self.offline {
                    script src="/static/register-sw.js" defer {}
                }
            }
        }
    }
}

/// Default host document: an empty mount container in a bare page.
pub struct Shell {
    offline: bool,
}

impl Shell {
    pub fn new(offline: bool) -> Self {
        Self { offline }
    }
}

impl Render for Shell {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                (Head { title: TITLE, offline: self.offline })

                body {
                    div id=(ROOT) {}
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_render_head() {
        let expected = concat!(
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>Director of Me</title>",
            r#"<link rel="stylesheet" href="/static/index.css">"#,
            r#"<link rel="stylesheet" href="/static/auth.css">"#,
            "</head>"
        );

        let actual = Head {
            title: TITLE,
            offline: false,
        }
        .render()
        .into_string();

        assert_eq!(actual, expected);
    }

    #[test]
    fn should_render_head_with_worker_registration() {
        let actual = Head {
            title: TITLE,
            offline: true,
        }
        .render()
        .into_string();

        assert!(actual.ends_with(r#"<script src="/static/register-sw.js" defer></script></head>"#));
    }

    #[test]
    fn should_render_shell() {
        let expected = concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>Director of Me</title>",
            r#"<link rel="stylesheet" href="/static/index.css">"#,
            r#"<link rel="stylesheet" href="/static/auth.css">"#,
            "</head>",
            r#"<body><div id="root"></div></body>"#,
            "</html>"
        );

        let actual = Shell::new(false).render().into_string();

        assert_eq!(actual, expected);
    }
}
