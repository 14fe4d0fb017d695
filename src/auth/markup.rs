use maud::{Markup, Render, html};

use super::Provider;

pub const HEADING: &str = "Login or Signup";
pub const PILL_CLASS: &str = "pill";

pub struct Login;

impl Render for Login {
    fn render(&self) -> Markup {
        html! {
            .Auth {
                h1 { (HEADING) }
                @for provider in Provider::ALL {
                    (provider)
                }
            }
        }
    }
}

impl Render for Provider {
    fn render(&self) -> Markup {
        html! {
            button .(PILL_CLASS) type="button" { (self.label()) }
        }
    }
}

#[cfg(test)]
mod test {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn should_render_login() {
        let expected = concat!(
            r#"<div class="Auth">"#,
            "<h1>Login or Signup</h1>",
            r#"<button class="pill" type="button">Google</button>"#,
            r#"<button class="pill" type="button">Atlassian</button>"#,
            r#"<button class="pill" type="button">Github</button>"#,
            "</div>"
        );

        let actual = Login.render().into_string();

        assert_eq!(actual, expected);
    }

    #[test]
    fn should_render_provider() {
        let expected = r#"<button class="pill" type="button">Atlassian</button>"#;

        let actual = Provider::Atlassian.render().into_string();

        assert_eq!(actual, expected);
    }

    #[test]
    fn should_render_identical_markup_every_time() {
        let first = Login.render().into_string();

        for _ in 0..10 {
            assert_eq!(Login.render().into_string(), first);
        }
    }

    #[test]
    fn should_wrap_view_in_single_auth_container() {
        let fragment = Html::parse_fragment(&Login.render().into_string());
        let container = Selector::parse("div.Auth").unwrap();

        let containers = fragment.select(&container).collect::<Vec<_>>();

        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].value().attr("class"), Some("Auth"));
    }

    #[test]
    fn should_render_single_heading_and_buttons_in_order() {
        let fragment = Html::parse_fragment(&Login.render().into_string());
        let h1 = Selector::parse("h1").unwrap();
        let button = Selector::parse("button").unwrap();

        let headings = fragment
            .select(&h1)
            .map(|e| e.text().collect::<String>())
            .collect::<Vec<_>>();
        let labels = fragment
            .select(&button)
            .map(|e| e.text().collect::<String>())
            .collect::<Vec<_>>();

        assert_eq!(headings, vec!["Login or Signup"]);
        assert_eq!(labels, vec!["Google", "Atlassian", "Github"]);
    }

    #[test]
    fn should_share_pill_class_and_attach_no_handlers() {
        let fragment = Html::parse_fragment(&Login.render().into_string());
        let button = Selector::parse("button").unwrap();

        for b in fragment.select(&button) {
            let mut attrs = b.value().attrs().collect::<Vec<_>>();
            attrs.sort();
            assert_eq!(attrs, vec![("class", "pill"), ("type", "button")]);
        }

        assert_eq!(fragment.select(&button).count(), 3);
    }
}
