use maud::{html, Markup, Render};

/// "Did You Know?" banner shown above the gallery.
#[derive(Debug, Clone)]
pub struct FactBanner<'a> {
    pub fact: &'a str,
}

impl<'a> FactBanner<'a> {
    #[must_use]
    pub const fn new(fact: &'a str) -> Self {
        Self { fact }
    }
}

impl Render for FactBanner<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="space-fact" {
                h3 { "🌟 Did You Know?" }
                p { (self.fact) }
            }
        }
    }
}
