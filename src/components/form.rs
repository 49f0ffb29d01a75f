//! Form components for maud templates.
//!
//! This module provides the small set of form elements the search controls
//! are built from, matching the styles in `static/css/style.css`.

use maud::{html, Markup, Render};

use crate::gallery::SpaceFact;

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
    /// Optional form ID
    pub id: Option<&'a str>,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
            id: None,
        }
    }

    /// Create a GET form.
    #[must_use]
    pub fn get(action: &'a str, content: Markup) -> Self {
        Self::new(action, "get", content)
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] id=[self.id] {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: &'a str,
    /// Input type ("date", "hidden", ...)
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    /// Optional ID attribute
    pub id: Option<&'a str>,
    /// Minimum value
    pub min: Option<&'a str>,
    /// Maximum value
    pub max: Option<&'a str>,
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            value: None,
            id: None,
            min: None,
            max: None,
        }
    }

    /// Create a date input.
    #[must_use]
    pub fn date(name: &'a str) -> Self {
        Self::new(name, "date")
    }

    /// Create a hidden input with a value.
    #[must_use]
    pub fn hidden(name: &'a str, value: &'a str) -> Self {
        Self::new(name, "hidden").value(value)
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the value if Some.
    #[must_use]
    pub fn value_opt(mut self, value: Option<&'a str>) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn min(mut self, min: &'a str) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: &'a str) -> Self {
        self.max = Some(max);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                value=[self.value]
                id=[self.id]
                min=[self.min]
                max=[self.max];
        }
    }
}

/// A form group container for label + input.
#[derive(Debug)]
pub struct FormGroup<'a> {
    /// Label text
    pub label: &'a str,
    /// Input ID (also used for label's `for` attribute)
    pub id: &'a str,
    /// The input element
    pub input: Markup,
}

impl<'a> FormGroup<'a> {
    #[must_use]
    pub fn new(label: &'a str, id: &'a str, input: Markup) -> Self {
        Self { label, id, input }
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="form-group" {
                label for=(self.id) { (self.label) }
                (self.input)
            }
        }
    }
}

/// The date-range search controls.
///
/// Both the button and Enter submit the form; the enhancement script takes
/// over the submission when it is loaded.
#[derive(Debug)]
pub struct SearchForm<'a> {
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
    /// Earliest selectable date.
    pub min: &'a str,
    /// Latest selectable date.
    pub max: &'a str,
    /// Identifies this page to the query sequencer.
    pub gallery_id: &'a str,
    /// Banner currently shown, kept if the search is refused.
    pub fact: SpaceFact,
}

impl Render for SearchForm<'_> {
    fn render(&self) -> Markup {
        let fact = self.fact.index().to_string();
        let controls = html! {
            (FormGroup::new(
                "Start date",
                "startDate",
                Input::date("start_date")
                    .id("startDate")
                    .value_opt(self.start)
                    .min(self.min)
                    .max(self.max)
                    .render(),
            ))
            (FormGroup::new(
                "End date",
                "endDate",
                Input::date("end_date")
                    .id("endDate")
                    .value_opt(self.end)
                    .min(self.min)
                    .max(self.max)
                    .render(),
            ))
            (Input::hidden("gallery", self.gallery_id))
            (Input::hidden("fact", &fact))
            button type="submit" { "Get Space Images" }
        };

        Form::get("/", controls)
            .class("filters")
            .id("search-form")
            .render()
    }
}
