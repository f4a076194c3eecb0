//! Full-document output: shell, people section and the toggle script.

use catalog::GiftCatalog;
use shared::error::RenderError;

use crate::{
    filters::{Filter, ResultsView, SELECTED_CLASS},
    render_results,
    view::Element,
    RenderOptions, Variant,
};

/// Placeholder in a page shell that the people section replaces.
pub const RESULTS_MARKER: &str = "<!-- results -->";

const BUILTIN_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Gift Guide</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <nav class="tabs">
    <a href="#people">People</a>
  </nav>
"##;

const BUILTIN_TAIL: &str = "</body>\n</html>\n";

const OPEN_ON_PEOPLE: &str = r##"if (location.hash === "") {
  history.replaceState({}, "", "#people");
}"##;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShell {
    head: String,
    tail: String,
}

impl Default for PageShell {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PageShell {
    pub fn builtin() -> Self {
        Self {
            head: BUILTIN_HEAD.to_string(),
            tail: BUILTIN_TAIL.to_string(),
        }
    }

    /// Splits a shell document at [`RESULTS_MARKER`].
    pub fn parse(template: &str) -> Result<Self, RenderError> {
        let (head, tail) = template
            .split_once(RESULTS_MARKER)
            .ok_or_else(|| RenderError::MissingNode(RESULTS_MARKER.to_string()))?;
        Ok(Self {
            head: head.trim_end_matches([' ', '\t']).to_string(),
            tail: tail.strip_prefix('\n').unwrap_or(tail).to_string(),
        })
    }
}

pub fn people_section(results: ResultsView, variant: Variant) -> Element {
    let mut section = Element::new("section").with_id("people");
    if variant == Variant::Rich {
        let mut controls = Element::new("nav").with_class("filters");
        for filter in Filter::ALL {
            controls.append(filter.control(results.is_active(filter)));
        }
        section.append(controls);
    }
    section.append(results.into_element());
    section
}

pub fn page_script(variant: Variant) -> Element {
    let mut script = OPEN_ON_PEOPLE.to_string();
    if variant == Variant::Rich {
        script.push_str(&format!(
            r##"
const results = document.querySelector("#people .results");
document.querySelectorAll("[data-filter]").forEach(control => {{
  control.addEventListener("click", () => {{
    const active = results.classList.toggle(control.dataset.filter);
    control.setAttribute("aria-pressed", String(active));
  }});
}});
document.querySelectorAll(".items li").forEach(item => {{
  item.addEventListener("click", () => item.classList.toggle("{SELECTED_CLASS}"));
}});"##
        ));
    }
    Element::new("script").with_raw(script)
}

/// Renders the catalog into a complete HTML document.
pub fn render_page(
    shell: &PageShell,
    catalog: &GiftCatalog,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let results = render_results(catalog, options)?;
    let section = people_section(results, options.variant);

    let mut out = String::with_capacity(shell.head.len() + shell.tail.len() + 4096);
    out.push_str(&shell.head);
    section.write_html(&mut out, 1)?;
    page_script(options.variant).write_html(&mut out, 1)?;
    out.push_str(&shell.tail);
    Ok(out)
}
