use std::{fmt, str::FromStr};

use crate::view::Element;

pub const SELECTED_CLASS: &str = "selected";

/// Visibility toggles on the results container. Each one is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Relics,
    Cooking,
    AckCooking,
    Universals,
    Disliked,
    OnlySelected,
}

impl Filter {
    pub const ALL: [Filter; 6] = [
        Filter::Relics,
        Filter::Cooking,
        Filter::AckCooking,
        Filter::Universals,
        Filter::Disliked,
        Filter::OnlySelected,
    ];

    pub fn control_id(self) -> &'static str {
        match self {
            Self::Relics => "filter_relics",
            Self::Cooking => "filter_cooking",
            Self::AckCooking => "filter_ack_cooking",
            Self::Universals => "filter_universals",
            Self::Disliked => "filter_disliked",
            Self::OnlySelected => "filter_onlyselected",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Relics => "hide-relics",
            Self::Cooking => "hide-cookables",
            Self::AckCooking => "hide-cookables_ack",
            Self::Universals => "hide-universals",
            Self::Disliked => "hide-dislikes",
            Self::OnlySelected => "only-selected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Relics => "Hide relics",
            Self::Cooking => "Hide cookables",
            Self::AckCooking => "Hide ACK cookables",
            Self::Universals => "Hide universals",
            Self::Disliked => "Hide dislikes",
            Self::OnlySelected => "Only selected",
        }
    }

    pub fn control(self, active: bool) -> Element {
        Element::new("button")
            .with_id(self.control_id())
            .with_class("filter")
            .with_attr("type", "button")
            .with_attr("data-filter", self.marker())
            .with_attr("aria-pressed", active.to_string())
            .with_text(self.label())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Relics => "relics",
            Self::Cooking => "cooking",
            Self::AckCooking => "ack-cooking",
            Self::Universals => "universals",
            Self::Disliked => "disliked",
            Self::OnlySelected => "only-selected",
        };
        f.write_str(name)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|filter| filter.to_string() == wanted)
            .ok_or_else(|| {
                let known = Self::ALL.map(|filter| filter.to_string()).join(", ");
                format!("unknown filter `{raw}` (expected one of: {known})")
            })
    }
}

/// The `.results` container that groups are appended into and filter
/// markers are toggled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    root: Element,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self {
            root: Element::new("div").with_class("results"),
        }
    }
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, group: Element) {
        self.root.append(group);
    }

    /// Flips the filter's marker and reports whether it is now active.
    pub fn toggle(&mut self, filter: Filter) -> bool {
        self.root.toggle_class(filter.marker())
    }

    pub fn is_active(&self, filter: Filter) -> bool {
        self.root.has_class(filter.marker())
    }

    pub fn element(&self) -> &Element {
        &self.root
    }

    pub fn into_element(self) -> Element {
        self.root
    }
}

/// A rendered gift cell with its selection marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    root: Element,
}

impl Cell {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn toggle_selected(&mut self) -> bool {
        self.root.toggle_class(SELECTED_CLASS)
    }

    pub fn is_selected(&self) -> bool {
        self.root.has_class(SELECTED_CLASS)
    }

    pub fn into_element(self) -> Element {
        self.root
    }
}
