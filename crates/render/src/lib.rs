//! Projects a joined [`GiftCatalog`] into the gift guide page.

use std::{fmt, str::FromStr};

use catalog::{GiftCatalog, GiftLink, NpcView};
use shared::{domain::PropId, error::RenderError};
use tracing::{debug, info, warn};

pub mod classify;
pub mod filters;
pub mod gate;
pub mod page;
pub mod templates;
pub mod view;

use filters::{Cell, Filter, ResultsView};
use view::Element;

/// `Rich` adds icons, cell classification, filter controls and selection;
/// `Minimal` renders names and numbers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Rich,
    Minimal,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rich => f.write_str("rich"),
            Self::Minimal => f.write_str("minimal"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rich" => Ok(Self::Rich),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!("unknown variant `{other}` (expected rich or minimal)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub variant: Variant,
    pub image_root: String,
    /// Filters active when the page opens.
    pub hidden: Vec<Filter>,
    /// Props whose cells start out selected.
    pub selected: Vec<PropId>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Rich,
            image_root: "images".into(),
            hidden: Vec::new(),
            selected: Vec::new(),
        }
    }
}

/// Builds one group per npc, in dataset order, into a results container.
pub fn render_results(
    catalog: &GiftCatalog,
    options: &RenderOptions,
) -> Result<ResultsView, RenderError> {
    let mut results = ResultsView::new();
    let mut cells = 0;
    for npc in catalog.npcs() {
        let (group, rendered) = render_group(&npc, options)?;
        results.append(group);
        cells += rendered;
    }

    match options.variant {
        Variant::Rich => {
            for filter in &options.hidden {
                let active = results.toggle(*filter);
                debug!(%filter, active, "filter toggled");
            }
        }
        Variant::Minimal if !options.hidden.is_empty() => {
            warn!("filters are not available in the minimal variant; ignoring");
        }
        Variant::Minimal => {}
    }
    if options.variant == Variant::Minimal && !options.selected.is_empty() {
        warn!("cell selection is not available in the minimal variant; ignoring");
    }

    info!(variant = %options.variant, groups = catalog.npcs().count(), cells, "results rendered");
    Ok(results)
}

fn render_group(npc: &NpcView<'_>, options: &RenderOptions) -> Result<(Element, usize), RenderError> {
    let mut group = templates::group_template(options.variant);
    group
        .slot_mut(templates::TITLE)?
        .set_text(npc.npc.name.as_str());
    group
        .slot_mut(templates::ADDITIONAL_INFO)?
        .set_text(npc.npc.birthday.as_str());
    if options.variant == Variant::Rich {
        group
            .slot_mut(templates::GROUP_ICON)?
            .set_attr("src", icon_path(&options.image_root, "npcs", &npc.npc.icon));
    }

    let items = group.slot_mut(templates::ITEMS)?;
    let mut rendered = 0;
    for link in npc.links() {
        items.append(render_cell(&link, options)?.into_element());
        rendered += 1;
    }
    Ok((group, rendered))
}

fn render_cell(link: &GiftLink<'_>, options: &RenderOptions) -> Result<Cell, RenderError> {
    let mut root = templates::item_template(options.variant);
    root.slot_mut(templates::ITEM_TITLE)?
        .set_text(link.prop.prop_name.as_str());
    root.slot_mut(templates::ADDITIONAL_ITEM_INFO)?
        .set_text(link.gift.favor.to_string());

    if options.variant == Variant::Minimal {
        return Ok(Cell::new(root));
    }

    root.slot_mut(templates::ITEM_ICON)?
        .set_attr("src", icon_path(&options.image_root, "items", &link.prop.prop_icon));
    let classes = classify::gift_classes(link);
    root.set_classes(classes.iter().map(String::as_str));

    let mut cell = Cell::new(root);
    if options.selected.contains(&link.prop.id) {
        cell.toggle_selected();
    }
    Ok(cell)
}

fn icon_path(root: &str, kind: &str, icon: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        format!("{kind}/{icon}.png")
    } else {
        format!("{root}/{kind}/{icon}.png")
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
