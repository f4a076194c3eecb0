use crate::{view::Element, Variant};

pub const GROUP_ICON: &str = "group_icon";
pub const TITLE: &str = "title";
pub const ADDITIONAL_INFO: &str = "additional_info";
pub const ITEMS: &str = "items";
pub const ITEM_ICON: &str = "item_icon";
pub const ITEM_TITLE: &str = "item_title";
pub const ADDITIONAL_ITEM_INFO: &str = "additional_item_info";

/// A fresh, unpopulated group: one per npc.
pub fn group_template(variant: Variant) -> Element {
    let mut header = Element::new("header");
    if variant == Variant::Rich {
        header.append(
            Element::new("img")
                .with_class(GROUP_ICON)
                .with_attr("alt", ""),
        );
    }
    header.append(Element::new("h2").with_class(TITLE));
    header.append(Element::new("span").with_class(ADDITIONAL_INFO));

    Element::new("section")
        .with_class("item_group")
        .with_child(header)
        .with_child(Element::new("ul").with_class(ITEMS))
}

/// A fresh, unpopulated cell: one per gift.
pub fn item_template(variant: Variant) -> Element {
    let mut cell = Element::new("li");
    if variant == Variant::Rich {
        cell.append(
            Element::new("img")
                .with_class(ITEM_ICON)
                .with_attr("alt", ""),
        );
    }
    cell.with_child(Element::new("span").with_class(ITEM_TITLE))
        .with_child(Element::new("span").with_class(ADDITIONAL_ITEM_INFO))
}
