use catalog::GiftLink;
use shared::domain::tag_key;

pub const DISLIKE_CLASS: &str = "gift_dislike";

/// Style classes for a gift cell, applied together as the cell's class list.
///
/// Tags go through the same canonical keys the preference report uses, so
/// `GiftLevel.LOVE` and `love` both yield `gift_level-love`.
pub fn gift_classes(link: &GiftLink<'_>) -> Vec<String> {
    let mut classes = vec![
        format!("gift_level-{}", link.gift.level().key()),
        format!("gift_prop-{}", link.prop.kind().key()),
        format!("gift_uni-{}", tag_key(&link.prop.prop_universality)),
    ];
    if link.gift.is_disliked() {
        classes.push(DISLIKE_CLASS.to_string());
    }
    classes
}
