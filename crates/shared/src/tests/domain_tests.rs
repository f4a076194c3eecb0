use super::*;

#[test]
fn numeric_and_string_ids_share_a_key() {
    let from_number: NpcId = serde_json::from_str("7").expect("number id");
    let from_text: NpcId = serde_json::from_str("\"7\"").expect("string id");
    assert_eq!(from_number, from_text);
    assert_eq!(from_number.as_str(), "7");
}

#[test]
fn favor_accepts_numeric_strings() {
    let gift: Gift = serde_json::from_str(
        r#"{"npc": 1, "prop": "10", "favor": " 15 ", "gift_level": "LIKE"}"#,
    )
    .expect("gift");
    assert_eq!(gift.favor, 15);
    assert_eq!(gift.prop, PropId::new("10"));
    assert_eq!(gift.level(), GiftLevel::Like);
}

#[test]
fn favor_rejects_non_numeric_text() {
    let err = serde_json::from_str::<Gift>(
        r#"{"npc": 1, "prop": 10, "favor": "lots", "gift_level": "LOVE"}"#,
    )
    .expect_err("bad favor");
    assert!(err.to_string().contains("favor is not an integer"));
}

#[test]
fn gift_ignores_denormalized_prop_fields() {
    let gift: Gift = serde_json::from_str(
        r#"{"npc": 1, "prop": 10, "favor": -5, "gift_level": "HATE", "prop_name": "Rock"}"#,
    )
    .expect("gift");
    assert!(gift.is_disliked());
    assert_eq!(gift.level(), GiftLevel::Hate);
}

#[test]
fn tags_parse_case_insensitively_with_enum_prefix() {
    assert_eq!(GiftLevel::parse("GiftLevel.LOVE"), GiftLevel::Love);
    assert_eq!(GiftLevel::parse("Dislike"), GiftLevel::Dislike);
    assert_eq!(
        GiftLevel::parse("neutral"),
        GiftLevel::Other("neutral".into())
    );
    assert_eq!(PropType::parse("PropType.COOKABLE_ACK"), PropType::CookableAck);
    assert_eq!(PropType::parse("relic"), PropType::Relic);
}

#[test]
fn records_missing_fields_are_rejected() {
    let err = serde_json::from_str::<Npc>(r#"{"id": 3, "name": "Ginger"}"#).expect_err("npc");
    assert!(err.to_string().contains("missing field `icon`"));

    let err = serde_json::from_str::<Gift>(r#"{"npc": 1, "prop": 10, "favor": 3}"#)
        .expect_err("gift");
    assert!(err.to_string().contains("missing field `gift_level`"));

    let err = serde_json::from_str::<Prop>(
        r#"{"id": 10, "prop_name": "Apple", "prop_icon": "apple", "prop_type": "RELIC"}"#,
    )
    .expect_err("prop");
    assert!(err.to_string().contains("missing field `prop_universality`"));
}

#[test]
fn canonical_keys_drop_enum_prefix() {
    assert_eq!(GiftLevel::parse("GiftLevel.LOVE").key(), "love");
    assert_eq!(GiftLevel::parse("Excellent").key(), "love");
    assert_eq!(GiftLevel::parse("Neutral").key(), "neutral");
    assert_eq!(PropType::parse("PropType.RELIC").key(), "relic");
    assert_eq!(PropType::parse("Gadget").key(), "gadget");
    assert_eq!(tag_key(" Universality.COMMON "), "common");
}
