use shared::domain::GiftLevel;

use super::{report::PreferenceReport, *};

fn npc(id: &str, name: &str) -> Npc {
    Npc {
        id: NpcId::new(id),
        name: name.into(),
        icon: format!("{}_icon", name.to_lowercase()),
        birthday: "Spring 1".into(),
    }
}

fn prop(id: &str, name: &str) -> Prop {
    Prop {
        id: PropId::new(id),
        prop_name: name.into(),
        prop_icon: name.to_lowercase(),
        prop_type: "OTHER".into(),
        prop_universality: "NONE".into(),
    }
}

fn gift(npc: &str, prop: &str, favor: i64, level: &str) -> Gift {
    Gift {
        npc: NpcId::new(npc),
        prop: PropId::new(prop),
        favor,
        gift_level: level.into(),
    }
}

fn sample() -> GiftCatalog {
    GiftCatalog::build(
        vec![npc("1", "Ginger"), npc("2", "Mint")],
        vec![prop("10", "Apple"), prop("11", "Pie"), prop("12", "Rock")],
        vec![
            gift("1", "10", 3, "LIKE"),
            gift("1", "11", 7, "LOVE"),
            gift("1", "12", -5, "HATE"),
            gift("2", "10", 7, "LOVE"),
            gift("2", "12", 7, "LOVE"),
            gift("2", "11", 7, "LOVE"),
        ],
    )
    .expect("catalog")
}

fn favors(view: &NpcView<'_>) -> Vec<i64> {
    view.links().map(|link| link.gift.favor).collect()
}

#[test]
fn single_link_is_attached_to_both_sides() {
    let catalog = GiftCatalog::build(
        vec![npc("1", "Ginger")],
        vec![prop("10", "Apple")],
        vec![gift("1", "10", 5, "LIKE")],
    )
    .expect("catalog");

    let person = catalog.npc(&NpcId::new("1")).expect("npc");
    let links: Vec<_> = person.links().collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].prop.id, PropId::new("10"));

    let item = catalog.prop(&PropId::new("10")).expect("prop");
    let links: Vec<_> = item.links().collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].npc.id, NpcId::new("1"));
    assert_eq!(person.gift_indices(), item.gift_indices());
}

#[test]
fn every_link_appears_once_per_side() {
    let catalog = sample();
    let npc_total: usize = catalog.npcs().map(|view| view.gift_indices().len()).sum();
    let prop_total: usize = catalog.props().map(|view| view.gift_indices().len()).sum();
    assert_eq!(npc_total, catalog.gift_count());
    assert_eq!(prop_total, catalog.gift_count());

    let mut seen: Vec<GiftIdx> = catalog
        .npcs()
        .flat_map(|view| view.gift_indices().to_vec())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..catalog.gift_count()).collect::<Vec<_>>());
}

#[test]
fn higher_favor_sorts_first() {
    let catalog = sample();
    let ginger = catalog.npc(&NpcId::new("1")).expect("ginger");
    assert_eq!(favors(&ginger), vec![7, 3, -5]);

    for view in catalog.npcs() {
        let values = favors(&view);
        assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

#[test]
fn equal_favor_breaks_ties_by_prop_name() {
    let catalog = sample();
    let mint = catalog.npc(&NpcId::new("2")).expect("mint");
    let names: Vec<_> = mint
        .links()
        .map(|link| link.prop.prop_name.as_str())
        .collect();
    assert_eq!(names, vec!["Apple", "Pie", "Rock"]);
}

#[test]
fn resort_is_idempotent() {
    let mut catalog = sample();
    let before: Vec<Vec<GiftIdx>> = catalog
        .npcs()
        .map(|view| view.gift_indices().to_vec())
        .chain(catalog.props().map(|view| view.gift_indices().to_vec()))
        .collect();
    catalog.resort();
    let after: Vec<Vec<GiftIdx>> = catalog
        .npcs()
        .map(|view| view.gift_indices().to_vec())
        .chain(catalog.props().map(|view| view.gift_indices().to_vec()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn unknown_npc_fails_the_join() {
    let err = GiftCatalog::build(
        vec![npc("1", "Ginger")],
        vec![prop("10", "Apple")],
        vec![gift("1", "10", 5, "LIKE"), gift("9", "10", 1, "LIKE")],
    )
    .expect_err("unknown npc");
    assert_eq!(
        err,
        CatalogError::UnknownNpc {
            gift: 1,
            npc: NpcId::new("9"),
        }
    );
}

#[test]
fn unknown_prop_fails_the_join() {
    let err = GiftCatalog::build(
        vec![npc("1", "Ginger")],
        vec![prop("10", "Apple")],
        vec![gift("1", "99", 5, "LIKE")],
    )
    .expect_err("unknown prop");
    assert!(matches!(err, CatalogError::UnknownProp { gift: 0, .. }));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = GiftCatalog::build(
        vec![npc("1", "Ginger"), npc("1", "Ginger again")],
        vec![],
        vec![],
    )
    .expect_err("duplicate npc");
    assert_eq!(err, CatalogError::DuplicateNpc(NpcId::new("1")));
}

#[test]
fn joins_records_parsed_from_json() {
    let npcs: Vec<Npc> =
        serde_json::from_str(r#"[{"id": 1, "name": "Ginger", "icon": "g", "birthday": "b"}]"#)
            .expect("npcs");
    let props: Vec<Prop> = serde_json::from_str(
        r#"[{"id": "10", "prop_name": "Apple", "prop_icon": "a", "prop_type": "RELIC",
            "prop_universality": "NONE"}]"#,
    )
    .expect("props");
    let gifts: Vec<Gift> =
        serde_json::from_str(r#"[{"npc": "1", "prop": 10, "favor": "4", "gift_level": "LIKE"}]"#)
            .expect("gifts");

    let catalog = GiftCatalog::build(npcs, props, gifts).expect("catalog");
    assert_eq!(catalog.gift_count(), 1);
}

#[test]
fn finds_entities_by_id_or_loose_name() {
    let catalog = sample();
    assert_eq!(catalog.find_npc("2").expect("by id").npc.name, "Mint");
    assert_eq!(catalog.find_npc("  ginger ").expect("by name").npc.name, "Ginger");
    assert_eq!(catalog.find_prop("PIE").expect("prop").prop.id, PropId::new("11"));
    assert!(catalog.find_npc("nobody").is_none());
}

#[test]
fn report_groups_npc_preferences_by_level() {
    let catalog = sample();
    let ginger = catalog.find_npc("Ginger").expect("ginger");
    let report = PreferenceReport::for_npc(&ginger);

    assert_eq!(report.entries(&GiftLevel::Love).len(), 1);
    assert_eq!(report.entries(&GiftLevel::Hate)[0].name, "Rock");
    assert!(report.entries(&GiftLevel::Dislike).is_empty());

    let text = report.to_string();
    assert_eq!(
        text,
        "Ginger\nLoves: [Pie (7)]\nLikes: [Apple (3)]\nDislikes: []\nHates: [Rock (-5)]\n"
    );
}

#[test]
fn report_for_prop_lists_npcs() {
    let catalog = sample();
    let apple = catalog.find_prop("apple").expect("apple");
    let text = PreferenceReport::for_prop(&apple).to_string();
    assert!(text.starts_with("Apple\n"));
    assert!(text.contains("Loved by: [Mint (7)]"));
    assert!(text.contains("Liked by: [Ginger (3)]"));
}
