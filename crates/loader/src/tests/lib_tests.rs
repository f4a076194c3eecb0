use std::{collections::HashMap, fs};

use async_trait::async_trait;
use axum::{routing::get, Router};
use shared::domain::{NpcId, PropId};

use super::*;

const NPCS: &str = r#"[{"id": 1, "name": "Ginger", "icon": "ginger", "birthday": "Spring 3"}]"#;
const PROPS: &str = r#"[{"id": 10, "prop_name": "Apple", "prop_icon": "apple",
    "prop_type": "COOKABLE_PC", "prop_universality": "COMMON"}]"#;
const GIFTS: &str = r#"[{"npc": 1, "prop": 10, "favor": "5", "gift_level": "LIKE"}]"#;

struct StaticSource {
    files: HashMap<&'static str, &'static str>,
}

impl StaticSource {
    fn complete() -> Self {
        Self {
            files: HashMap::from([
                ("npcs.json", NPCS),
                ("props.json", PROPS),
                ("gifts.json", GIFTS),
            ]),
        }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "static".into()
    }

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, LoadError> {
        self.files
            .get(file_name)
            .map(|body| body.as_bytes().to_vec())
            .ok_or_else(|| LoadError::fetch(file_name, "not found"))
    }
}

#[tokio::test]
async fn loads_all_three_datasets() {
    let datasets = load_datasets(&StaticSource::complete())
        .await
        .expect("datasets");
    assert_eq!(datasets.npcs.len(), 1);
    assert_eq!(datasets.props.len(), 1);
    assert_eq!(datasets.gifts.len(), 1);
    assert_eq!(datasets.gifts[0].npc, NpcId::new("1"));
    assert_eq!(datasets.gifts[0].prop, PropId::new("10"));
    assert_eq!(datasets.gifts[0].favor, 5);
}

#[tokio::test]
async fn missing_resource_fails_the_whole_load() {
    let mut source = StaticSource::complete();
    source.files.remove("gifts.json");

    let err = load_datasets(&source).await.expect_err("partial load");
    assert!(matches!(err, LoadError::Partial { .. }));
    assert_eq!(err.resources(), vec!["gifts.json"]);
}

#[tokio::test]
async fn every_failure_is_reported() {
    let mut source = StaticSource::complete();
    source.files.remove("npcs.json");
    source.files.insert("props.json", "{not json");

    let err = load_datasets(&source).await.expect_err("partial load");
    assert_eq!(err.resources(), vec!["npcs.json", "props.json"]);
    let LoadError::Partial { failures } = err else {
        panic!("expected partial failure");
    };
    assert!(matches!(failures[0], LoadError::Fetch { .. }));
    assert!(matches!(failures[1], LoadError::Parse { .. }));
}

#[tokio::test]
async fn gift_missing_its_level_is_a_parse_failure() {
    let mut source = StaticSource::complete();
    source
        .files
        .insert("gifts.json", r#"[{"npc": 1, "prop": 10, "favor": 3}]"#);

    let err = load_datasets(&source).await.expect_err("malformed gift");
    assert_eq!(err.resources(), vec!["gifts.json"]);
    let LoadError::Partial { failures } = err else {
        panic!("expected partial failure");
    };
    assert!(matches!(&failures[0], LoadError::Parse { source, .. }
        if source.to_string().contains("missing field `gift_level`")));
}

#[tokio::test]
async fn reads_datasets_from_a_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("npcs.json"), NPCS).expect("npcs");
    fs::write(dir.path().join("props.json"), PROPS).expect("props");
    fs::write(dir.path().join("gifts.json"), GIFTS).expect("gifts");

    let source = source_for(dir.path().to_string_lossy().as_ref());
    let datasets = load_datasets(source.as_ref()).await.expect("datasets");
    assert_eq!(datasets.npcs[0].name, "Ginger");
    assert_eq!(datasets.props[0].prop_name, "Apple");
}

#[tokio::test]
async fn missing_directory_reports_each_resource() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = FsSource::new(dir.path().join("absent"));

    let err = load_datasets(&source).await.expect_err("missing dir");
    assert_eq!(
        err.resources(),
        vec!["npcs.json", "props.json", "gifts.json"]
    );
}

#[tokio::test]
async fn fetches_datasets_over_http() {
    let app = Router::new()
        .route("/data/npcs.json", get(|| async { NPCS }))
        .route("/data/props.json", get(|| async { PROPS }))
        .route("/data/gifts.json", get(|| async { GIFTS }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let source = source_for(&format!("http://{addr}/data"));
    let datasets = load_datasets(source.as_ref()).await.expect("datasets");
    assert_eq!(datasets.npcs.len(), 1);
    assert_eq!(datasets.gifts[0].gift_level, "LIKE");
}

#[tokio::test]
async fn http_error_status_is_a_fetch_failure() {
    let app = Router::new()
        .route("/npcs.json", get(|| async { NPCS }))
        .route("/props.json", get(|| async { PROPS }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let source = HttpSource::new(format!("http://{addr}/").parse().expect("url"));
    let err = load_datasets(&source).await.expect_err("404 for gifts");
    assert_eq!(err.resources(), vec!["gifts.json"]);
}

#[test]
fn locator_selects_source_kind() {
    assert!(source_for("https://example.com/guide/data")
        .describe()
        .starts_with("https://example.com/guide/data/"));
    assert_eq!(source_for("site/data").describe(), "site/data");
}
