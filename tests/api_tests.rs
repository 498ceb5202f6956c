//! HTTP-level tests over a snapshot-backed router: the same surface the
//! browser client consumes.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use charmfinder::data::npc::NpcRecord;
use charmfinder::data::snapshot::{NpcSnapshot, Zone};
use charmfinder::data::source::NpcSource;
use charmfinder::server::{build_router, AppState};

fn npc(id: i64, name: &str, level: i64, maxdmg: i64, bodytype: i64) -> NpcRecord {
    NpcRecord {
        id,
        name: name.to_string(),
        level,
        maxlevel: level,
        hp: level * 80,
        mindmg: 1,
        maxdmg,
        attack_delay: 30,
        runspeed: 1.25,
        magic_resist: 25,
        fire_resist: 25,
        cold_resist: 25,
        poison_resist: 25,
        disease_resist: 25,
        bodytype,
        race: 43,
        class: 1,
        special_abilities: None,
    }
}

fn test_app() -> axum::Router {
    let zones = vec![
        Zone {
            short_name: "mistmoore".to_string(),
            long_name: "Castle Mistmoore".to_string(),
        },
        Zone {
            short_name: "gfaydark".to_string(),
            long_name: "Greater Faydark".to_string(),
        },
    ];

    let mut uncharmable = npc(104, "a_warded_gargoyle", 30, 40, 23);
    uncharmable.special_abilities = Some("14,1".to_string());
    let mut summoner = npc(103, "an_elite_guard", 35, 60, 1);
    summoner.special_abilities = Some("1,1^21,1".to_string());

    let mut npcs_by_zone = BTreeMap::new();
    npcs_by_zone.insert(
        "gfaydark".to_string(),
        vec![
            npc(101, "a_wasp", 6, 8, 22),
            npc(102, "an_orc_centurion", 10, 14, 1),
            summoner,
            uncharmable,
            npc(105, "a_high_seer", 62, 120, 1),
        ],
    );

    let snapshot = NpcSnapshot {
        version: "1.0".to_string(),
        exported: "2024-05-01T00:00:00Z".to_string(),
        zones,
        npcs_by_zone,
    };

    build_router(AppState {
        source: NpcSource::Snapshot(Arc::new(snapshot)),
    })
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn zones_endpoint_returns_catalog_in_stored_order() {
    let (status, body) = get_json(test_app(), "/api/zones").await;
    assert_eq!(status, StatusCode::OK);

    let zones = body.as_array().unwrap();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0]["long_name"], "Castle Mistmoore");
    assert_eq!(zones[1]["short_name"], "gfaydark");
}

#[tokio::test]
async fn charm_spells_endpoint_serves_static_catalog() {
    let (status, body) = get_json(test_app(), "/api/charm-spells").await;
    assert_eq!(status, StatusCode::OK);

    let spells = body.as_array().unwrap();
    assert_eq!(spells.len(), 27);
    assert_eq!(spells[3]["name"], "Boltran's Agacerie");
    assert_eq!(spells[3]["maxLevel"], 53);
    assert_eq!(spells[3]["bodytype"], "any");
    assert_eq!(spells[18]["bodytype"], "undead");
    assert_eq!(spells[26]["bodytype"], "animal");
}

#[tokio::test]
async fn unknown_zone_yields_empty_array_not_error() {
    let (status, body) = get_json(test_app(), "/api/npcs/nonexistent_zone").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn npcs_endpoint_filters_enriches_and_orders() {
    // Boltran's Agacerie: any bodytype, ceiling 53.
    let (status, body) = get_json(test_app(), "/api/npcs/gfaydark?maxLevel=53&spellId=4").await;
    assert_eq!(status, StatusCode::OK);

    let npcs = body.as_array().unwrap();
    // The level-62 seer is above the ceiling; the warded gargoyle is uncharmable.
    assert_eq!(npcs.len(), 3);

    // maxdmg descending: elite guard (60) first.
    assert_eq!(npcs[0]["name"], "an_elite_guard");
    assert_eq!(npcs[0]["has_summon"], true);
    assert_eq!(npcs[1]["name"], "an_orc_centurion");
    assert_eq!(npcs[1]["class_name"], "Warrior");
    assert_eq!(npcs[2]["name"], "a_wasp");
    assert_eq!(npcs[2]["bodytype_name"], "Insect");
    assert_eq!(npcs[2]["level_range"], "6");
    assert_eq!(npcs[2]["exceeds_charm_level"], false);
    assert_eq!(npcs[2]["hp_per_level"], 80);
}

#[tokio::test]
async fn spell_restriction_narrows_bodytype() {
    // Dominate Undead: nothing in the fixture is undead.
    let (status, body) = get_json(test_app(), "/api/npcs/gfaydark?maxLevel=32&spellId=19").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn filters_are_optional() {
    let (status, body) = get_json(test_app(), "/api/npcs/gfaydark").await;
    assert_eq!(status, StatusCode::OK);

    let npcs = body.as_array().unwrap();
    // Only the uncharmable gargoyle drops without level/spell filters.
    assert_eq!(npcs.len(), 4);
    assert_eq!(npcs[0]["name"], "a_high_seer");
}

#[tokio::test]
async fn health_reports_loaded_counts() {
    let (status, body) = get_json(test_app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dataSource"], "snapshot");
    assert_eq!(body["zones"], 2);
    assert_eq!(body["npcs"], 5);
}
