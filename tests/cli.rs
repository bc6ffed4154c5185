use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn dota_pick() -> Command {
    let mut cmd = Command::cargo_bin("dota_pick").expect("binary builds");
    cmd.env("NO_COLOR", "1")
        .env("DOTA_PICK_CATALOG", "")
        .env_remove("DOTA_PICK_BONUSES")
        .env_remove("DOTA_PICK_TOP_N")
        .env_remove("DOTA_PICK_LOG")
        // keep ~/.dota_pick/catalog.json out of the picture
        .env("HOME", std::env::temp_dir());
    cmd
}

const SMALL_CATALOG: &str = r#"{
    "heroes": [
        { "name": "npc_dota_hero_lion", "localized_name": "Lion",
          "primary_attr": "int", "attack_type": "Ranged",
          "roles": ["Apoyo", "Disabler"], "position": 5,
          "img": "lion.png", "icon": "lion_icon.png" },
        { "name": "npc_dota_hero_sven", "localized_name": "Sven",
          "primary_attr": "str", "attack_type": "Melee",
          "roles": ["Carry", "Disabler"], "position": 1,
          "img": "sven.png", "icon": "sven_icon.png" }
    ],
    "matchups": [ { "hero": "Lion", "against": "Sven", "score": 3.0 } ]
}"#;

#[test]
fn rank_puts_best_counter_first() {
    dota_pick()
        .args(["rank", "--team", "Axe", "--top-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anti-Mage"))
        .stdout(predicate::str::contains("+6.0"))
        .stdout(predicate::str::contains("Team: 1/5"));
}

#[test]
fn rank_sums_team_members() {
    dota_pick()
        .args(["rank", "--team", "Axe,Crystal Maiden", "--query", "invoker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoker"))
        .stdout(predicate::str::contains("-6.0"));
}

#[test]
fn score_derives_reverse_direction() {
    dota_pick()
        .args(["score", "Axe", "Invoker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-4.0"));

    dota_pick()
        .args(["score", "invoker", "axe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+3.0"));

    dota_pick()
        .args(["score", "Puck", "Chen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+0.0"));
}

#[test]
fn team_larger_than_five_is_rejected() {
    dota_pick()
        .args(["rank", "--team", "Axe,Puck,Chen,Bane,Doom,Enigma"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 5"));
}

#[test]
fn unknown_hero_is_reported() {
    dota_pick()
        .args(["score", "Axe", "Pudge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hero not found: Pudge"));
}

#[test]
fn heroes_query_filters_catalog() {
    dota_pick()
        .args(["heroes", "--query", "support"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crystal Maiden"))
        .stdout(predicate::str::contains("Abaddon"))
        .stdout(predicate::str::contains("Juggernaut").not());
}

#[test]
fn heroes_query_matches_spanish_role_tags() {
    dota_pick()
        .args(["heroes", "--query", "apoyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Abaddon"))
        .stdout(predicate::str::contains("Chen"))
        .stdout(predicate::str::contains("Crystal Maiden").not());
}

#[test]
fn full_team_with_unmatched_query_finds_no_heroes() {
    dota_pick()
        .args(["rank", "--team", "Axe,Puck,Chen,Bane,Doom", "--query", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team: 5/5"))
        .stdout(predicate::str::contains("No heroes found"))
        .stdout(predicate::str::contains("Team complete").not());
}

#[test]
fn explain_with_bonuses_lists_components() {
    dota_pick()
        .args(["--bonuses", "explain", "--team", "Axe", "Anti-Mage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Axe vs Anti-Mage"))
        .stdout(predicate::str::contains("Position differs from Axe"))
        .stdout(predicate::str::contains("+7.5"));
}

#[test]
fn custom_catalog_file_is_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SMALL_CATALOG.as_bytes()).unwrap();

    dota_pick()
        .arg("--catalog")
        .arg(file.path())
        .args(["rank", "--team", "Sven"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lion"))
        .stdout(predicate::str::contains("-3.0"))
        .stdout(predicate::str::contains("Axe").not());
}

#[test]
fn broken_catalog_file_fails_cleanly() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"heroes\": [ { \"name\": 1 } ] }").unwrap();

    dota_pick()
        .env("DOTA_PICK_CATALOG", file.path())
        .args(["heroes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn invalid_top_n_env_is_a_config_error() {
    dota_pick()
        .env("DOTA_PICK_TOP_N", "lots")
        .args(["rank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn draft_session_adds_and_explains() {
    dota_pick()
        .args(["draft", "--top-n", "5"])
        .write_stdin("add Axe\nadd crystal maiden\nexplain Invoker\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Axe"))
        .stdout(predicate::str::contains("Added Crystal Maiden"))
        .stdout(predicate::str::contains("Team: 2/5"))
        .stdout(predicate::str::contains("-6.0"));
}

#[test]
fn draft_session_ignores_sixth_pick() {
    dota_pick()
        .arg("draft")
        .write_stdin("add Axe\nadd Puck\nadd Chen\nadd Bane\nadd Doom\nadd Enigma\nteam\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Team is full"))
        .stdout(predicate::str::contains("Team: 5/5"))
        .stdout(predicate::str::contains("Added Enigma").not());
}

#[test]
fn draft_session_survives_bad_input() {
    dota_pick()
        .arg("draft")
        .write_stdin("ban Axe\nadd Pudge\nremove Axe\nadd Axe\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command"))
        .stderr(predicate::str::contains("Hero not found"))
        .stdout(predicate::str::contains("Axe is not on the team"))
        .stdout(predicate::str::contains("Added Axe"));
}
