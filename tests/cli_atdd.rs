#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SENATOR_BUNDLE: &str = r#"{
  "legislator": "Senator 5012",
  "year": 2023,
  "eventos": [
    {"descricaoTipo": "Sessão Deliberativa Ordinária"},
    {"descricaoTipo": "Reunião Deliberativa"},
    {"descricaoTipo": "Audiência Pública"},
    {"descricaoTipo": "Visita Oficial"}
  ],
  "proposicoes": [
    {"id": 1, "siglaTipo": "PEC", "numero": 45, "ano": 2019, "ementa": "Altera o Sistema Tributário Nacional"},
    {"id": 2, "siglaTipo": "PL", "numero": 10, "ano": "2023", "ementa": "Tipifica o crime de fraude eletrônica"},
    {"id": 3, "siglaTipo": "PL", "numero": 11, "ano": 2022, "ementa": "Institui o Estatuto da Pessoa Idosa"},
    {"id": 4, "siglaTipo": "PL", "numero": 12, "ano": 2021, "ementa": "Denomina viaduto"}
  ],
  "relatorias": [{"siglaTipo": "PEC"}, {"siglaTipo": "PL"}, {"siglaTipo": "PL"}],
  "comissoes": {"siglaComissao": "CCJ", "descricaoParticipacao": "Titular e Presidente"},
  "despesas": [
    {"DescricaoDespesa": "Passagens", "ValorReembolsado": "60000"},
    {"DescricaoDespesa": "Aluguel", "ValorReembolsado": 40000},
    {"DescricaoDespesa": "Aluguel", "ValorReembolsado": -5}
  ]
}"#;

fn legis_kpi(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("legis-kpi").expect("binary should compile");
    cmd.env("HOME", home).env_remove("RUST_LOG").current_dir(home);
    cmd
}

fn write_bundle(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("bundle should write");
    path
}

#[test]
fn score_json_reports_every_indicator() {
    let dir = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(dir.path(), "senator.json", SENATOR_BUNDLE);

    let output = legis_kpi(dir.path())
        .arg("score")
        .arg(&bundle)
        .args(["--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["assiduity"]["score"], 3);
    assert_eq!(value["assiduity"]["label"], "low");
    assert_eq!(value["relator"]["score"], 20);
    assert_eq!(value["relator"]["pec_count"], 1);
    assert_eq!(value["relator"]["bill_count"], 2);
    assert_eq!(value["strategic_committees"]["score"], 150);
    assert_eq!(
        value["strategic_committees"]["roles"][0],
        "CCJ (Titular e Presidente)"
    );
    assert_eq!(value["expenses"]["total"], 100000.0);
    assert_eq!(value["efficiency"]["index_label"], "170.0");
    assert_eq!(value["efficiency"]["tier"], "high");

    let complex = value["complex_projects"]
        .as_array()
        .expect("complex projects should be an array");
    let complex_ids: Vec<&str> = complex
        .iter()
        .map(|bill| bill["id"].as_str().expect("id should be a string"))
        .collect();
    assert_eq!(complex_ids, vec!["3", "1"]);

    assert_eq!(value["themes"]["pecs"][0]["id"], "1");
    assert_eq!(value["themes"]["security"][0]["id"], "2");
    assert_eq!(value["themes"]["other"].as_array().map(Vec::len), Some(2));
}

#[test]
fn score_markdown_is_default_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(dir.path(), "senator.json", SENATOR_BUNDLE);

    legis_kpi(dir.path())
        .arg("score")
        .arg(&bundle)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Legislator Report: Senator 5012"))
        .stdout(predicate::str::contains("1 PECs, 2 bills reported"))
        .stdout(predicate::str::contains("- index: 170.0 (High)"));
}

#[test]
fn score_uses_project_config_from_working_directory() {
    let dir = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(dir.path(), "senator.json", SENATOR_BUNDLE);
    fs::write(
        dir.path().join("legis-kpi.toml"),
        "[relator]\namendment_weight = 30\n",
    )
    .expect("config should write");

    let output = legis_kpi(dir.path())
        .arg("score")
        .arg(&bundle)
        .args(["--format", "json"])
        .output()
        .expect("command should run");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["relator"]["score"], 40);
}

#[test]
fn score_rejects_malformed_records_with_input_error_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(dir.path(), "bad.json", r#"{"relatorias": [42]}"#);

    legis_kpi(dir.path())
        .arg("score")
        .arg(&bundle)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid records"));
}

#[test]
fn score_missing_bundle_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    legis_kpi(dir.path())
        .args(["score", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn batch_scores_each_bundle_and_flags_failures() {
    let dir = TempDir::new().expect("temp dir should be created");
    let bundles = dir.path().join("bundles");
    fs::create_dir_all(&bundles).expect("bundle dir should create");
    write_bundle(&bundles, "a.json", SENATOR_BUNDLE);
    write_bundle(&bundles, "b.json", r#"{"legislator": "Deputy 2"}"#);

    let output = legis_kpi(dir.path())
        .arg("batch")
        .arg(&bundles)
        .output()
        .expect("command should run");
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let reports = value.as_array().expect("batch output should be an array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1]["legislator"], "Deputy 2");
    assert_eq!(reports[1]["assiduity"]["label"], "no_data");

    write_bundle(&bundles, "c.json", "not json");
    legis_kpi(dir.path())
        .arg("batch")
        .arg(&bundles)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("c.json"));
}

#[test]
fn classify_prints_bucket_counts() {
    let dir = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(dir.path(), "senator.json", SENATOR_BUNDLE);

    legis_kpi(dir.path())
        .arg("classify")
        .arg(&bundle)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- pecs: 1"))
        .stdout(predicate::str::contains("- security: 1"))
        .stdout(predicate::str::contains("  - PL 10/2023"))
        .stdout(predicate::str::contains("- other: 2"));
}

#[test]
fn check_config_accepts_defaults_and_rejects_invalid_files() {
    let dir = TempDir::new().expect("temp dir should be created");

    legis_kpi(dir.path())
        .arg("check-config")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("config: ok"));

    fs::write(
        dir.path().join("legis-kpi.toml"),
        "[efficiency]\nmedium_tier = 20.0\n",
    )
    .expect("config should write");

    legis_kpi(dir.path())
        .arg("check-config")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("efficiency.medium_tier"));
}

#[test]
fn explicit_config_flag_overrides_layering() {
    let dir = TempDir::new().expect("temp dir should be created");
    let custom = dir.path().join("custom.toml");
    fs::write(&custom, "[themes]\nhealth = []\n").expect("config should write");

    legis_kpi(dir.path())
        .arg("--config")
        .arg(&custom)
        .arg("check-config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("themes.health cannot be empty"));
}
