use assert_cmd::Command;

fn samlcheck() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("samlcheck").unwrap();
    // Keep a developer's ~/.samlcheckrc out of the tests
    cmd.env("HOME", "tests/fixtures/no-home")
        .env_remove("SAMLCHECK_LOG_LEVEL");
    cmd
}

fn mapped() -> Command {
    let mut cmd = samlcheck();
    cmd.args(["--login-attribute", "login", "--name-attribute", "name"]);
    cmd
}

fn json_report(cmd: &mut Command) -> (Option<i32>, serde_json::Value) {
    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    (output.status.code(), parsed)
}

// ── Accepted responses ──

#[test]
fn valid_response_exits_zero() {
    mapped()
        .args(["--no-color", "tests/fixtures/success.xml"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Status: success"))
        .stdout(predicates::str::contains("User login value"));
}

#[test]
fn json_report_has_stable_shape() {
    let (code, report) = json_report(mapped().args(["--json", "tests/fixtures/success.xml"]));

    assert_eq!(code, Some(0));
    assert_eq!(report["status"], "success");
    assert!(report["errors"].as_array().unwrap().is_empty());
    assert!(report["warnings"].as_array().unwrap().is_empty());
    assert_eq!(report["mappedAttributes"]["User login value"][0], "jdoe");
    assert_eq!(report["mappedAttributes"]["User name value"][0], "John Doe");
    assert!(report["mappedAttributes"].get("User email value").is_none());
    assert!(report["mappedAttributes"].get("Groups value").is_none());
    assert_eq!(report["availableAttributes"]["groups"].as_array().unwrap().len(), 2);
}

#[test]
fn missing_mapped_attribute_warns_but_succeeds() {
    let (code, report) = json_report(samlcheck().args([
        "--login-attribute",
        "login",
        "--name-attribute",
        "displayName",
        "--group-attribute",
        "memberOf",
        "--json",
        "tests/fixtures/success.xml",
    ]));

    assert_eq!(code, Some(0));
    assert_eq!(report["status"], "success");
    let warnings: Vec<&str> = report["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap())
        .collect();
    assert_eq!(
        warnings,
        vec![
            "Mapping not found for the property name, the field displayName is not available in the SAML response.",
            "Mapping not found for the property group, the field memberOf is not available in the SAML response.",
        ]
    );
    assert!(report["mappedAttributes"]["Groups value"].as_array().unwrap().is_empty());
}

#[test]
fn base64_response_on_stdin() {
    let encoded = std::fs::read_to_string("tests/fixtures/success.b64").unwrap();
    let (code, report) = json_report(
        mapped()
            .args(["--email-attribute", "email", "--json", "-"])
            .write_stdin(encoded),
    );

    assert_eq!(code, Some(0));
    assert_eq!(report["mappedAttributes"]["User email value"][0], "jdoe@example.org");
}

#[test]
fn verbose_lists_available_attributes() {
    mapped()
        .args(["--verbose", "--no-color", "tests/fixtures/success.xml"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Available attributes"))
        .stdout(predicates::str::contains("sonar-administrators, developers"));
}

#[test]
fn config_file_supplies_mapping() {
    let (code, report) = json_report(samlcheck().args([
        "--config",
        "tests/fixtures/samlcheckrc.toml",
        "--json",
        "tests/fixtures/success.xml",
    ]));

    assert_eq!(code, Some(0));
    assert_eq!(report["mappedAttributes"]["Groups value"][1], "developers");
    assert_eq!(report["mappedAttributes"]["User email value"][0], "jdoe@example.org");
}

// ── Rejected responses ──

#[test]
fn failed_status_exits_one() {
    let (code, report) = json_report(mapped().args(["--json", "tests/fixtures/status_failure.xml"]));

    assert_eq!(code, Some(1));
    assert_eq!(report["status"], "error");
    assert_eq!(report["errors"][0], "invalid_response");
    assert_eq!(
        report["errors"][1],
        "The status code of the Response was not Success, was urn:oasis:names:tc:SAML:2.0:status:Responder -> User account is disabled"
    );
    assert!(report["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn expired_assertion_exits_one() {
    mapped()
        .args(["--no-color", "tests/fixtures/expired.xml"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("expired. Check system clock."));
}

#[test]
fn malformed_xml_is_reported_not_fatal() {
    let (code, report) = json_report(mapped().args(["--json", "tests/fixtures/malformed.xml"]));

    assert_eq!(code, Some(1));
    let errors = report["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .as_str()
        .unwrap()
        .starts_with("SAML response is not well-formed XML"));
}

#[test]
fn wrong_audience_exits_one() {
    mapped()
        .args(["--sp-entity-id", "jenkins", "--no-color", "tests/fixtures/success.xml"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("jenkins is not a valid audience"));
}

#[test]
fn unsigned_response_rejected_when_signature_required() {
    mapped()
        .args(["--require-signature", "--no-color", "tests/fixtures/success.xml"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("not signed"));
}

#[test]
fn non_utf8_response_is_reported_not_fatal() {
    let (code, report) = json_report(
        mapped()
            .args(["--json", "-"])
            .write_stdin(vec![b'<', b'R', 0xff, 0xfe, b'/', b'>']),
    );

    assert_eq!(code, Some(1));
    assert_eq!(
        report["errors"][0],
        "SAML response could not be decoded: payload is not valid UTF-8"
    );
}

#[test]
fn maximum_clock_skew_still_reports() {
    mapped()
        .args(["--clock-skew", "4294967295", "--no-color", "tests/fixtures/expired.xml"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Status: success"));
}

// ── Tool failures ──

#[test]
fn out_of_range_clock_skew_exits_two() {
    for skew in ["9000000000000", "-5"] {
        mapped()
            .args(["--clock-skew", skew, "tests/fixtures/success.xml"])
            .assert()
            .code(2);
    }
}

#[test]
fn missing_login_mapping_exits_two() {
    samlcheck()
        .args(["--name-attribute", "name", "tests/fixtures/success.xml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("No login attribute configured"));
}

#[test]
fn nonexistent_response_file_exits_two() {
    mapped()
        .arg("/tmp/does_not_exist_samlcheck_response.xml")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Failed to read"));
}

#[test]
fn nonexistent_config_file_exits_two() {
    samlcheck()
        .args(["--config", "tests/fixtures/missing.toml", "tests/fixtures/success.xml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Failed to read"));
}
