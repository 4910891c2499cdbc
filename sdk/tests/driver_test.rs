#![cfg(test)]

use std::fs;

use tempfile::tempdir;
use wl_vapi::{generate_vapi, generate_vapi_file, load_protocol_file, protocol_to_json, render_json, VapiError};

const PROTOCOL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<protocol name="viewporter">
  <interface name="wp_viewporter" version="1">
    <request name="destroy" type="destructor"/>
    <request name="get_viewport">
      <arg name="id" type="new_id" interface="wp_viewport"/>
      <arg name="surface" type="object" interface="wl_surface"/>
    </request>
    <enum name="error">
      <entry name="viewport_exists" value="0"/>
    </enum>
  </interface>
</protocol>
"#;

#[test]
fn test_generate_vapi_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("viewporter.xml");
    let output = dir.path().join("viewporter.vapi");
    fs::write(&input, PROTOCOL).unwrap();

    generate_vapi_file(&input, &output, "viewporter-client-protocol.h").expect("generation failed");

    let vapi = fs::read_to_string(&output).unwrap();
    assert!(vapi.starts_with("// Generated VAPI file using wl-vapi-gen "));
    assert!(vapi.contains("cheader_filename=\"viewporter-client-protocol.h\""));
    assert!(vapi.contains("public class WpViewporter : Wl.Proxy {"));
    assert!(vapi.contains("  public WpViewport get_viewport (Wl.Surface surface);\n"));
    assert!(vapi.contains("public enum WpViewporterError {\n  VIEWPORT_EXISTS,\n}\n"));
}

#[test]
fn test_generate_vapi_file_overwrites_and_is_stable() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("viewporter.xml");
    let output = dir.path().join("viewporter.vapi");
    fs::write(&input, PROTOCOL).unwrap();
    fs::write(&output, "stale contents that are much longer than nothing").unwrap();

    generate_vapi_file(&input, &output, "v.h").unwrap();
    let first = fs::read(&output).unwrap();
    generate_vapi_file(&input, &output, "v.h").unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert!(!String::from_utf8(first).unwrap().contains("stale"));
}

#[test]
fn test_missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.xml");
    let output = dir.path().join("out.vapi");

    let err = generate_vapi_file(&input, &output, "v.h").unwrap_err();
    assert!(matches!(err, VapiError::InputNotFound(ref path) if path == &input));
    assert!(err.to_string().contains("missing.xml"));
    assert!(!output.exists());
}

#[test]
fn test_failed_translation_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.xml");
    let output = dir.path().join("out.vapi");
    fs::write(
        &input,
        r#"<protocol><interface name="a"><request name="r"><arg name="x" type="new_id"/><arg name="y" type="new_id"/></request></interface></protocol>"#,
    )
    .unwrap();
    fs::write(&output, "previous").unwrap();

    let err = generate_vapi_file(&input, &output, "v.h").unwrap_err();
    assert!(matches!(err, VapiError::TranslationError { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_parse_error_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    let output = dir.path().join("out.vapi");
    fs::write(&input, "<protocol><interface name=\"a\"></protocol>").unwrap();

    let err = generate_vapi_file(&input, &output, "v.h").unwrap_err();
    assert!(matches!(err, VapiError::ParseError { .. }));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("viewporter.xml");
    fs::write(&input, PROTOCOL).unwrap();
    let output = dir.path().join("no-such-dir").join("out.vapi");

    let err = generate_vapi_file(&input, &output, "v.h").unwrap_err();
    match err {
        VapiError::OutputWriteError { path, .. } => assert_eq!(path, output),
        other => panic!("expected an output write error, got {:?}", other),
    }
}

#[test]
fn test_protocol_to_json() {
    let json = protocol_to_json(PROTOCOL).expect("protocol_to_json failed");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"], "viewporter");
    let interface = &value["interfaces"][0];
    assert_eq!(interface["name"], "wp_viewporter");
    assert_eq!(interface["requests"][0]["destroyer"], true);
    assert_eq!(interface["requests"][1]["args"][0]["type"], "new_id");
    assert_eq!(interface["requests"][1]["args"][0]["interface"], "wp_viewport");
    assert_eq!(interface["requests"][1]["args"][1]["enum"], serde_json::Value::Null);
    assert_eq!(interface["enums"][0]["entries"][0]["value"], "0");
}

#[test]
fn test_loaded_protocol_feeds_vapi_and_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("viewporter.xml");
    let output = dir.path().join("viewporter.vapi");
    fs::write(&input, PROTOCOL).unwrap();

    let protocol = load_protocol_file(&input).expect("load_protocol_file failed");
    assert_eq!(protocol.interfaces[0].name, "wp_viewporter");

    generate_vapi_file(&input, &output, "v.h").unwrap();
    assert_eq!(generate_vapi(&protocol, "v.h").unwrap(), fs::read_to_string(&output).unwrap());
    assert_eq!(render_json(&protocol).unwrap(), protocol_to_json(PROTOCOL).unwrap());
}

#[test]
fn test_load_protocol_file_reports_missing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.xml");
    assert!(matches!(load_protocol_file(&input), Err(VapiError::InputNotFound(_))));
}
