#![cfg(target_os = "macos")]

use osascript_tag::{Error, Invoker, Options, ScriptOutput};
use serde_json::json;

#[tokio::test]
async fn runs_applescript() {
    let output = Invoker::default().run("return 1 + 1").await.unwrap();
    assert_eq!(output, ScriptOutput::Text("2".to_string()));
}

#[tokio::test]
async fn jxa_receives_argv_and_returns_json() {
    let invoker = Invoker::jxa(Options::new().parse(true).arg("foo").arg(1));
    let output = invoker
        .run("return { first: argv[0], second: argv[1] }")
        .await
        .unwrap();
    assert_eq!(output.into_json(), Some(json!({"first": "foo", "second": 1})));
}

#[tokio::test]
async fn script_errors_come_from_stderr() {
    let err = Invoker::default()
        .run("error \"boom\"")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Script(ref text) if text.contains("boom")));
}
