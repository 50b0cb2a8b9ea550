use super::*;

#[test]
fn lookups_are_case_insensitive() {
    let mut t = VariableTable::new();
    t.set("player", Variable::text("Moderr"));
    assert!(t.has("PLAYER"));
    assert!(t.has("Player"));
    assert_eq!(t.get("pLaYeR"), Some(&Variable::text("Moderr")));
    assert_eq!(t.render_text("player"), "Moderr");
}

#[test]
fn set_overwrites_regardless_of_case() {
    let mut t = VariableTable::new();
    t.set("score", Variable::number(1));
    t.set("SCORE", Variable::number(2));
    assert_eq!(t.len(), 1);
    assert_eq!(t.render_text("Score"), "2");
}

#[test]
fn missing_variable_renders_uppercased_placeholder() {
    let t = VariableTable::new();
    assert!(!t.has("score"));
    assert_eq!(t.get("score"), None);
    assert_eq!(t.render_text("score"), "{SCORE}");
}

#[test]
fn iteration_uses_normalized_names() {
    let t: VariableTable = [("b", Variable::number(2)), ("a", Variable::text("x"))]
        .into_iter()
        .collect();
    let names: Vec<&str> = t.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn json_loading() {
    let t = VariableTable::from_json_str(
        r#"{"player": "Moderr", "score": 123, "background": {"image": "bg.png"}}"#,
    )
    .unwrap();
    assert_eq!(t.render_text("PLAYER"), "Moderr");
    assert_eq!(t.render_text("SCORE"), "123");
    assert_eq!(t.get("BACKGROUND"), Some(&Variable::image("bg.png")));

    let err = VariableTable::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, HosuError::Serde(_)));
}

#[test]
fn missing_variables_file_is_an_error() {
    assert!(VariableTable::from_path("no/such/vars.json").is_err());
}
