//! Rule ordering and finalize behaviour across stage combinations.

use packsmith_builder::{BuildError, BuildSession, Builder, ModuleType, RuleDescriptor};
use packsmith_config::{Environment, Overrides};
use std::path::Path;

fn session() -> BuildSession {
    BuildSession::initialize(&Environment::new("/p"), Overrides::default())
}

fn first_test(rule: &RuleDescriptor) -> Option<&str> {
    rule.test.first().map(|p| p.as_str())
}

fn is_catch_all(rule: &RuleDescriptor) -> bool {
    rule.test.is_empty() && rule.module_type == Some(ModuleType::Asset)
}

#[test]
fn styles_stage_appends_three_rules_in_syntax_order() {
    let mut session = session();
    assert!(session.rules().is_empty());

    session.enable_styles().unwrap();

    let tests: Vec<_> = session.rules().iter().filter_map(first_test).collect();
    assert_eq!(tests, [r"\.css$", r"\.scss$", r"\.less$"]);
}

#[test]
fn typescript_then_styles_orders_registry() {
    let mut session = session();
    session.enable_typescript().unwrap().enable_styles().unwrap();

    let tests: Vec<_> = session.rules().iter().filter_map(first_test).collect();
    assert_eq!(
        tests,
        [r"\.(ts|tsx)$", r"\.css$", r"\.scss$", r"\.less$"]
    );
}

#[test]
fn styles_then_typescript_keeps_call_order() {
    let mut session = session();
    session.enable_styles().unwrap().enable_typescript().unwrap();

    let tests: Vec<_> = session.rules().iter().filter_map(first_test).collect();
    assert_eq!(
        tests,
        [r"\.css$", r"\.scss$", r"\.less$", r"\.(ts|tsx)$"]
    );
}

#[test]
fn catch_all_is_last_for_every_stage_order() {
    type Step = fn(&mut BuildSession);
    let steps: [(&str, Step); 5] = [
        ("typescript", |s| {
            s.enable_typescript().unwrap();
        }),
        ("styles", |s| {
            s.enable_styles().unwrap();
        }),
        ("scripts", |s| {
            s.enable_scripts().unwrap();
        }),
        ("assets", |s| {
            s.enable_assets().unwrap();
        }),
        ("html", |s| {
            s.add_html("/p/src/index.html", None).unwrap();
        }),
    ];

    for start in 0..steps.len() {
        let mut session = session();
        let order: Vec<_> = steps.iter().cycle().skip(start).take(steps.len()).collect();
        for (_, step) in &order {
            step(&mut session);
        }

        let names: Vec<_> = order.iter().map(|(name, _)| *name).collect();
        let snapshot = session.finalize().unwrap();
        let rules: Vec<_> = snapshot.composite().iter().collect();
        let catch_alls = rules.iter().filter(|r| is_catch_all(r)).count();

        assert_eq!(catch_alls, 1, "order {names:?}");
        assert!(is_catch_all(rules[rules.len() - 1]), "order {names:?}");
    }
}

#[test]
fn empty_session_has_only_catch_all() {
    let snapshot = session().finalize().unwrap();
    assert!(snapshot.composite().specific().is_empty());
    assert!(is_catch_all(snapshot.composite().terminal()));
    assert!(snapshot.plugins().is_empty());
}

#[test]
fn second_finalize_is_rejected_and_keeps_one_catch_all() {
    let mut session = session();
    session.enable_typescript().unwrap();

    let first = session.finalize().unwrap();
    assert!(matches!(session.finalize(), Err(BuildError::AlreadyFinalized)));

    let value = first.to_value().unwrap();
    let one_of = value["module"]["rules"][0]["oneOf"].as_array().unwrap();
    let catch_alls = one_of
        .iter()
        .filter(|rule| rule.get("test").is_none() && rule["type"] == "asset")
        .count();
    assert_eq!(catch_alls, 1);
    assert_eq!(one_of.len(), 2);
}

#[test]
fn stages_after_finalize_are_rejected() {
    let mut session = session();
    session.finalize().unwrap();

    let err = session.enable_styles().unwrap_err();
    assert!(matches!(err, BuildError::StageAfterFinalize { stage: "styles" }));
    assert!(session.rules().is_empty());
}

#[test]
fn finalize_leaves_session_state_in_place() {
    let mut session = session();
    session.enable_typescript().unwrap();
    session.finalize().unwrap();

    assert_eq!(session.rules().len(), 1);
    assert_eq!(session.plugins().len(), 1);
}

#[test]
fn catch_all_never_shadows_specific_rules() {
    let mut session = session();
    session
        .enable_typescript()
        .unwrap()
        .enable_styles()
        .unwrap()
        .enable_assets()
        .unwrap();
    let snapshot = session.finalize().unwrap();

    let ts = snapshot.resolve(Path::new("/p/src/app.tsx")).unwrap();
    assert_eq!(first_test(ts), Some(r"\.(ts|tsx)$"));

    let scss = snapshot.resolve(Path::new("/p/src/theme.scss")).unwrap();
    assert_eq!(scss.loaders().last(), Some("sass-loader"));

    let png = snapshot.resolve(Path::new("/p/src/logo.png")).unwrap();
    assert!(png.parser.is_some());

    let font = snapshot.resolve(Path::new("/p/src/font.woff2")).unwrap();
    assert!(is_catch_all(font));

    assert!(snapshot.resolve(Path::new("/p/src/data.json")).is_none());
    assert!(snapshot.resolve(Path::new("/p/src/legacy.js")).is_none());
}

#[test]
fn repeated_sessions_do_not_accumulate_rules() {
    let mut builder = Builder::new(Environment::new("/p"));

    for _ in 0..3 {
        builder.initialize(Overrides::default());
        builder.enable_typescript().unwrap().enable_styles().unwrap();
        let snapshot = builder.finalize().unwrap();
        assert_eq!(snapshot.composite().len(), 5);
        assert_eq!(snapshot.plugins().len(), 2);
    }
}
