//! End-to-end properties of template resolution, analysis and normalization.

use pretty_assertions::assert_eq;
use promptflow_application::choice_resolver::{ChoiceResolver, analyze, normalize, resolve};
use promptflow_application::{ComposePrompt, ComposePromptInput, NoLookup, OptionLookup};
use promptflow_domain::{OptionLibrary, OptionSource, SelectionPolicy};

fn wildcard_library() -> OptionLibrary {
    let user = OptionSource::new("user")
        .with_list("hair", ["red hair", "black hair"])
        .unwrap_or_default();
    let bundled = OptionSource::new("bundled")
        .with_list("hair", ["green hair"])
        .and_then(|s| s.with_list("places/city", ["tokyo", "paris", "cairo"]))
        .unwrap_or_default();
    OptionLibrary::new().with_source(user).with_source(bundled)
}

#[test]
fn fixed_policy_identity() {
    for seed in [0, 1, 99, u64::MAX] {
        assert_eq!(resolve("{a|b|c}", SelectionPolicy::Fixed, seed, &NoLookup), "a");
    }
}

#[test]
fn increment_and_decrement_cycle() {
    let cases = [
        (SelectionPolicy::Increment, 0, "a"),
        (SelectionPolicy::Increment, 1, "b"),
        (SelectionPolicy::Increment, 3, "a"),
        (SelectionPolicy::Decrement, 0, "c"),
        (SelectionPolicy::Decrement, 1, "b"),
        (SelectionPolicy::Decrement, 2, "a"),
        (SelectionPolicy::Decrement, 3, "c"),
    ];
    for (policy, seed, expected) in cases {
        let out = resolve("{a|b|c}", policy, seed, &NoLookup);
        assert_eq!(out, expected, "{policy} seed {seed}");
    }
}

#[test]
fn running_index_is_left_to_right() {
    assert_eq!(resolve("{a|b}-{x|y}", SelectionPolicy::Increment, 0, &NoLookup), "a-y");
}

#[test]
fn named_miss_passes_through() {
    let never = |_: &str| None::<Vec<String>>;
    assert_eq!(resolve("__missing__", SelectionPolicy::Fixed, 0, &never), "__missing__");
}

#[test]
fn named_choices_use_highest_priority_source() {
    let library = wildcard_library();
    let out = resolve(
        "__hair__ in __places/city__",
        SelectionPolicy::Increment,
        1,
        &library,
    );
    // hair: index 1 of the user list; city: index 2 of the bundled list
    assert_eq!(out, "black hair in cairo");
}

#[test]
fn random_output_stays_in_option_set() {
    let library = wildcard_library();
    let cities = ["tokyo", "paris", "cairo"];
    let moods = ["calm", "angry", "sad"];

    for seed in 0..500 {
        let out = resolve(
            "__places/city__|{calm|angry|sad}",
            SelectionPolicy::Random,
            seed,
            &library,
        );
        let (city, mood) = out.split_once('|').unwrap_or_default();
        assert!(cities.contains(&city), "seed {seed}: {out}");
        assert!(moods.contains(&mood), "seed {seed}: {out}");
    }
}

#[test]
fn resolution_is_deterministic() {
    let library = wildcard_library();
    let template = "__hair__, {a|b|c} {d|e}, __nope__, {}";
    for policy in SelectionPolicy::ALL {
        for seed in [0, 7, 123_456_789, u64::MAX] {
            let first = ChoiceResolver::new(&library).resolve(template, policy, seed);
            let second = ChoiceResolver::new(&library).resolve(template, policy, seed);
            assert_eq!(first, second);
            assert_eq!(first.unresolved_names(), vec!["nope"]);
        }
    }
}

#[test]
fn substituted_text_is_never_rescanned() {
    let lookup = |name: &str| match name {
        "nested" => Some(vec!["x".to_string(), "{big|small}".to_string()]),
        "open" => Some(vec!["{".to_string()]),
        _ => None,
    };

    assert_eq!(
        resolve("__nested__ {a|b}", SelectionPolicy::Increment, 1, &lookup),
        "{big|small} a"
    );
    assert_eq!(resolve("__open__ x|y}", SelectionPolicy::Fixed, 0, &lookup), "{ x|y}");
}

#[test]
fn failing_lookup_keeps_rest_deterministic() {
    struct Flaky;
    impl OptionLookup for Flaky {
        fn resolve_named(&self, name: &str) -> Option<Vec<String>> {
            (name != "broken").then(|| vec!["ok".to_string()])
        }
    }

    let out = resolve("__broken__ __fine__ {a|b}", SelectionPolicy::Increment, 0, &Flaky);
    assert_eq!(out, "__broken__ ok b");
}

#[test]
fn empty_inputs_resolve() {
    assert_eq!(resolve("", SelectionPolicy::Random, 1, &NoLookup), "");
    assert_eq!(resolve("{}", SelectionPolicy::Fixed, 1, &NoLookup), "");
}

#[test]
fn analyzer_combinatorics() {
    assert_eq!(analyze("{a|b}-{x|y|z}").total_variations, 6);
    assert_eq!(analyze("no wildcards here").total_variations, 1);
    assert_eq!(analyze("{single}").total_variations, 1);
    assert_eq!(analyze("__hair__ {a|b}").total_variations, 2);
}

#[test]
fn normalizer_is_idempotent() {
    assert_eq!(normalize("a,, ,b"), "a, b");
    for text in ["a,, ,b", " ,x ,, y  z,", "\n\n", "a , b , , c", "{a|b},,"] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn compose_from_widget_payload() {
    let payload = r#"{
        "mode": "extended",
        "categories": {
            "subject": {"value": "a girl with __hair__", "mode": "fixed"},
            "location": {"value": "{beach|forest|city}", "mode": "decrement"},
            "quality": {"value": "masterpiece, , best quality", "mode": "fixed"}
        },
        "negative": "lowres,,"
    }"#;

    let library = wildcard_library();
    let input = ComposePromptInput::from_payload(payload, 0).with_trigger_words("pfstyle");
    let output = ComposePrompt::new(&library)
        .execute(&input)
        .unwrap_or_else(|e| panic!("compose failed: {e}"));

    assert_eq!(
        output.positive,
        "pfstyle, a girl with red hair, city, masterpiece, best quality"
    );
    assert_eq!(output.negative, "lowres");
    assert!(output.warnings.is_empty());
}
