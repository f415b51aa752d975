// Tests for the interviewer profile registry: fallback policy, stack
// substitution, and discovery listing.

use ai_interviewer::profiles::{ProfileRegistry, DEFAULT_PROFILE};

#[test]
fn test_known_profiles_resolve() {
    let registry = ProfileRegistry::builtin();

    for key in [
        "junior",
        "pleno",
        "senior",
        "devops",
        "frontend",
        "backend",
        "fullstack",
        "data",
    ] {
        assert_eq!(registry.lookup(key).key, key);
    }
}

#[test]
fn test_unknown_key_falls_back_to_pleno() {
    let registry = ProfileRegistry::builtin();

    let fallback = registry.lookup("unknown-key");
    let pleno = registry.lookup(DEFAULT_PROFILE);
    assert_eq!(fallback.key, pleno.key);
    assert_eq!(fallback.instruction, pleno.instruction);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let registry = ProfileRegistry::builtin();
    assert_eq!(registry.lookup("JUNIOR").key, "junior");
    assert_eq!(registry.lookup("Senior").key, "senior");
}

#[test]
fn test_instruction_substitutes_stack_placeholder() {
    let registry = ProfileRegistry::builtin();

    let instruction = registry.instruction_for("junior", "backend");
    assert!(instruction.contains("backend"));
    assert!(!instruction.contains("{stack}"));
}

#[test]
fn test_empty_stack_leaves_template_untouched() {
    let registry = ProfileRegistry::builtin();

    let instruction = registry.instruction_for("junior", "");
    assert_eq!(instruction, registry.lookup("junior").instruction);
    assert!(instruction.contains("{stack}"));
}

#[test]
fn test_unknown_profile_instruction_matches_default() {
    let registry = ProfileRegistry::builtin();
    assert_eq!(
        registry.instruction_for("unknown-key", "frontend"),
        registry.instruction_for(DEFAULT_PROFILE, "frontend")
    );
}

#[test]
fn test_summaries_list_every_profile_without_instructions() {
    let registry = ProfileRegistry::builtin();

    let summaries = registry.summaries();
    assert_eq!(summaries.len(), 8);

    let keys: Vec<&str> = summaries.iter().map(|s| s.key).collect();
    assert!(keys.contains(&"junior"));
    assert!(keys.contains(&"pleno"));
    assert!(keys.contains(&"data"));

    // The listing carries key/name/description only; the steering
    // instruction must not leak through serialization.
    let json = serde_json::to_string(&summaries).unwrap();
    assert!(!json.contains("REGRAS ESTRITAS"));
    assert!(json.contains("Perguntas leves focadas em fundamentos"));
}
