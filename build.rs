fn main() {
    // Validate embedded rule presets at compile time.
    validate_rules_toml(
        "src/rewrite/presets/standard.toml",
        include_str!("src/rewrite/presets/standard.toml"),
    );
    validate_rules_toml(
        "src/rewrite/presets/legacy.toml",
        include_str!("src/rewrite/presets/legacy.toml"),
    );
}

fn validate_rules_toml(path: &str, content: &str) {
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    let Some(rules) = value.get("rules").and_then(|r| r.as_array()) else {
        panic!("{path} has no `rules` array");
    };
    if rules.is_empty() {
        panic!("{path} has an empty `rules` array");
    }
    let markers: Vec<&str> = match value.get("markers") {
        None => Vec::new(),
        Some(m) => {
            let Some(list) = m
                .as_array()
                .and_then(|a| a.iter().map(|s| s.as_str()).collect::<Option<Vec<_>>>())
            else {
                panic!("{path}: `markers` must be an array of strings");
            };
            list
        }
    };
    if markers.iter().any(|m| m.is_empty()) {
        panic!("{path} has an empty marker");
    }

    let mut seen = std::collections::HashSet::new();
    for rule in rules {
        let Some([pattern, _]) = rule
            .as_array()
            .and_then(|p| p.iter().map(|s| s.as_str()).collect::<Option<Vec<_>>>())
            .and_then(|p| <[&str; 2]>::try_from(p).ok())
        else {
            panic!("{path}: every rule must be a [pattern, replacement] pair, got {rule}");
        };
        if pattern.is_empty() {
            panic!("{path} has an empty pattern");
        }
        if !seen.insert(pattern) {
            panic!("{path} has duplicate pattern {pattern:?}");
        }
        if let Some(marker) = markers.iter().find(|m| pattern.contains(**m)) {
            panic!("{path}: pattern {pattern:?} contains marker {marker:?}");
        }
    }
}
