use crate::types::{Ecosystem, Rule, RuleType};

pub fn rule() -> Rule {
    Rule::new("amplitude", "Amplitude Analytics", RuleType::Analytics).with_dependencies([
        (Ecosystem::Npm, "amplitude-js"),
        (Ecosystem::Npm, "@amplitude/analytics-browser"),
        (Ecosystem::Php, "zumba/amplitude-php"),
    ])
}
