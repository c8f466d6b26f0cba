use crate::types::{Ecosystem, Rule, RuleDependency, RuleType};

pub fn rule() -> Rule {
    Rule::new("postgresql", "Postgres", RuleType::Db)
        .with_dependencies([
            (Ecosystem::Npm, "pg"),
            (Ecosystem::Npm, "postgres"),
            (Ecosystem::Npm, "postgres-interval"),
            (Ecosystem::Npm, "@opentelemetry/instrumentation-pg"),
            (Ecosystem::Npm, "@mikro-orm/postgresql"),
            (Ecosystem::Npm, "pg-connection-string"),
            (Ecosystem::Docker, "postgres"),
            (Ecosystem::Docker, "bitnami/postgresql"),
            (Ecosystem::Docker, "circleci/postgres"),
            (Ecosystem::Docker, "cimg/postgres"),
            (Ecosystem::Docker, "ubuntu/postgres"),
            (Ecosystem::Docker, "bitnamicharts/postgresql"),
            (Ecosystem::Rust, "postgres"),
            (Ecosystem::Ruby, "pg"),
        ])
        .with_dependency(
            RuleDependency::new(Ecosystem::Deno, "/x/postgres@/")
                .with_example("https://deno.land/x/postgres@v0.17.0/mod.ts"),
        )
        .with_dependencies([(Ecosystem::Php, "martin-georgiev/postgresql-for-doctrine")])
}
