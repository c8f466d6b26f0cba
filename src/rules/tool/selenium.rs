use crate::types::{Ecosystem, Rule, RuleType};

pub fn rule() -> Rule {
    Rule::new("selenium", "Selenium", RuleType::Tool).with_dependencies([
        (Ecosystem::Npm, "selenium"),
        (Ecosystem::Npm, "selenium-webdriver"),
        (Ecosystem::Npm, "webdriver-js-extender"),
        (Ecosystem::Npm, "@wdio/selenium-standalone-service"),
        (Ecosystem::Php, "php-webdriver/webdriver"),
        (Ecosystem::Php, "behat/mink-selenium2-driver"),
        (Ecosystem::Php, "symfony/panther"),
        (Ecosystem::Php, "instaclick/php-webdriver"),
        (Ecosystem::Php, "phpunit/phpunit-selenium"),
        (Ecosystem::Php, "se/selenium-server-standalone"),
        (Ecosystem::Ruby, "selenium-webdriver"),
        (Ecosystem::Ruby, "selenium"),
        (Ecosystem::Ruby, "selenium-client"),
        (Ecosystem::Ruby, "capybara-selenium"),
        (Ecosystem::Rust, "thirtyfour"),
        (Ecosystem::Rust, "selenium-rs"),
        (Ecosystem::GithubAction, "Xotabu4/selenoid-github-action"),
        (Ecosystem::Golang, "github.com/tebeka/selenium"),
        (Ecosystem::Python, "selenium"),
        (Ecosystem::Docker, "selenium/standalone-chrome"),
        (Ecosystem::Docker, "selenium/node-chrome"),
        (Ecosystem::Docker, "selenium/hub"),
        (Ecosystem::Docker, "selenium/node-firefox"),
        (Ecosystem::Docker, "selenium/standalone-firefox"),
        (Ecosystem::Docker, "selenium/standalone-chrome-debug"),
        (Ecosystem::Docker, "selenium/node-chrome-debug"),
        (Ecosystem::Docker, "selenium/base"),
        (Ecosystem::Docker, "selenium/node-edge"),
        (Ecosystem::Docker, "selenium/node-firefox-debug"),
        (Ecosystem::Docker, "selenium/standalone-firefox-debug"),
        (Ecosystem::Docker, "selenium/node-opera"),
    ])
}
