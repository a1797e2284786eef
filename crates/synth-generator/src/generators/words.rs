//! Built-in word lists used by pattern placeholders.

pub const FIRST_NAMES: &[&str] = &[
    "Avery", "Blake", "Camille", "Dana", "Elliot", "Farah", "Gideon", "Harper", "Imani", "Jonah",
    "Keira", "Luca", "Maren", "Nadia", "Omar", "Priya", "Quinn", "Rafael", "Sienna", "Tobias",
    "Uma", "Victor", "Willa", "Xavier", "Yara", "Zane",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Barrett", "Castillo", "Delaney", "Ellison", "Fitzgerald", "Greer", "Hollis",
    "Ingram", "Jaramillo", "Kessler", "Lindqvist", "Mahoney", "Navarro", "Okafor", "Pemberton",
    "Quintero", "Rasmussen", "Sandoval", "Thornton", "Underwood", "Vasquez", "Whitaker", "Yates",
    "Zimmerman",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "Holdings", "and Sons", "Partners"];

pub const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Centralized", "Customizable", "Diverse", "Enhanced", "Ergonomic",
    "Focused", "Integrated", "Managed", "Optimized", "Proactive", "Reactive", "Robust",
    "Seamless", "Streamlined", "Synergized", "Universal", "Versatile", "Virtual",
];

pub const CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asymmetric", "bi-directional", "client-driven", "contextually-based",
    "cross-platform", "dynamic", "fault-tolerant", "global", "high-level", "interactive",
    "mission-critical", "multi-tiered", "next generation", "real-time", "scalable", "secure",
    "user-facing", "value-added", "zero tolerance",
];

pub const CATCH_PHRASE_NOUNS: &[&str] = &[
    "ability", "algorithm", "application", "benchmark", "capability", "database", "framework",
    "hub", "initiative", "interface", "matrix", "methodology", "model", "paradigm", "platform",
    "portal", "service-desk", "solution", "strategy", "toolset",
];

pub const ACCOUNT_KINDS: &[&str] = &[
    "Checking", "Savings", "Money Market", "Investment", "Home Loan", "Credit Card", "Auto Loan",
    "Personal Loan",
];

pub const NOUNS: &[&str] = &[
    "anchor", "basket", "canvas", "dune", "engine", "fabric", "garden", "harbor", "island",
    "journal", "kettle", "lantern", "meadow", "notebook", "orchard", "pillow", "quarry", "ribbon",
    "saddle", "ticket", "umbrella", "valley", "window", "yard",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org", "mail.test"];

/// Look up a word list by placeholder name.
pub fn list(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "first" => Some(FIRST_NAMES),
        "last" => Some(LAST_NAMES),
        "company_suffix" => Some(COMPANY_SUFFIXES),
        "adjective" => Some(CATCH_PHRASE_ADJECTIVES),
        "descriptor" => Some(CATCH_PHRASE_DESCRIPTORS),
        "phrase_noun" => Some(CATCH_PHRASE_NOUNS),
        "account_kind" => Some(ACCOUNT_KINDS),
        "noun" => Some(NOUNS),
        "domain" => Some(EMAIL_DOMAINS),
        _ => None,
    }
}
