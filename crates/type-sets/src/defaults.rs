//! Built-in fallback type-sets.
//!
//! Applied for a key only when no external definition for that key was
//! loaded.

pub const ACCOUNT_OWNER: &[&str] = &[
    "Individual",
    "Joint",
    "Corporate",
    "Trust",
    "Government",
    "Non-profit",
    "Partnership",
    "Other entities",
];

pub const ACCOUNTS: &[&str] = &["TFSA", "Non-Registered", "Other"];

pub const BANK_ACCOUNTS: &[&str] = &[
    "Checking",
    "Savings",
    "TFSA",
    "RRSP",
    "RESP",
    "Business",
    "Non-Registered",
    "Other",
];

pub const BILLING: &[&str] = &["Monthly", "Yearly"];

pub const BORROWER: &[&str] = &[
    "Personal Loan",
    "Mortgage",
    "Auto Loan",
    "Student Load",
    "Others",
];

pub const CATEGORIES: &[&str] = &[
    "Stock",
    "Option",
    "ETF",
    "Fund",
    "Bonds",
    "Fixed-Income",
    "REIT",
    "Cryptocurrencies",
    "Others",
];

pub const STATUS: &[&str] = &["Active", "Canceled", "OnHold"];

pub const TIERS: &[&str] = &[
    "Tier 1 - Core Foundation (broad-market ETFs, e.g. S&P 500, TSX 60)",
    "Tier 2 - Strategic Anchors (sector ETFs, defensive stocks)",
    "Tier 3 - Growth Drivers (tech, healthcare, mid-cap ETFs)",
    "Tier 4 - Opportunistic Plays (trends, emerging markets, niche ETFs)",
    "Tier 5 - High-Risk Satellites (speculative single stocks, leveraged ETFs)",
];

/// Every fallback set keyed by its canonical name.
pub const FALLBACK_TYPE_SETS: &[(&str, &[&str])] = &[
    ("account_owner", ACCOUNT_OWNER),
    ("accounts", ACCOUNTS),
    ("bank_accounts", BANK_ACCOUNTS),
    ("billing", BILLING),
    ("borrower", BORROWER),
    ("categories", CATEGORIES),
    ("status", STATUS),
    ("tiers", TIERS),
];
