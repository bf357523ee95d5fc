//! Static alias tables for subjects, units and exam months.
//!
//! The tables are plain ordered slices. Order is significant: the parser takes the first
//! match for whole-token lookups and the last match for the combined-token heuristic, so
//! reordering entries changes how ambiguous shorthand resolves.

/// Canonical subject names, in the order subjects are usually listed.
pub const CANONICAL_SUBJECTS: &[&str] = &[
    "physics",
    "chemistry",
    "biology",
    "mathematics",
    "accounting",
    "economics",
    "business",
    "psychology",
];

/// Shorthand subject tokens mapped to canonical subject names.
///
/// Longer partial prefixes are listed explicitly; there is no stemming.
pub const SUBJECT_ALIASES: &[(&str, &str)] = &[
    ("ph", "physics"),
    ("phy", "physics"),
    ("phys", "physics"),
    ("physi", "physics"),
    ("physic", "physics"),
    ("ch", "chemistry"),
    ("che", "chemistry"),
    ("chem", "chemistry"),
    ("chemi", "chemistry"),
    ("chemis", "chemistry"),
    ("chemist", "chemistry"),
    ("chemistr", "chemistry"),
    ("bi", "biology"),
    ("bio", "biology"),
    ("biol", "biology"),
    ("biolo", "biology"),
    ("biolog", "biology"),
    ("ma", "mathematics"),
    ("mat", "mathematics"),
    ("math", "mathematics"),
    ("maths", "mathematics"),
    ("mathe", "mathematics"),
    ("mathem", "mathematics"),
    ("mathema", "mathematics"),
    ("mathemat", "mathematics"),
    ("mathemati", "mathematics"),
    ("mathematic", "mathematics"),
    ("acc", "accounting"),
    ("acct", "accounting"),
    ("acco", "accounting"),
    ("accou", "accounting"),
    ("accoun", "accounting"),
    ("account", "accounting"),
    ("accounti", "accounting"),
    ("accountin", "accounting"),
    ("ec", "economics"),
    ("eco", "economics"),
    ("econ", "economics"),
    ("econo", "economics"),
    ("econom", "economics"),
    ("economi", "economics"),
    ("economic", "economics"),
    ("bs", "business"),
    ("bus", "business"),
    ("busi", "business"),
    ("busin", "business"),
    ("busine", "business"),
    ("busines", "business"),
    ("ps", "psychology"),
    ("psy", "psychology"),
    ("psych", "psychology"),
    ("psycho", "psychology"),
    ("psychol", "psychology"),
    ("psycholo", "psychology"),
    ("psycholog", "psychology"),
];

/// Mathematics module shorthand.
///
/// Further Pure comes before Pure so substring scans see "further pure 1" before "pure 1".
const MATHEMATICS_UNITS: &[(&str, &str)] = &[
    ("fp1", "Further Pure 1"),
    ("furtherpure1", "Further Pure 1"),
    ("further pure 1", "Further Pure 1"),
    ("fp2", "Further Pure 2"),
    ("furtherpure2", "Further Pure 2"),
    ("further pure 2", "Further Pure 2"),
    ("fp3", "Further Pure 3"),
    ("furtherpure3", "Further Pure 3"),
    ("further pure 3", "Further Pure 3"),
    ("p1", "Pure 1"),
    ("pure1", "Pure 1"),
    ("pure 1", "Pure 1"),
    ("p2", "Pure 2"),
    ("pure2", "Pure 2"),
    ("pure 2", "Pure 2"),
    ("p3", "Pure 3"),
    ("pure3", "Pure 3"),
    ("pure 3", "Pure 3"),
    ("p4", "Pure 4"),
    ("pure4", "Pure 4"),
    ("pure 4", "Pure 4"),
    ("m1", "Mechanics 1"),
    ("mech1", "Mechanics 1"),
    ("mechanics1", "Mechanics 1"),
    ("mechanics 1", "Mechanics 1"),
    ("m2", "Mechanics 2"),
    ("mech2", "Mechanics 2"),
    ("mechanics2", "Mechanics 2"),
    ("mechanics 2", "Mechanics 2"),
    ("m3", "Mechanics 3"),
    ("mech3", "Mechanics 3"),
    ("mechanics3", "Mechanics 3"),
    ("mechanics 3", "Mechanics 3"),
    ("s1", "Statistics 1"),
    ("stat1", "Statistics 1"),
    ("stats1", "Statistics 1"),
    ("statistics 1", "Statistics 1"),
    ("s2", "Statistics 2"),
    ("stat2", "Statistics 2"),
    ("stats2", "Statistics 2"),
    ("statistics 2", "Statistics 2"),
    ("s3", "Statistics 3"),
    ("stat3", "Statistics 3"),
    ("stats3", "Statistics 3"),
    ("statistics 3", "Statistics 3"),
    ("d1", "Decision 1"),
    ("dec1", "Decision 1"),
    ("decision1", "Decision 1"),
    ("decision 1", "Decision 1"),
];

/// Chemistry unit shorthand.
const CHEMISTRY_UNITS: &[(&str, &str)] = &[
    ("u1", "Unit 1"),
    ("unit1", "Unit 1"),
    ("unit 1", "Unit 1"),
    ("c1", "Unit 1"),
    ("chem1", "Unit 1"),
    ("u2", "Unit 2"),
    ("unit2", "Unit 2"),
    ("unit 2", "Unit 2"),
    ("c2", "Unit 2"),
    ("chem2", "Unit 2"),
    ("u3", "Unit 3"),
    ("unit3", "Unit 3"),
    ("unit 3", "Unit 3"),
    ("c3", "Unit 3"),
    ("chem3", "Unit 3"),
    ("u4", "Unit 4"),
    ("unit4", "Unit 4"),
    ("unit 4", "Unit 4"),
    ("c4", "Unit 4"),
    ("chem4", "Unit 4"),
    ("u5", "Unit 5"),
    ("unit5", "Unit 5"),
    ("unit 5", "Unit 5"),
    ("c5", "Unit 5"),
    ("chem5", "Unit 5"),
    ("u6", "Unit 6"),
    ("unit6", "Unit 6"),
    ("unit 6", "Unit 6"),
    ("c6", "Unit 6"),
    ("chem6", "Unit 6"),
];

/// Biology unit shorthand.
const BIOLOGY_UNITS: &[(&str, &str)] = &[
    ("u1", "Unit 1"),
    ("unit1", "Unit 1"),
    ("unit 1", "Unit 1"),
    ("b1", "Unit 1"),
    ("bio1", "Unit 1"),
    ("u2", "Unit 2"),
    ("unit2", "Unit 2"),
    ("unit 2", "Unit 2"),
    ("b2", "Unit 2"),
    ("bio2", "Unit 2"),
    ("u3", "Unit 3"),
    ("unit3", "Unit 3"),
    ("unit 3", "Unit 3"),
    ("b3", "Unit 3"),
    ("bio3", "Unit 3"),
    ("u4", "Unit 4"),
    ("unit4", "Unit 4"),
    ("unit 4", "Unit 4"),
    ("b4", "Unit 4"),
    ("bio4", "Unit 4"),
    ("u5", "Unit 5"),
    ("unit5", "Unit 5"),
    ("unit 5", "Unit 5"),
    ("b5", "Unit 5"),
    ("bio5", "Unit 5"),
    ("u6", "Unit 6"),
    ("unit6", "Unit 6"),
    ("unit 6", "Unit 6"),
    ("b6", "Unit 6"),
    ("bio6", "Unit 6"),
];

/// Accounting unit shorthand.
const ACCOUNTING_UNITS: &[(&str, &str)] = &[
    ("u1", "Unit 1"),
    ("unit1", "Unit 1"),
    ("unit 1", "Unit 1"),
    ("acc1", "Unit 1"),
    ("u2", "Unit 2"),
    ("unit2", "Unit 2"),
    ("unit 2", "Unit 2"),
    ("acc2", "Unit 2"),
];

/// Economics unit shorthand.
const ECONOMICS_UNITS: &[(&str, &str)] = &[
    ("u1", "Unit 1"),
    ("unit1", "Unit 1"),
    ("unit 1", "Unit 1"),
    ("e1", "Unit 1"),
    ("eco1", "Unit 1"),
    ("u2", "Unit 2"),
    ("unit2", "Unit 2"),
    ("unit 2", "Unit 2"),
    ("e2", "Unit 2"),
    ("eco2", "Unit 2"),
    ("u3", "Unit 3"),
    ("unit3", "Unit 3"),
    ("unit 3", "Unit 3"),
    ("e3", "Unit 3"),
    ("eco3", "Unit 3"),
    ("u4", "Unit 4"),
    ("unit4", "Unit 4"),
    ("unit 4", "Unit 4"),
    ("e4", "Unit 4"),
    ("eco4", "Unit 4"),
];

/// Business unit shorthand.
const BUSINESS_UNITS: &[(&str, &str)] = &[
    ("u1", "Unit 1"),
    ("unit1", "Unit 1"),
    ("unit 1", "Unit 1"),
    ("bus1", "Unit 1"),
    ("u2", "Unit 2"),
    ("unit2", "Unit 2"),
    ("unit 2", "Unit 2"),
    ("bus2", "Unit 2"),
    ("u3", "Unit 3"),
    ("unit3", "Unit 3"),
    ("unit 3", "Unit 3"),
    ("bus3", "Unit 3"),
    ("u4", "Unit 4"),
    ("unit4", "Unit 4"),
    ("unit 4", "Unit 4"),
    ("bus4", "Unit 4"),
];

/// Psychology unit shorthand.
const PSYCHOLOGY_UNITS: &[(&str, &str)] = &[
    ("u1", "Unit 1"),
    ("unit1", "Unit 1"),
    ("unit 1", "Unit 1"),
    ("psy1", "Unit 1"),
    ("u2", "Unit 2"),
    ("unit2", "Unit 2"),
    ("unit 2", "Unit 2"),
    ("psy2", "Unit 2"),
    ("u3", "Unit 3"),
    ("unit3", "Unit 3"),
    ("unit 3", "Unit 3"),
    ("psy3", "Unit 3"),
    ("u4", "Unit 4"),
    ("unit4", "Unit 4"),
    ("unit 4", "Unit 4"),
    ("psy4", "Unit 4"),
];

/// Physics unit shorthand.
const PHYSICS_UNITS: &[(&str, &str)] = &[
    ("u1", "Unit 1"),
    ("unit1", "Unit 1"),
    ("unit 1", "Unit 1"),
    ("p1", "Unit 1"),
    ("phy1", "Unit 1"),
    ("u2", "Unit 2"),
    ("unit2", "Unit 2"),
    ("unit 2", "Unit 2"),
    ("p2", "Unit 2"),
    ("phy2", "Unit 2"),
    ("u3", "Unit 3"),
    ("unit3", "Unit 3"),
    ("unit 3", "Unit 3"),
    ("p3", "Unit 3"),
    ("phy3", "Unit 3"),
    ("u4", "Unit 4"),
    ("unit4", "Unit 4"),
    ("unit 4", "Unit 4"),
    ("p4", "Unit 4"),
    ("phy4", "Unit 4"),
    ("u5", "Unit 5"),
    ("unit5", "Unit 5"),
    ("unit 5", "Unit 5"),
    ("p5", "Unit 5"),
    ("phy5", "Unit 5"),
    ("u6", "Unit 6"),
    ("unit6", "Unit 6"),
    ("unit 6", "Unit 6"),
    ("p6", "Unit 6"),
    ("phy6", "Unit 6"),
];

/// Unit tables keyed by canonical subject.
///
/// Physics is last: the combined-token heuristic keeps the last match, so ambiguous
/// shorthand such as `p1` or `u1` glued to other tokens resolves to physics.
pub const UNIT_ALIASES: &[(&str, &[(&str, &str)])] = &[
    ("mathematics", MATHEMATICS_UNITS),
    ("chemistry", CHEMISTRY_UNITS),
    ("biology", BIOLOGY_UNITS),
    ("accounting", ACCOUNTING_UNITS),
    ("economics", ECONOMICS_UNITS),
    ("business", BUSINESS_UNITS),
    ("psychology", PSYCHOLOGY_UNITS),
    ("physics", PHYSICS_UNITS),
];

/// Month abbreviations mapped to full month names.
pub const MONTH_ALIASES: &[(&str, &str)] = &[
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("sept", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Full month names, which are also accepted as session tokens.
pub const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Stand-alone words that carry no search meaning and are dropped during normalization.
pub const NOISE_WORDS: &[&str] = &["paper", "papers", "past", "exam", "exams", "test", "tests"];

/// Resolves a token to a canonical subject name.
///
/// Accepts both alias keys and canonical names. The token must already be lowercase.
pub fn canonical_subject(token: &str) -> Option<&'static str> {
    lookup(SUBJECT_ALIASES, token)
        .or_else(|| CANONICAL_SUBJECTS.iter().copied().find(|s| *s == token))
}

/// Resolves a token to a full month name.
pub fn canonical_month(token: &str) -> Option<&'static str> {
    lookup(MONTH_ALIASES, token).or_else(|| MONTHS.iter().copied().find(|m| *m == token))
}

/// Returns the unit alias table for a canonical subject, if it has one.
pub fn unit_table(subject: &str) -> Option<&'static [(&'static str, &'static str)]> {
    UNIT_ALIASES
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, table)| *table)
}

/// Resolves a token to a canonical unit name within one subject's table.
///
/// Matches alias keys, and canonical unit names compared case-insensitively.
pub fn canonical_unit(subject: &str, token: &str) -> Option<&'static str> {
    let table = unit_table(subject)?;
    lookup(table, token).or_else(|| {
        table
            .iter()
            .map(|(_, unit)| *unit)
            .find(|unit| unit.eq_ignore_ascii_case(token))
    })
}

/// Returns true for words that normalization drops.
pub fn is_noise_word(word: &str) -> bool {
    NOISE_WORDS.contains(&word)
}

/// Finds the first entry in an ordered table whose key equals `key`.
fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
