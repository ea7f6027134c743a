//! Currency naming: localized display names and filesystem-safe cache keys.

use std::fmt;

/// Canonical English name to Simplified Chinese display name.
///
/// Lookups fall back to the canonical name, so the table only needs entries
/// for currencies worth translating.
static LOCALIZED_NAMES: &[(&str, &str)] = &[
    ("Mirror of Kalandra", "卡兰德的魔镜"),
    ("Mirror Shard", "魔镜碎片"),
    ("Hinekora's Lock", "卡兰德之锁"),
    ("Divine Orb", "神圣石"),
    ("Exalted Orb", "崇高石"),
    ("Ancient Orb", "远古宝珠"),
    ("Fracturing Orb", "分裂宝珠"),
    ("Fracturing Shard", "分裂碎片"),
    ("Chaos Orb", "混沌石"),
    ("Vaal Orb", "瓦尔宝珠"),
    ("Orb of Annulment", "剥离宝珠"),
    ("Orb of Regret", "后缀重铸石"),
    ("Orb of Unmaking", "洗点水"),
    ("Orb of Scouring", "重铸石"),
    ("Orb of Alchemy", "点金石"),
    ("Orb of Fusing", "连接石"),
    ("Orb of Alteration", "改造石"),
    ("Chromatic Orb", "幻色石"),
    ("Enkindling Orb", "点燃宝珠"),
    ("Instilling Orb", "滴注宝珠"),
    ("Gemcutter's Prism", "宝石匠的棱镜"),
    ("Glassblower's Bauble", "玻璃弹珠"),
    ("Cartographer's Chisel", "制图钉"),
    ("Sacred Orb", "神圣宝珠"),
    ("Reflecting Mist", "反射迷雾"),
    ("Eldritch Chaos Orb", "古灵混沌石"),
    ("Eldritch Exalted Orb", "古灵崇高石"),
    ("Orb of Conflict", "冲突宝珠"),
    ("Awakener's Orb", "觉醒者宝珠"),
    ("Orb of Remembrance", "追忆宝珠"),
    ("Artificer's Orb", "工匠宝珠"),
    ("Lesser Jeweller's Orb", "次级工匠宝珠"),
];

/// Localized display name for a canonical currency name.
///
/// Unmapped names are returned unchanged.
#[must_use]
pub fn localized_name(canonical: &str) -> &str {
    LOCALIZED_NAMES
        .iter()
        .find(|(en, _)| *en == canonical)
        .map_or(canonical, |&(_, zh)| zh)
}

/// Filesystem-safe key derived from a canonical currency name.
///
/// Spaces become underscores; apostrophes, quotes, colons and path
/// separators are dropped. The mapping is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a canonical name.
    pub fn from_name(name: &str) -> Self {
        Self(sanitize_key(name))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the cached icon for this key.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.png", self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strip characters that are unsafe in cache file names.
#[must_use]
pub fn sanitize_key(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '\'' | '"' | ':' | '/' | '\\' => None,
            other => Some(other),
        })
        .collect()
}
