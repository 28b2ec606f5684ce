//! Per-provider supported language sets.
//!
//! Every vendor accepts a different closed set of language codes, often with
//! its own spelling (`jp` vs `ja`, `zh-CHS` vs `zh-Hans`). The tables are
//! compiled in and never change at runtime; adapters hand out `&'static`
//! references to them.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod tables;

use crate::models::Provider;
use serde::Serialize;
use tables::Table;

/// Immutable mapping from language code to display name for one provider.
pub struct LanguageSet {
    provider: Provider,
    table: &'static Table,
    case_insensitive: bool,
}

/// One entry of a language listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

impl LanguageSet {
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Canonical spelling of `code` if the provider supports it.
    pub fn resolve(&self, code: &str) -> Option<&'static str> {
        if let Some((key, _)) = self.table.get_entry(code) {
            return Some(*key);
        }
        if self.case_insensitive {
            return self
                .table
                .keys()
                .find(|key| key.eq_ignore_ascii_case(code))
                .copied();
        }
        None
    }

    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    pub fn display_name(&self, code: &str) -> Option<&'static str> {
        self.resolve(code).and_then(|key| self.table.get(key).copied())
    }

    /// Supported codes in table order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.table.keys().copied().collect()
    }

    pub fn languages(&self) -> Vec<Language> {
        self.table
            .entries()
            .map(|(code, name)| Language {
                code: *code,
                name: *name,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl std::fmt::Debug for LanguageSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageSet")
            .field("provider", &self.provider)
            .field("languages", &self.table.len())
            .field("case_insensitive", &self.case_insensitive)
            .finish()
    }
}

pub static GOOGLE: LanguageSet = LanguageSet {
    provider: Provider::Google,
    table: &tables::GOOGLE,
    case_insensitive: false,
};

pub static BAIDU: LanguageSet = LanguageSet {
    provider: Provider::Baidu,
    table: &tables::BAIDU,
    case_insensitive: false,
};

pub static BING: LanguageSet = LanguageSet {
    provider: Provider::Bing,
    table: &tables::BING,
    case_insensitive: false,
};

pub static CAIYUN: LanguageSet = LanguageSet {
    provider: Provider::Caiyun,
    table: &tables::CAIYUN,
    case_insensitive: false,
};

// DeepL documents its codes as case-insensitive.
pub static DEEPL: LanguageSet = LanguageSet {
    provider: Provider::Deepl,
    table: &tables::DEEPL,
    case_insensitive: true,
};

pub static DEEPL_SOURCE: LanguageSet = LanguageSet {
    provider: Provider::Deepl,
    table: &tables::DEEPL_SOURCE,
    case_insensitive: true,
};

pub static TENCENT: LanguageSet = LanguageSet {
    provider: Provider::Tencent,
    table: &tables::TENCENT,
    case_insensitive: false,
};

pub static NIUTRANS: LanguageSet = LanguageSet {
    provider: Provider::Niutrans,
    table: &tables::NIUTRANS,
    case_insensitive: true,
};

pub static YOUDAO: LanguageSet = LanguageSet {
    provider: Provider::Youdao,
    table: &tables::YOUDAO,
    case_insensitive: false,
};

/// Language set compiled in for `provider`.
pub fn for_provider(provider: Provider) -> &'static LanguageSet {
    match provider {
        Provider::Google => &GOOGLE,
        Provider::Baidu => &BAIDU,
        Provider::Bing => &BING,
        Provider::Caiyun => &CAIYUN,
        Provider::Deepl => &DEEPL,
        Provider::Tencent => &TENCENT,
        Provider::Niutrans => &NIUTRANS,
        Provider::Youdao => &YOUDAO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        assert_eq!(BAIDU.resolve("jp"), Some("jp"));
        assert!(BAIDU.resolve("ja").is_none());
        assert_eq!(YOUDAO.resolve("zh-CHS"), Some("zh-CHS"));
        assert!(YOUDAO.resolve("zh-chs").is_none());
    }

    #[test]
    fn test_case_insensitive_lookup_returns_canonical_code() {
        assert_eq!(DEEPL.resolve("de"), Some("DE"));
        assert_eq!(DEEPL.resolve("en-gb"), Some("EN-GB"));
        assert_eq!(NIUTRANS.resolve("ZH"), Some("zh"));
    }

    #[test]
    fn test_auto_is_never_a_target() {
        for provider in Provider::ALL {
            assert!(!for_provider(provider).contains("auto"), "{}", provider);
        }
    }

    #[test]
    fn test_sets_match_their_provider() {
        for provider in Provider::ALL {
            let set = for_provider(provider);
            assert_eq!(set.provider(), provider);
            assert!(!set.is_empty());
            assert_eq!(set.codes().len(), set.len());
        }
    }

    #[test]
    fn test_codes_keep_table_order() {
        assert_eq!(CAIYUN.codes(), vec!["zh", "en", "ja"]);
    }

    #[test]
    fn test_deepl_source_set_has_no_regional_variants() {
        assert_eq!(DEEPL_SOURCE.resolve("en"), Some("EN"));
        assert!(DEEPL_SOURCE.resolve("EN-GB").is_none());
        assert!(DEEPL_SOURCE.resolve("pt-br").is_none());
        assert!(DEEPL_SOURCE.codes().iter().all(|code| DEEPL.contains(code)));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(GOOGLE.display_name("de"), Some("German"));
        assert_eq!(DEEPL.display_name("pt-br"), Some("Portuguese (Brazilian)"));
        assert!(GOOGLE.display_name("xx").is_none());
    }
}
