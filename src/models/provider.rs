// Provider identifiers
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of translation vendors the gateway knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Baidu,
    Bing,
    Caiyun,
    Deepl,
    Tencent,
    Niutrans,
    Youdao,
}

impl Provider {
    pub const ALL: [Provider; 8] = [
        Provider::Google,
        Provider::Baidu,
        Provider::Bing,
        Provider::Caiyun,
        Provider::Deepl,
        Provider::Tencent,
        Provider::Niutrans,
        Provider::Youdao,
    ];

    /// Route segment used for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Baidu => "baidu",
            Provider::Bing => "bing",
            Provider::Caiyun => "caiyun",
            Provider::Deepl => "deepl",
            Provider::Tencent => "tencent",
            Provider::Niutrans => "niutrans",
            Provider::Youdao => "youdao",
        }
    }

    /// Parse a route segment. Exact, case-sensitive match; `xiaoniu` is the
    /// historical route name for NiuTrans.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "google" => Some(Provider::Google),
            "baidu" => Some(Provider::Baidu),
            "bing" => Some(Provider::Bing),
            "caiyun" => Some(Provider::Caiyun),
            "deepl" => Some(Provider::Deepl),
            "tencent" => Some(Provider::Tencent),
            "niutrans" | "xiaoniu" => Some(Provider::Niutrans),
            "youdao" => Some(Provider::Youdao),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = crate::error::GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::error::GatewayError::UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for provider in Provider::ALL {
            assert_eq!(Provider::from_name(provider.as_str()), Some(provider));
        }
    }

    #[test]
    fn test_xiaoniu_alias() {
        assert_eq!(Provider::from_name("xiaoniu"), Some(Provider::Niutrans));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(Provider::from_name("DeepL").is_none());
        assert!(Provider::from_name("BING").is_none());
        assert!("deepl ".parse::<Provider>().is_err());
    }
}
