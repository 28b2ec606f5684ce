// Compiled-in language tables, one per provider
// Author: kelexine (https://github.com/kelexine)

use phf::{phf_ordered_map, OrderedMap};

pub type Table = OrderedMap<&'static str, &'static str>;

pub static GOOGLE: Table = phf_ordered_map! {
    "af" => "Afrikaans", "sq" => "Albanian", "am" => "Amharic", "ar" => "Arabic",
    "hy" => "Armenian", "az" => "Azerbaijani", "eu" => "Basque", "bn" => "Bengali",
    "bs" => "Bosnian", "bg" => "Bulgarian", "my" => "Burmese", "ca" => "Catalan",
    "ceb" => "Cebuano", "zh" => "Chinese (Simplified)", "zh-TW" => "Chinese (Traditional)",
    "co" => "Corsican", "hr" => "Croatian", "cs" => "Czech", "da" => "Danish",
    "nl" => "Dutch", "en" => "English", "eo" => "Esperanto", "et" => "Estonian",
    "tl" => "Filipino (Tagalog)", "fi" => "Finnish", "fr" => "French", "fy" => "Frisian",
    "gl" => "Galician", "ka" => "Georgian", "de" => "German", "el" => "Greek",
    "gu" => "Gujarati", "ht" => "Haitian Creole", "ha" => "Hausa", "haw" => "Hawaiian",
    "he" => "Hebrew", "hi" => "Hindi", "hmn" => "Hmong", "hu" => "Hungarian",
    "is" => "Icelandic", "ig" => "Igbo", "ilo" => "Ilocano", "id" => "Indonesian",
    "ga" => "Irish", "it" => "Italian", "ja" => "Japanese", "jv" => "Javanese",
    "kn" => "Kannada", "kk" => "Kazakh", "km" => "Khmer", "rw" => "Kinyarwanda",
    "ko" => "Korean", "ku" => "Kurdish (Kurmanji)", "ky" => "Kyrgyz", "lo" => "Lao",
    "la" => "Latin", "lv" => "Latvian", "lt" => "Lithuanian", "lb" => "Luxembourgish",
    "mk" => "Macedonian", "mg" => "Malagasy", "ms" => "Malay", "ml" => "Malayalam",
    "mt" => "Maltese", "mi" => "Maori", "mr" => "Marathi", "mn" => "Mongolian",
    "ne" => "Nepali", "no" => "Norwegian", "or" => "Odia (Oriya)", "ps" => "Pashto",
    "fa" => "Persian (Farsi)", "pl" => "Polish", "pt" => "Portuguese", "pa" => "Punjabi",
    "ro" => "Romanian", "ru" => "Russian", "su" => "Sundanese", "sv" => "Swedish",
    "sw" => "Swahili", "sm" => "Samoan", "gd" => "Scots Gaelic", "sr" => "Serbian",
    "st" => "Sesotho", "sn" => "Shona", "sd" => "Sindhi", "si" => "Sinhala",
    "sk" => "Slovak", "so" => "Somali", "es" => "Spanish", "tg" => "Tajik",
    "te" => "Telugu", "tr" => "Turkish", "ta" => "Tamil", "th" => "Thai",
    "ur" => "Urdu", "uk" => "Ukrainian", "uz" => "Uzbek", "vi" => "Vietnamese",
    "cy" => "Welsh", "xh" => "Xhosa", "yo" => "Yoruba", "yi" => "Yiddish",
    "zu" => "Zulu",
};

pub static BAIDU: Table = phf_ordered_map! {
    "zh" => "Chinese", "en" => "English", "yue" => "Cantonese", "wyw" => "Classical Chinese",
    "jp" => "Japanese", "kor" => "Korean", "fra" => "French", "spa" => "Spanish",
    "th" => "Thai", "ara" => "Arabic", "ru" => "Russian", "pt" => "Portuguese",
    "de" => "German", "it" => "Italian", "el" => "Greek", "nl" => "Dutch",
    "pl" => "Polish", "bul" => "Bulgarian", "est" => "Estonian", "dan" => "Danish",
    "fin" => "Finnish", "cs" => "Czech", "rom" => "Romanian", "slo" => "Slovenian",
    "swe" => "Swedish", "hu" => "Hungarian", "cht" => "Chinese (Traditional)",
    "vie" => "Vietnamese",
};

pub static BING: Table = phf_ordered_map! {
    "af" => "Afrikaans", "am" => "Amharic", "ar" => "Arabic", "as" => "Assamese",
    "az" => "Azerbaijani", "ba" => "Bashkir", "be" => "Belarusian", "bg" => "Bulgarian",
    "bho" => "Bhojpuri", "bn" => "Bangla", "bo" => "Tibetan", "brx" => "Bodo",
    "bs" => "Bosnian", "ca" => "Catalan", "cs" => "Czech", "cy" => "Welsh",
    "da" => "Danish", "de" => "German", "doi" => "Dogri", "dsb" => "Lower Sorbian",
    "dv" => "Divehi", "el" => "Greek", "en" => "English", "es" => "Spanish",
    "et" => "Estonian", "eu" => "Basque", "fa" => "Persian", "fi" => "Finnish",
    "fil" => "Filipino", "fj" => "Fijian", "fo" => "Faroese", "fr" => "French",
    "fr-CA" => "French (Canada)", "ga" => "Irish", "gl" => "Galician", "gom" => "Konkani",
    "gu" => "Gujarati", "ha" => "Hausa", "he" => "Hebrew", "hi" => "Hindi",
    "hne" => "Chhattisgarhi", "hr" => "Croatian", "hsb" => "Upper Sorbian",
    "ht" => "Haitian Creole", "hu" => "Hungarian", "hy" => "Armenian", "id" => "Indonesian",
    "ig" => "Igbo", "ikt" => "Inuinnaqtun", "is" => "Icelandic", "it" => "Italian",
    "iu" => "Inuktitut", "iu-Latn" => "Inuktitut (Latin)", "ja" => "Japanese",
    "ka" => "Georgian", "kk" => "Kazakh", "km" => "Khmer", "kmr" => "Kurdish (Northern)",
    "kn" => "Kannada", "ko" => "Korean", "ks" => "Kashmiri", "ku" => "Kurdish (Central)",
    "ky" => "Kyrgyz", "lb" => "Luxembourgish", "ln" => "Lingala", "lo" => "Lao",
    "lt" => "Lithuanian", "lug" => "Ganda", "lv" => "Latvian", "lzh" => "Chinese (Literary)",
    "mai" => "Maithili", "mg" => "Malagasy", "mi" => "Māori", "mk" => "Macedonian",
    "ml" => "Malayalam", "mn-Cyrl" => "Mongolian (Cyrillic)",
    "mn-Mong" => "Mongolian (Traditional)", "mni" => "Manipuri", "mr" => "Marathi",
    "ms" => "Malay", "mt" => "Maltese", "mww" => "Hmong Daw", "my" => "Myanmar (Burmese)",
    "nb" => "Norwegian", "ne" => "Nepali", "nl" => "Dutch", "nso" => "Sesotho sa Leboa",
    "nya" => "Nyanja", "or" => "Odia", "otq" => "Querétaro Otomi", "pa" => "Punjabi",
    "pl" => "Polish", "prs" => "Dari", "ps" => "Pashto", "pt" => "Portuguese (Brazil)",
    "pt-PT" => "Portuguese (Portugal)", "ro" => "Romanian", "ru" => "Russian",
    "run" => "Rundi", "rw" => "Kinyarwanda", "sd" => "Sindhi", "si" => "Sinhala",
    "sk" => "Slovak", "sl" => "Slovenian", "sm" => "Samoan", "sn" => "Shona",
    "so" => "Somali", "sq" => "Albanian", "sr-Cyrl" => "Serbian (Cyrillic)",
    "sr-Latn" => "Serbian (Latin)", "st" => "Sesotho", "sv" => "Swedish", "sw" => "Swahili",
    "ta" => "Tamil", "te" => "Telugu", "th" => "Thai", "ti" => "Tigrinya",
    "tk" => "Turkmen", "tlh-Latn" => "Klingon (Latin)", "tlh-Piqd" => "Klingon (pIqaD)",
    "tn" => "Setswana", "to" => "Tongan", "tr" => "Turkish", "tt" => "Tatar",
    "ty" => "Tahitian", "ug" => "Uyghur", "uk" => "Ukrainian", "ur" => "Urdu",
    "uz" => "Uzbek (Latin)", "vi" => "Vietnamese", "xh" => "Xhosa", "yo" => "Yoruba",
    "yua" => "Yucatec Maya", "yue" => "Cantonese (Traditional)",
    "zh-Hans" => "Chinese Simplified", "zh-Hant" => "Chinese Traditional", "zu" => "Zulu",
};

pub static CAIYUN: Table = phf_ordered_map! {
    "zh" => "Chinese",
    "en" => "English",
    "ja" => "Japanese",
};

pub static DEEPL: Table = phf_ordered_map! {
    "BG" => "Bulgarian", "CS" => "Czech", "DA" => "Danish", "DE" => "German",
    "EL" => "Greek", "EN-GB" => "English (British)", "EN-US" => "English (American)",
    "EN" => "English", "ES" => "Spanish", "ET" => "Estonian", "FI" => "Finnish",
    "FR" => "French", "HU" => "Hungarian", "ID" => "Indonesian", "IT" => "Italian",
    "JA" => "Japanese", "KO" => "Korean", "LT" => "Lithuanian", "LV" => "Latvian",
    "NB" => "Norwegian (Bokmål)", "NL" => "Dutch", "PL" => "Polish",
    "PT-BR" => "Portuguese (Brazilian)", "PT-PT" => "Portuguese (European)",
    "PT" => "Portuguese", "RO" => "Romanian", "RU" => "Russian", "SK" => "Slovak",
    "SL" => "Slovenian", "SV" => "Swedish", "TR" => "Turkish", "UK" => "Ukrainian",
    "ZH" => "Chinese",
};

// DeepL accepts regional variants only as targets.
pub static DEEPL_SOURCE: Table = phf_ordered_map! {
    "BG" => "Bulgarian", "CS" => "Czech", "DA" => "Danish", "DE" => "German",
    "EL" => "Greek", "EN" => "English", "ES" => "Spanish", "ET" => "Estonian",
    "FI" => "Finnish", "FR" => "French", "HU" => "Hungarian", "ID" => "Indonesian",
    "IT" => "Italian", "JA" => "Japanese", "KO" => "Korean", "LT" => "Lithuanian",
    "LV" => "Latvian", "NB" => "Norwegian (Bokmål)", "NL" => "Dutch", "PL" => "Polish",
    "PT" => "Portuguese", "RO" => "Romanian", "RU" => "Russian", "SK" => "Slovak",
    "SL" => "Slovenian", "SV" => "Swedish", "TR" => "Turkish", "UK" => "Ukrainian",
    "ZH" => "Chinese",
};

pub static TENCENT: Table = phf_ordered_map! {
    "zh" => "Chinese (Simplified)", "zh-TW" => "Chinese (Traditional)", "en" => "English",
    "ja" => "Japanese", "ko" => "Korean", "fr" => "French", "es" => "Spanish",
    "it" => "Italian", "de" => "German", "tr" => "Turkish", "ru" => "Russian",
    "pt" => "Portuguese", "vi" => "Vietnamese", "id" => "Indonesian", "th" => "Thai",
    "ms" => "Malay", "ar" => "Arabic", "hi" => "Hindi",
};

pub static NIUTRANS: Table = phf_ordered_map! {
    "zh" => "Chinese", "en" => "English", "yue" => "Cantonese", "wyw" => "Classical Chinese",
    "jp" => "Japanese", "kor" => "Korean", "fra" => "French", "spa" => "Spanish",
    "ara" => "Arabic", "bg" => "Bulgarian", "et" => "Estonian", "cs" => "Czech",
    "dan" => "Danish", "fin" => "Finnish", "ro" => "Romanian", "sl" => "Slovenian",
    "sw" => "Swahili", "hu" => "Hungarian", "cht" => "Chinese (Traditional)",
    "nl" => "Dutch", "el" => "Greek", "it" => "Italian", "de" => "German",
    "tr" => "Turkish", "ru" => "Russian", "pl" => "Polish", "th" => "Thai",
    "pt" => "Portuguese", "vi" => "Vietnamese", "id" => "Indonesian", "ms" => "Malay",
    "hi" => "Hindi", "bn" => "Bengali", "fa" => "Persian", "sr" => "Serbian",
    "uk" => "Ukrainian", "he" => "Hebrew", "mn" => "Mongolian", "ne" => "Nepali",
    "si" => "Sinhala", "km" => "Khmer", "lo" => "Lao", "my" => "Burmese",
    "am" => "Amharic", "az" => "Azerbaijani", "ka" => "Georgian", "pa" => "Punjabi",
    "te" => "Telugu", "ta" => "Tamil", "mr" => "Marathi", "gu" => "Gujarati",
    "kn" => "Kannada", "ml" => "Malayalam", "ur" => "Urdu",
};

pub static YOUDAO: Table = phf_ordered_map! {
    "zh-CHS" => "Chinese (Simplified)", "zh-CHT" => "Chinese (Traditional)",
    "en" => "English", "ja" => "Japanese", "ko" => "Korean", "fr" => "French",
    "es" => "Spanish", "pt" => "Portuguese", "ru" => "Russian", "vi" => "Vietnamese",
    "de" => "German", "ar" => "Arabic", "id" => "Indonesian", "it" => "Italian",
    "ms" => "Malay", "th" => "Thai", "tr" => "Turkish", "bn" => "Bengali",
    "fa" => "Persian", "hi" => "Hindi", "km" => "Khmer", "lo" => "Lao",
    "my" => "Burmese", "ne" => "Nepali", "si" => "Sinhala", "sr" => "Serbian",
    "uk" => "Ukrainian", "he" => "Hebrew", "el" => "Greek", "sv" => "Swedish",
    "da" => "Danish", "fi" => "Finnish", "no" => "Norwegian", "pl" => "Polish",
    "ro" => "Romanian", "hu" => "Hungarian", "cs" => "Czech", "sk" => "Slovak",
    "bg" => "Bulgarian", "hr" => "Croatian", "lt" => "Lithuanian", "lv" => "Latvian",
    "et" => "Estonian", "sl" => "Slovenian", "ca" => "Catalan", "af" => "Afrikaans",
    "sw" => "Swahili", "ga" => "Irish", "mt" => "Maltese", "mi" => "Maori",
    "cy" => "Welsh", "is" => "Icelandic", "mk" => "Macedonian", "sq" => "Albanian",
    "az" => "Azerbaijani", "eu" => "Basque", "be" => "Belarusian", "gl" => "Galician",
    "ka" => "Georgian", "tt" => "Tatar", "ug" => "Uyghur", "ur" => "Urdu",
    "ps" => "Pashto", "ku" => "Kurdish", "ky" => "Kyrgyz", "tg" => "Tajik",
    "mn" => "Mongolian", "hy" => "Armenian", "te" => "Telugu", "mr" => "Marathi",
    "gu" => "Gujarati", "ta" => "Tamil", "kn" => "Kannada", "ml" => "Malayalam",
    "pa" => "Punjabi", "am" => "Amharic", "so" => "Somali", "yo" => "Yoruba",
    "zu" => "Zulu", "xh" => "Xhosa", "st" => "Sesotho", "sn" => "Shona",
    "rw" => "Kinyarwanda", "ny" => "Chichewa", "ha" => "Hausa", "ig" => "Igbo",
    "lb" => "Luxembourgish", "gd" => "Scots Gaelic", "sm" => "Samoan", "to" => "Tongan",
    "fj" => "Fijian", "ht" => "Haitian Creole", "qu" => "Quechua", "la" => "Latin",
    "sa" => "Sanskrit", "bo" => "Tibetan", "dv" => "Divehi", "yi" => "Yiddish",
};
