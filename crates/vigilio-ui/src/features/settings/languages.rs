//! ISO 639-1 languages offered by the subtitle picker.

use crate::features::settings::state::matches_filter;

/// Language entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    /// Two-letter code.
    pub iso: &'static str,
    /// English name.
    pub name: &'static str,
}

/// Every supported language, in picker order.
pub const LANGUAGES: &[Language] = &[
    Language {
        iso: "aa",
        name: "Afar",
    },
    Language {
        iso: "ab",
        name: "Abkhazian",
    },
    Language {
        iso: "af",
        name: "Afrikaans",
    },
    Language {
        iso: "ak",
        name: "Akan",
    },
    Language {
        iso: "sq",
        name: "Albanian",
    },
    Language {
        iso: "am",
        name: "Amharic",
    },
    Language {
        iso: "ar",
        name: "Arabic",
    },
    Language {
        iso: "an",
        name: "Aragonese",
    },
    Language {
        iso: "hy",
        name: "Armenian",
    },
    Language {
        iso: "as",
        name: "Assamese",
    },
    Language {
        iso: "av",
        name: "Avaric",
    },
    Language {
        iso: "ay",
        name: "Aymara",
    },
    Language {
        iso: "az",
        name: "Azerbaijani",
    },
    Language {
        iso: "ba",
        name: "Bashkir",
    },
    Language {
        iso: "bm",
        name: "Bambara",
    },
    Language {
        iso: "eu",
        name: "Basque",
    },
    Language {
        iso: "be",
        name: "Belarusian",
    },
    Language {
        iso: "bn",
        name: "Bengali",
    },
    Language {
        iso: "bi",
        name: "Bislama",
    },
    Language {
        iso: "bs",
        name: "Bosnian",
    },
    Language {
        iso: "br",
        name: "Breton",
    },
    Language {
        iso: "bg",
        name: "Bulgarian",
    },
    Language {
        iso: "my",
        name: "Burmese",
    },
    Language {
        iso: "ca",
        name: "Catalan",
    },
    Language {
        iso: "ch",
        name: "Chamorro",
    },
    Language {
        iso: "ce",
        name: "Chechen",
    },
    Language {
        iso: "zh",
        name: "Chinese",
    },
    Language {
        iso: "cv",
        name: "Chuvash",
    },
    Language {
        iso: "kw",
        name: "Cornish",
    },
    Language {
        iso: "co",
        name: "Corsican",
    },
    Language {
        iso: "cr",
        name: "Cree",
    },
    Language {
        iso: "hr",
        name: "Croatian",
    },
    Language {
        iso: "cs",
        name: "Czech",
    },
    Language {
        iso: "da",
        name: "Danish",
    },
    Language {
        iso: "dv",
        name: "Divehi",
    },
    Language {
        iso: "nl",
        name: "Dutch",
    },
    Language {
        iso: "dz",
        name: "Dzongkha",
    },
    Language {
        iso: "en",
        name: "English",
    },
    Language {
        iso: "eo",
        name: "Esperanto",
    },
    Language {
        iso: "et",
        name: "Estonian",
    },
    Language {
        iso: "ee",
        name: "Ewe",
    },
    Language {
        iso: "fo",
        name: "Faroese",
    },
    Language {
        iso: "fj",
        name: "Fijian",
    },
    Language {
        iso: "fi",
        name: "Finnish",
    },
    Language {
        iso: "fr",
        name: "French",
    },
    Language {
        iso: "fy",
        name: "Western Frisian",
    },
    Language {
        iso: "ff",
        name: "Fulah",
    },
    Language {
        iso: "ka",
        name: "Georgian",
    },
    Language {
        iso: "de",
        name: "German",
    },
    Language {
        iso: "gd",
        name: "Gaelic",
    },
    Language {
        iso: "ga",
        name: "Irish",
    },
    Language {
        iso: "gl",
        name: "Galician",
    },
    Language {
        iso: "gv",
        name: "Manx",
    },
    Language {
        iso: "el",
        name: "Greek",
    },
    Language {
        iso: "gn",
        name: "Guarani",
    },
    Language {
        iso: "gu",
        name: "Gujarati",
    },
    Language {
        iso: "ht",
        name: "Haitian",
    },
    Language {
        iso: "ha",
        name: "Hausa",
    },
    Language {
        iso: "he",
        name: "Hebrew",
    },
    Language {
        iso: "hz",
        name: "Herero",
    },
    Language {
        iso: "hi",
        name: "Hindi",
    },
    Language {
        iso: "ho",
        name: "Hiri Motu",
    },
    Language {
        iso: "hu",
        name: "Hungarian",
    },
    Language {
        iso: "ig",
        name: "Igbo",
    },
    Language {
        iso: "is",
        name: "Icelandic",
    },
    Language {
        iso: "io",
        name: "Ido",
    },
    Language {
        iso: "ii",
        name: "Sichuan Yi",
    },
    Language {
        iso: "iu",
        name: "Inuktitut",
    },
    Language {
        iso: "ie",
        name: "Interlingue",
    },
    Language {
        iso: "ia",
        name: "Interlingua",
    },
    Language {
        iso: "id",
        name: "Indonesian",
    },
    Language {
        iso: "ik",
        name: "Inupiaq",
    },
    Language {
        iso: "it",
        name: "Italian",
    },
    Language {
        iso: "jv",
        name: "Javanese",
    },
    Language {
        iso: "ja",
        name: "Japanese",
    },
    Language {
        iso: "kl",
        name: "Kalaallisut",
    },
    Language {
        iso: "kn",
        name: "Kannada",
    },
    Language {
        iso: "ks",
        name: "Kashmiri",
    },
    Language {
        iso: "kr",
        name: "Kanuri",
    },
    Language {
        iso: "kk",
        name: "Kazakh",
    },
    Language {
        iso: "km",
        name: "Central Khmer",
    },
    Language {
        iso: "ki",
        name: "Kikuyu",
    },
    Language {
        iso: "rw",
        name: "Kinyarwanda",
    },
    Language {
        iso: "ky",
        name: "Kirghiz",
    },
    Language {
        iso: "kv",
        name: "Komi",
    },
    Language {
        iso: "kg",
        name: "Kongo",
    },
    Language {
        iso: "ko",
        name: "Korean",
    },
    Language {
        iso: "kj",
        name: "Kuanyama",
    },
    Language {
        iso: "ku",
        name: "Kurdish",
    },
    Language {
        iso: "lo",
        name: "Lao",
    },
    Language {
        iso: "la",
        name: "Latin",
    },
    Language {
        iso: "lv",
        name: "Latvian",
    },
    Language {
        iso: "li",
        name: "Limburgan",
    },
    Language {
        iso: "ln",
        name: "Lingala",
    },
    Language {
        iso: "lt",
        name: "Lithuanian",
    },
    Language {
        iso: "lb",
        name: "Luxembourgish",
    },
    Language {
        iso: "lu",
        name: "Luba-Katanga",
    },
    Language {
        iso: "lg",
        name: "Ganda",
    },
    Language {
        iso: "mk",
        name: "Macedonian",
    },
    Language {
        iso: "mh",
        name: "Marshallese",
    },
    Language {
        iso: "ml",
        name: "Malayalam",
    },
    Language {
        iso: "mi",
        name: "Maori",
    },
    Language {
        iso: "mr",
        name: "Marathi",
    },
    Language {
        iso: "ms",
        name: "Malay",
    },
    Language {
        iso: "mg",
        name: "Malagasy",
    },
    Language {
        iso: "mt",
        name: "Maltese",
    },
    Language {
        iso: "mn",
        name: "Mongolian",
    },
    Language {
        iso: "na",
        name: "Nauru",
    },
    Language {
        iso: "nv",
        name: "Navajo",
    },
    Language {
        iso: "nr",
        name: "South Ndebele",
    },
    Language {
        iso: "nd",
        name: "North Ndebele",
    },
    Language {
        iso: "ng",
        name: "Ndonga",
    },
    Language {
        iso: "ne",
        name: "Nepali",
    },
    Language {
        iso: "nn",
        name: "Norwegian Nynorsk",
    },
    Language {
        iso: "nb",
        name: "Norwegian Bokmal",
    },
    Language {
        iso: "no",
        name: "Norwegian",
    },
    Language {
        iso: "ny",
        name: "Chichewa",
    },
    Language {
        iso: "oc",
        name: "Occitan",
    },
    Language {
        iso: "oj",
        name: "Ojibwa",
    },
    Language {
        iso: "or",
        name: "Oriya",
    },
    Language {
        iso: "om",
        name: "Oromo",
    },
    Language {
        iso: "os",
        name: "Ossetian",
    },
    Language {
        iso: "pa",
        name: "Punjabi",
    },
    Language {
        iso: "fa",
        name: "Persian",
    },
    Language {
        iso: "pi",
        name: "Pali",
    },
    Language {
        iso: "pl",
        name: "Polish",
    },
    Language {
        iso: "pt",
        name: "Portuguese",
    },
    Language {
        iso: "ps",
        name: "Pashto",
    },
    Language {
        iso: "qu",
        name: "Quechua",
    },
    Language {
        iso: "rm",
        name: "Romansh",
    },
    Language {
        iso: "ro",
        name: "Romanian",
    },
    Language {
        iso: "rn",
        name: "Rundi",
    },
    Language {
        iso: "ru",
        name: "Russian",
    },
    Language {
        iso: "sg",
        name: "Sango",
    },
    Language {
        iso: "sa",
        name: "Sanskrit",
    },
    Language {
        iso: "si",
        name: "Sinhala",
    },
    Language {
        iso: "sk",
        name: "Slovak",
    },
    Language {
        iso: "sl",
        name: "Slovenian",
    },
    Language {
        iso: "se",
        name: "Northern Sami",
    },
    Language {
        iso: "sm",
        name: "Samoan",
    },
    Language {
        iso: "sn",
        name: "Shona",
    },
    Language {
        iso: "sd",
        name: "Sindhi",
    },
    Language {
        iso: "so",
        name: "Somali",
    },
    Language {
        iso: "st",
        name: "Southern Sotho",
    },
    Language {
        iso: "es",
        name: "Spanish",
    },
    Language {
        iso: "sc",
        name: "Sardinian",
    },
    Language {
        iso: "sr",
        name: "Serbian",
    },
    Language {
        iso: "ss",
        name: "Swati",
    },
    Language {
        iso: "su",
        name: "Sundanese",
    },
    Language {
        iso: "sw",
        name: "Swahili",
    },
    Language {
        iso: "sv",
        name: "Swedish",
    },
    Language {
        iso: "ty",
        name: "Tahitian",
    },
    Language {
        iso: "ta",
        name: "Tamil",
    },
    Language {
        iso: "tt",
        name: "Tatar",
    },
    Language {
        iso: "te",
        name: "Telugu",
    },
    Language {
        iso: "tg",
        name: "Tajik",
    },
    Language {
        iso: "tl",
        name: "Tagalog",
    },
    Language {
        iso: "th",
        name: "Thai",
    },
    Language {
        iso: "bo",
        name: "Tibetan",
    },
    Language {
        iso: "ti",
        name: "Tigrinya",
    },
    Language {
        iso: "to",
        name: "Tonga",
    },
    Language {
        iso: "tn",
        name: "Tswana",
    },
    Language {
        iso: "ts",
        name: "Tsonga",
    },
    Language {
        iso: "tk",
        name: "Turkmen",
    },
    Language {
        iso: "tr",
        name: "Turkish",
    },
    Language {
        iso: "tw",
        name: "Twi",
    },
    Language {
        iso: "ug",
        name: "Uighur",
    },
    Language {
        iso: "uk",
        name: "Ukrainian",
    },
    Language {
        iso: "ur",
        name: "Urdu",
    },
    Language {
        iso: "uz",
        name: "Uzbek",
    },
    Language {
        iso: "ve",
        name: "Venda",
    },
    Language {
        iso: "vi",
        name: "Vietnamese",
    },
    Language {
        iso: "vo",
        name: "Volapuk",
    },
    Language {
        iso: "cy",
        name: "Welsh",
    },
    Language {
        iso: "wa",
        name: "Walloon",
    },
    Language {
        iso: "wo",
        name: "Wolof",
    },
    Language {
        iso: "xh",
        name: "Xhosa",
    },
    Language {
        iso: "yi",
        name: "Yiddish",
    },
    Language {
        iso: "yo",
        name: "Yoruba",
    },
    Language {
        iso: "za",
        name: "Zhuang",
    },
    Language {
        iso: "zu",
        name: "Zulu",
    },
];

/// Languages whose name contains `filter`, ignoring case.
pub fn filter_languages(filter: &str) -> impl Iterator<Item = &'static Language> + '_ {
    LANGUAGES
        .iter()
        .filter(move |language| matches_filter(language.name, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn codes_are_unique() {
        let codes: BTreeSet<_> = LANGUAGES.iter().map(|language| language.iso).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
    }

    #[test]
    fn filter_is_case_insensitive() {
        let found: Vec<_> = filter_languages("TURK").map(|language| language.iso).collect();
        assert_eq!(found, ["tk", "tr"]);
    }
}
