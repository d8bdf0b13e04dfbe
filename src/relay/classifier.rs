//! Keyword-based topic classifier
//!
//! Pure substring containment over the lower-cased conversation text.
//! There is no tokenization: a keyword inside an unrelated word still
//! matches (e.g. "uu" inside "kuuk"). Callers rely on that behavior.

use super::{Message, Role};

/// Legal-topic keywords, checked as lower-case substrings
pub const DEFAULT_LEGAL_KEYWORDS: &[&str] = &[
    "hukum",
    "pasal",
    "uu",
    "undang",
    "kuhp",
    "kuhper",
    "pidana",
    "perdata",
    "korupsi",
    "suap",
    "kontrak",
    "perjanjian",
    "pengadilan",
    "hakim",
    "jaksa",
    "advokat",
    "pengacara",
    "gugatan",
    "sengketa",
    "sanksi",
    "denda",
    "penjara",
    "polisi",
    "laporan polisi",
    "peraturan",
    "waris",
    "cerai",
    "sertifikat",
    "legal",
    "putusan",
    "mahkamah",
    "tilang",
];

/// Decides whether a conversation belongs to a domain by keyword containment
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    /// Create a classifier over the given keyword table
    ///
    /// Keywords are lower-cased once here so matching stays case-insensitive.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Classifier for the built-in legal keyword table
    pub fn legal() -> Self {
        Self::new(DEFAULT_LEGAL_KEYWORDS)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns true if any keyword occurs in the joined, lower-cased contents
    pub fn is_match(&self, messages: &[Message]) -> bool {
        let text = messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        self.matched_keyword(&text).is_some()
    }

    /// First keyword (in table order) contained in already lower-cased text
    pub fn matched_keyword(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::legal()
    }
}

/// Content of the most recent user message, scanning from the end
pub fn latest_user_message(messages: &[Message]) -> Option<&str> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_kuhp_question_is_legal() {
        let classifier = KeywordClassifier::legal();
        assert!(classifier.is_match(&[Message::user("Apa itu KUHP?")]));
    }

    #[test]
    fn test_farming_question_is_not_legal() {
        let classifier = KeywordClassifier::legal();
        assert!(!classifier.is_match(&[Message::user("Kapan waktu terbaik menanam padi?")]));
    }

    #[test]
    fn test_empty_conversation_is_not_legal() {
        assert!(!KeywordClassifier::legal().is_match(&[]));
    }

    #[test]
    fn test_keyword_in_earlier_assistant_message_counts() {
        let classifier = KeywordClassifier::legal();
        let messages = [
            Message::assistant("Saya bisa menjelaskan pasal-pasal dalam KUHP."),
            Message::user("Lanjutkan"),
        ];
        assert!(classifier.is_match(&messages));
    }

    #[test]
    fn test_substring_inside_unrelated_word_matches() {
        // "uu" is a keyword; "muuk" is not a legal term but still matches.
        let classifier = KeywordClassifier::legal();
        assert!(classifier.is_match(&[Message::user("muuk")]));
    }

    #[test]
    fn test_messages_joined_with_separator() {
        // "hu" + "kum" across a message boundary is not "hukum"
        let classifier = KeywordClassifier::new(["hukum"]);
        let messages = [Message::user("hu"), Message::user("kum")];
        assert!(!classifier.is_match(&messages));
    }

    #[test]
    fn test_custom_keywords_are_lowercased() {
        let classifier = KeywordClassifier::new(["PANEN"]);
        assert_eq!(classifier.keywords(), ["panen"]);
        assert!(classifier.is_match(&[Message::user("Kapan Panen?")]));
    }

    #[test]
    fn test_matched_keyword_follows_table_order() {
        let classifier = KeywordClassifier::new(["kontrak", "korupsi"]);
        assert_eq!(
            classifier.matched_keyword("korupsi dalam kontrak"),
            Some("kontrak")
        );
    }

    #[test]
    fn test_latest_user_message_scans_backwards() {
        let messages = [
            Message::user("pertama"),
            Message::assistant("jawaban"),
            Message::user("kedua"),
            Message::assistant("jawaban lagi"),
        ];
        assert_eq!(latest_user_message(&messages), Some("kedua"));
    }

    #[test]
    fn test_latest_user_message_none_without_user() {
        let messages = [
            Message::system("aturan"),
            Message::assistant("halo, ada pertanyaan hukum?"),
        ];
        assert_eq!(latest_user_message(&messages), None);
    }

    proptest! {
        #[test]
        fn prop_any_text_containing_keyword_matches(
            prefix in "[a-z ]{0,20}",
            suffix in "[a-z ]{0,20}",
            idx in 0usize..DEFAULT_LEGAL_KEYWORDS.len(),
            upper in any::<bool>(),
        ) {
            let keyword = DEFAULT_LEGAL_KEYWORDS[idx];
            let keyword = if upper { keyword.to_uppercase() } else { keyword.to_string() };
            let content = format!("{prefix}{keyword}{suffix}");
            prop_assert!(KeywordClassifier::legal().is_match(&[Message::user(content)]));
        }

        #[test]
        fn prop_digits_never_match(content in "[0-9 ]{0,200}") {
            prop_assert!(!KeywordClassifier::legal().is_match(&[Message::user(content)]));
        }
    }
}
