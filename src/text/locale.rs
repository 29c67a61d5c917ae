//! Per-language pattern tables.
//!
//! Question markers, experience markers, statistic shapes, conclusion
//! headings, power words and snippet placeholders are data, not code, so a
//! new language is a new table. Tables are compiled once when an engine is
//! built; an invalid pattern fails construction.

use crate::error::{Result, SeoError};
use crate::validators::{QuestionType, SnippetTemplate};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of the ordered question-marker table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionMarker {
    /// Question type reported when the pattern matches
    pub question_type: QuestionType,
    /// Case-insensitive regular expression
    pub pattern: String,
}

impl QuestionMarker {
    fn new(question_type: QuestionType, pattern: &str) -> Self {
        Self {
            question_type,
            pattern: pattern.to_string(),
        }
    }
}

/// Inner HTML of each featured-snippet placeholder (`{keyword}` is substituted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SnippetPlaceholders {
    pub definition: String,
    pub list: String,
    pub paragraph: String,
    pub table: String,
}

impl SnippetPlaceholders {
    /// Placeholder body for a template.
    #[must_use]
    pub fn for_template(&self, template: SnippetTemplate) -> &str {
        match template {
            SnippetTemplate::Definition => &self.definition,
            SnippetTemplate::List => &self.list,
            SnippetTemplate::Paragraph => &self.paragraph,
            SnippetTemplate::Table => &self.table,
        }
    }

    fn french() -> Self {
        Self {
            definition: "<p><strong>{keyword}</strong> : [définition claire et concise en 40 à 60 mots]</p>".to_string(),
            list: "<ol><li>[Étape 1]</li><li>[Étape 2]</li><li>[Étape 3]</li><li>[Étape 4]</li></ol>".to_string(),
            paragraph: "<p>[Réponse directe sur {keyword} en 40 à 60 mots]</p>".to_string(),
            table: "<table><thead><tr><th>{keyword}</th><th>Prix</th><th>Détails</th></tr></thead><tbody><tr><td>[Option]</td><td>[Montant]</td><td>[Précision]</td></tr></tbody></table>".to_string(),
        }
    }

    fn english() -> Self {
        Self {
            definition: "<p><strong>{keyword}</strong>: [clear, concise definition in 40 to 60 words]</p>".to_string(),
            list: "<ol><li>[Step 1]</li><li>[Step 2]</li><li>[Step 3]</li><li>[Step 4]</li></ol>".to_string(),
            paragraph: "<p>[Direct answer about {keyword} in 40 to 60 words]</p>".to_string(),
            table: "<table><thead><tr><th>{keyword}</th><th>Price</th><th>Details</th></tr></thead><tbody><tr><td>[Option]</td><td>[Amount]</td><td>[Note]</td></tr></tbody></table>".to_string(),
        }
    }
}

impl Default for SnippetPlaceholders {
    fn default() -> Self {
        Self::french()
    }
}

/// Pattern table for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LocalePatterns {
    /// Language code passed to the text generator
    pub language: String,
    /// Ordered question markers; the first matching entry wins
    pub question_markers: Vec<QuestionMarker>,
    /// First-person / hands-on experience markers
    pub experience_markers: Vec<String>,
    /// Statistic shapes (percentages, amounts, durations)
    pub statistic_patterns: Vec<String>,
    /// Heading texts that open a conclusion section
    pub conclusion_headings: Vec<String>,
    /// Title power words (reported in title metadata)
    pub power_words: Vec<String>,
    /// Featured-snippet placeholder bodies
    pub snippet_placeholders: SnippetPlaceholders,
}

impl Default for LocalePatterns {
    fn default() -> Self {
        Self::french()
    }
}

const ENGLISH_QUESTIONS: &[(QuestionType, &str)] = &[
    (QuestionType::HowMuch, r"\bhow\s+(?:much|many)\b"),
    (QuestionType::HowMuch, r"\bwhat\s+(?:does|do)\b.*\bcost\b"),
    (QuestionType::What, r"^\s*(?:what\s+(?:is|are)|define)\b"),
    (QuestionType::How, r"^\s*how\s+(?:to|do|does|can|should)\b"),
    (QuestionType::Why, r"^\s*why\b"),
];

const ENGLISH_EXPERIENCE: &[&str] = &[
    r"\bI(?:'ve|’ve| have)\s+(?:tested|tried|used)\b",
    r"\bwe(?:'ve|’ve| have)\s+(?:tested|tried|used)\b",
    r"\bin\s+(?:my|our)\s+experience\b",
    r"\bpersonally\b",
    r"\bhands-on\b",
];

const ENGLISH_STATISTICS: &[&str] = &[
    r"\d+(?:[.,]\d+)?\s?%",
    r"[$£€]\s?\d+(?:[.,]\d+)*",
    r"\b\d+(?:[.,]\d+)*\s?(?:[$£€]|(?:dollars?|euros?|pounds?|USD|EUR|GBP)\b)",
    r"\b\d+\s?(?:years?|months?|weeks?|days?|hours?|minutes?)\b",
];

impl LocalePatterns {
    /// French table. English question, experience and statistic markers are
    /// appended since platform articles routinely quote English sources.
    #[must_use]
    pub fn french() -> Self {
        let mut question_markers = vec![
            QuestionMarker::new(QuestionType::HowMuch, r"^\s*combien\b"),
            QuestionMarker::new(
                QuestionType::HowMuch,
                r"\b(?:quel|quelle)s?\s+(?:est|sont)?\s*(?:le|la|les)?\s*(?:prix|co[uû]ts?|tarifs?|budget)\b",
            ),
            QuestionMarker::new(
                QuestionType::What,
                r"^\s*(?:qu['’]est[- ]ce\s+(?:que|qu['’])|c['’]est\s+quoi|(?:quel|quelle)s?\s+(?:est|sont))",
            ),
            QuestionMarker::new(QuestionType::What, r"\bd[ée]finition\b"),
            QuestionMarker::new(QuestionType::How, r"^\s*comment\b"),
            QuestionMarker::new(QuestionType::Why, r"^\s*pourquoi\b"),
        ];
        question_markers.extend(
            ENGLISH_QUESTIONS
                .iter()
                .map(|(t, p)| QuestionMarker::new(*t, p)),
        );

        let mut experience_markers: Vec<String> = [
            r"\bj['’]ai\s+(?:test[ée]|essay[ée]|utilis[ée]|constat[ée])",
            r"\bnous\s+avons\s+(?:test[ée]|essay[ée]|utilis[ée]|constat[ée])",
            r"\b(?:mon|notre)\s+exp[ée]rience\b",
            r"\bpersonnellement\b",
            r"\bselon\s+moi\b",
            r"\bj['’]ai\b",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        experience_markers.extend(ENGLISH_EXPERIENCE.iter().map(|s| (*s).to_string()));

        let mut statistic_patterns: Vec<String> = [
            r"\b\d+\s?(?:ans?|ann[ée]es?|mois|semaines?|jours?|heures?|minutes?)\b",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        statistic_patterns.extend(ENGLISH_STATISTICS.iter().map(|s| (*s).to_string()));

        Self {
            language: "fr".to_string(),
            question_markers,
            experience_markers,
            statistic_patterns,
            conclusion_headings: vec![
                r"(?:en\s+)?conclusion".to_string(),
                r"pour\s+conclure".to_string(),
                r"en\s+r[ée]sum[ée]".to_string(),
                r"le\s+mot\s+de\s+la\s+fin".to_string(),
            ],
            power_words: [
                "meilleur", "guide", "complet", "ultime", "gratuit", "facile", "rapide",
                "essentiel", "secret", "astuces", "nouveau", "comparatif",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            snippet_placeholders: SnippetPlaceholders::french(),
        }
    }

    /// English table.
    #[must_use]
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            question_markers: ENGLISH_QUESTIONS
                .iter()
                .map(|(t, p)| QuestionMarker::new(*t, p))
                .collect(),
            experience_markers: ENGLISH_EXPERIENCE.iter().map(|s| (*s).to_string()).collect(),
            statistic_patterns: ENGLISH_STATISTICS.iter().map(|s| (*s).to_string()).collect(),
            conclusion_headings: vec![
                r"(?:in\s+)?conclusion".to_string(),
                r"(?:in\s+)?summary".to_string(),
                r"final\s+thoughts".to_string(),
                r"wrapping\s+up".to_string(),
            ],
            power_words: [
                "best", "guide", "complete", "ultimate", "free", "easy", "fast", "essential",
                "secret", "tips", "new", "proven",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            snippet_placeholders: SnippetPlaceholders::english(),
        }
    }

    /// Compile every pattern, failing on the first invalid one.
    pub fn compile(&self) -> Result<CompiledPatterns> {
        let question_markers = self
            .question_markers
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                Ok((
                    marker.question_type,
                    case_insensitive(&marker.pattern, &format!("question_markers[{i}]"))?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let experience_markers = compile_all(&self.experience_markers, "experience_markers")?;
        let statistic_patterns = compile_all(&self.statistic_patterns, "statistic_patterns")?;

        let conclusion_heading = if self.conclusion_headings.is_empty() {
            None
        } else {
            let alternation = self.conclusion_headings.join("|");
            let source = format!(r"(?is)<h[1-6]\b[^>]*>\s*(?:<[^>]+>\s*)*(?:{alternation})");
            Some(Regex::new(&source).map_err(|e| SeoError::pattern("conclusion_headings", e))?)
        };

        Ok(CompiledPatterns {
            language: self.language.clone(),
            question_markers,
            experience_markers,
            statistic_patterns,
            conclusion_heading,
            power_words: self
                .power_words
                .iter()
                .map(|w| crate::text::fold(w.trim()))
                .filter(|w| !w.is_empty())
                .collect(),
            snippet_placeholders: self.snippet_placeholders.clone(),
        })
    }
}

fn case_insensitive(pattern: &str, context: &str) -> Result<Regex> {
    Regex::new(&format!("(?i){pattern}")).map_err(|e| SeoError::pattern(context, e))
}

fn compile_all(patterns: &[String], field: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, p)| case_insensitive(p, &format!("{field}[{i}]")))
        .collect()
}

/// A [`LocalePatterns`] table with every regex compiled.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    language: String,
    question_markers: Vec<(QuestionType, Regex)>,
    experience_markers: Vec<Regex>,
    statistic_patterns: Vec<Regex>,
    conclusion_heading: Option<Regex>,
    power_words: Vec<String>,
    snippet_placeholders: SnippetPlaceholders,
}

impl CompiledPatterns {
    /// Language code of the source table.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// First question type whose marker matches, if any.
    #[must_use]
    pub fn question_type(&self, text: &str) -> Option<QuestionType> {
        self.question_markers
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(t, _)| *t)
    }

    /// Whether any experience marker occurs in the text.
    #[must_use]
    pub fn has_experience_marker(&self, text: &str) -> bool {
        self.experience_markers.iter().any(|re| re.is_match(text))
    }

    /// Total number of statistic matches across all patterns.
    #[must_use]
    pub fn count_statistics(&self, text: &str) -> usize {
        self.statistic_patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }

    /// Byte offset of the first conclusion heading in an HTML document.
    #[must_use]
    pub fn conclusion_offset(&self, html: &str) -> Option<usize> {
        self.conclusion_heading
            .as_ref()
            .and_then(|re| re.find(html))
            .map(|m| m.start())
    }

    /// Power words contained in the (folded) text.
    #[must_use]
    pub fn power_words_in(&self, text: &str) -> Vec<String> {
        let folded = crate::text::fold(text);
        self.power_words
            .iter()
            .filter(|w| folded.contains(w.as_str()))
            .cloned()
            .collect()
    }

    /// Snippet placeholder bodies.
    #[must_use]
    pub fn snippet_placeholders(&self) -> &SnippetPlaceholders {
        &self.snippet_placeholders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_compile() {
        assert!(LocalePatterns::french().compile().is_ok());
        assert!(LocalePatterns::english().compile().is_ok());
    }

    #[test]
    fn test_invalid_pattern_fails_loudly() {
        let mut table = LocalePatterns::english();
        table.statistic_patterns.push("(unclosed".to_string());
        match table.compile() {
            Err(SeoError::Pattern { context, .. }) => {
                assert_eq!(context, "statistic_patterns[4]");
            }
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_statistics_count() {
        let patterns = LocalePatterns::french().compile().unwrap();
        let text = "Une hausse de 35 % en 2 ans, pour un budget de 1200 € ou $40.";
        assert_eq!(patterns.count_statistics(text), 4);
        assert_eq!(patterns.count_statistics("aucun chiffre"), 0);
    }

    #[test]
    fn test_experience_markers() {
        let patterns = LocalePatterns::french().compile().unwrap();
        assert!(patterns.has_experience_marker("J’ai testé ce modèle pendant un mois"));
        assert!(patterns.has_experience_marker("In our experience this works"));
        assert!(!patterns.has_experience_marker("Le produit est livré en deux jours"));
    }

    #[test]
    fn test_conclusion_offset() {
        let patterns = LocalePatterns::french().compile().unwrap();
        let html = "<p>intro</p><h2>Détails</h2><p>x</p><h2>En conclusion</h2><p>fin</p>";
        let offset = patterns.conclusion_offset(html).unwrap();
        assert!(html[offset..].starts_with("<h2>En conclusion"));
        assert!(patterns.conclusion_offset("<h2>Détails</h2>").is_none());
    }

    #[test]
    fn test_power_words() {
        let patterns = LocalePatterns::french().compile().unwrap();
        let found = patterns.power_words_in("Le Guide COMPLET du vélo");
        assert_eq!(found, vec!["guide".to_string(), "complet".to_string()]);
    }
}
