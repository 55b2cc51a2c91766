//! Definition-to-graph transformation.
//!
//! Every sense of every queried word becomes one response row (its first
//! gloss) plus one node and one edge per distinct token of that gloss. The
//! alternative human-readable shape summarises the same senses without
//! tokenizing them.
//!
//! ```text
//! LexiconResult + queried words
//!     |-- OutputMode::Graph -> Network { responses, nodes, edges }
//!     `-- OutputMode::Human -> HumanReadable { word -> { pos, senses } }
//! ```
//!
//! Both builders are pure: same input, same output, in query order.

use crate::tokenize::sense_tokens;
use crate::types::{LexiconResult, SenseEntry};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// A sense's definition, attributed to the word it was looked up for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    pub source: String,
    pub value: String,
}

/// A definition token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRecord {
    pub value: String,
}

/// Link from a queried word to a token of one of its definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
}

/// Word/definition graph ready for visualisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Network {
    pub responses: Vec<ResponseRecord>,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Network {
    /// Append one sense's response row and its token nodes/edges.
    fn push_sense(&mut self, word: &str, sense: &SenseEntry) {
        let definition = sense.definition();
        self.responses.push(ResponseRecord {
            source: word.to_string(),
            value: definition.to_string(),
        });

        for token in sense_tokens(definition, word) {
            self.nodes.push(NodeRecord {
                value: token.to_string(),
            });
            self.edges.push(EdgeRecord {
                source: word.to_string(),
                target: token.to_string(),
            });
        }
    }
}

/// Summary of one sense in human-readable mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HumanSense {
    /// Member words joined with `", "`.
    pub words: String,
    pub pos: String,
    pub definition: String,
}

/// Summary of one word in human-readable mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HumanWord {
    pub pos: String,
    pub senses: Vec<HumanSense>,
}

/// Word -> summary mapping, serialized as a JSON object in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanReadable {
    entries: Vec<(String, HumanWord)>,
}

impl HumanReadable {
    pub fn get(&self, word: &str) -> Option<&HumanWord> {
        self.entries
            .iter()
            .find(|(key, _)| key == word)
            .map(|(_, entry)| entry)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }
}

impl Serialize for HumanReadable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, entry) in &self.entries {
            map.serialize_entry(word, entry)?;
        }
        map.end()
    }
}

/// Which output shape a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Token graph (default)
    #[default]
    Graph,
    /// Per-word sense summary
    Human,
}

impl OutputMode {
    pub fn from_human_flag(human: bool) -> Self {
        if human {
            OutputMode::Human
        } else {
            OutputMode::Graph
        }
    }
}

/// Result of one builder run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendering {
    Network(Network),
    Human(HumanReadable),
}

/// Build the output shape selected by `mode`.
pub fn build(lexicon: &LexiconResult, words: &[String], mode: OutputMode) -> Rendering {
    match mode {
        OutputMode::Graph => Rendering::Network(build_network(lexicon, words)),
        OutputMode::Human => Rendering::Human(build_human(lexicon, words)),
    }
}

/// Build the token graph for `words`, in query order.
///
/// Unknown words are skipped without error. A word queried twice contributes
/// twice.
pub fn build_network(lexicon: &LexiconResult, words: &[String]) -> Network {
    let mut network = Network::default();

    for word in words {
        let Some(record) = lexicon.get(word) else {
            tracing::debug!("No lexicon entry for '{}'", word);
            continue;
        };

        for sense in &record.senses {
            network.push_sense(word, sense);
        }
    }

    tracing::debug!(
        responses = network.responses.len(),
        nodes = network.nodes.len(),
        edges = network.edges.len(),
        "Built network"
    );
    network
}

/// Build the human-readable summary for `words`.
///
/// Each known word appears once, at the position of its first occurrence.
pub fn build_human(lexicon: &LexiconResult, words: &[String]) -> HumanReadable {
    let mut seen = HashSet::new();
    let mut readable = HumanReadable::default();

    for word in words {
        let Some(record) = lexicon.get(word) else {
            continue;
        };
        if !seen.insert(word.as_str()) {
            continue;
        }

        let senses = record
            .senses
            .iter()
            .map(|sense| HumanSense {
                words: sense.words.join(", "),
                pos: sense.pos.clone(),
                definition: sense.definition().to_string(),
            })
            .collect();

        readable.entries.push((
            word.clone(),
            HumanWord {
                pos: record.pos.clone(),
                senses,
            },
        ));
    }

    readable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordRecord;
    use proptest::prelude::*;

    const DOG_GLOSS: &str = "a member of the genus Canis (probably descended from the common wolf) that has been domesticated by man";

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn dog_lexicon() -> LexiconResult {
        let mut lexicon = LexiconResult::new();
        lexicon.insert(
            "dog".to_string(),
            WordRecord::new(
                "n,v",
                vec![
                    SenseEntry::new(
                        "n",
                        [DOG_GLOSS, "\"the dog barked all night\""],
                        ["dog", "domestic_dog", "Canis_familiaris"],
                    ),
                    SenseEntry::new(
                        "v",
                        [
                            "go after with the intent to catch",
                            "\"The policeman chased the mugger\"",
                        ],
                        [
                            "chase",
                            "chase_after",
                            "trail",
                            "tail",
                            "tag",
                            "give_chase",
                            "dog",
                            "go_after",
                            "track",
                        ],
                    ),
                ],
            ),
        );
        lexicon
    }

    fn targets(network: &Network) -> Vec<&str> {
        network.edges.iter().map(|e| e.target.as_str()).collect()
    }

    #[test]
    fn test_dog_example_tokens() {
        let mut lexicon = dog_lexicon();
        lexicon.get_mut("dog").unwrap().senses.truncate(1);

        let network = build_network(&lexicon, &words(&["dog"]));

        assert_eq!(network.responses.len(), 1);
        assert_eq!(network.responses[0].source, "dog");
        assert_eq!(network.responses[0].value, DOG_GLOSS);
        assert_eq!(
            targets(&network),
            vec![
                "a", "member", "of", "the", "genus", "Canis", "probably", "descended", "from",
                "common", "wolf", "that", "has", "been", "domesticated", "by", "man"
            ]
        );
        let values: Vec<_> = network.nodes.iter().map(|n| n.value.as_str()).collect();
        assert_eq!(values, targets(&network));
        assert!(network.edges.iter().all(|e| e.source == "dog"));
    }

    #[test]
    fn test_only_first_gloss_used() {
        let network = build_network(&dog_lexicon(), &words(&["dog"]));

        assert_eq!(network.responses.len(), 2);
        assert_eq!(network.responses[1].value, "go after with the intent to catch");
        assert!(!targets(&network).contains(&"barked"));
        assert!(!targets(&network).contains(&"policeman"));
    }

    #[test]
    fn test_dedup_is_per_sense() {
        // "the" occurs in both senses: once per sense, never twice in one.
        let network = build_network(&dog_lexicon(), &words(&["dog"]));
        let the_count = network.nodes.iter().filter(|n| n.value == "the").count();
        assert_eq!(the_count, 2);
    }

    #[test]
    fn test_unknown_word_is_silently_skipped() {
        let network = build_network(&dog_lexicon(), &words(&["zzyzx"]));
        assert!(network.responses.is_empty());
        assert!(network.nodes.is_empty());
        assert!(network.edges.is_empty());
    }

    #[test]
    fn test_unknown_word_between_known_words() {
        let network = build_network(&dog_lexicon(), &words(&["dog", "zzyzx", "dog"]));
        assert_eq!(network.responses.len(), 4);
    }

    #[test]
    fn test_word_without_senses() {
        let mut lexicon = LexiconResult::new();
        lexicon.insert("empty".to_string(), WordRecord::new("n", vec![]));

        let network = build_network(&lexicon, &words(&["empty"]));
        assert_eq!(network, Network::default());
    }

    #[test]
    fn test_sense_without_gloss_emits_empty_response() {
        let mut lexicon = LexiconResult::new();
        lexicon.insert(
            "bare".to_string(),
            WordRecord::new("n", vec![SenseEntry::new("n", Vec::<String>::new(), ["bare"])]),
        );

        let network = build_network(&lexicon, &words(&["bare"]));
        assert_eq!(network.responses.len(), 1);
        assert_eq!(network.responses[0].value, "");
        assert!(network.nodes.is_empty());
    }

    #[test]
    fn test_numeric_tokens_dropped() {
        let mut lexicon = LexiconResult::new();
        lexicon.insert(
            "ref".to_string(),
            WordRecord::new("n", vec![SenseEntry::new("n", ["see sense 2 (1a) of 3rd"], ["ref"])]),
        );

        let network = build_network(&lexicon, &words(&["ref"]));
        assert_eq!(targets(&network), vec!["see", "sense", "of"]);
    }

    #[test]
    fn test_network_json_shape() {
        let mut lexicon = dog_lexicon();
        lexicon.get_mut("dog").unwrap().senses.truncate(1);

        let json = serde_json::to_value(build_network(&lexicon, &words(&["dog"]))).unwrap();
        assert_eq!(json["responses"][0]["source"], "dog");
        assert_eq!(json["nodes"][0]["value"], "a");
        assert_eq!(json["edges"][0]["source"], "dog");
        assert_eq!(json["edges"][0]["target"], "a");
    }

    #[test]
    fn test_human_two_senses() {
        let readable = build_human(&dog_lexicon(), &words(&["dog"]));
        let dog = readable.get("dog").unwrap();

        assert_eq!(dog.pos, "n,v");
        assert_eq!(dog.senses.len(), 2);
        assert_eq!(dog.senses[0].definition, DOG_GLOSS);
        assert_eq!(dog.senses[0].words, "dog, domestic_dog, Canis_familiaris");
        assert_eq!(dog.senses[1].pos, "v");
        assert_eq!(dog.senses[1].definition, "go after with the intent to catch");
    }

    #[test]
    fn test_human_keeps_query_order_and_collapses_duplicates() {
        let mut lexicon = dog_lexicon();
        lexicon.insert(
            "cat".to_string(),
            WordRecord::new("n", vec![SenseEntry::new("n", ["feline mammal"], ["cat"])]),
        );

        let readable = build_human(&lexicon, &words(&["dog", "nope", "cat", "dog"]));
        assert_eq!(readable.words().collect::<Vec<_>>(), vec!["dog", "cat"]);

        let json = serde_json::to_string(&readable).unwrap();
        assert!(json.find("\"dog\"").unwrap() < json.find("\"cat\"").unwrap());
    }

    #[test]
    fn test_build_selects_mode() {
        let lexicon = dog_lexicon();
        let query = words(&["dog"]);

        assert!(matches!(
            build(&lexicon, &query, OutputMode::Graph),
            Rendering::Network(_)
        ));
        assert!(matches!(
            build(&lexicon, &query, OutputMode::Human),
            Rendering::Human(_)
        ));
        assert_eq!(OutputMode::from_human_flag(true), OutputMode::Human);
        assert_eq!(OutputMode::default(), OutputMode::Graph);
    }

    #[test]
    fn test_build_is_idempotent() {
        let lexicon = dog_lexicon();
        let query = words(&["dog", "dog"]);

        let first = build(&lexicon, &query, OutputMode::Graph);
        let second = build(&lexicon, &query, OutputMode::Graph);
        assert_eq!(first, second);

        let first = serde_json::to_string_pretty(&first).unwrap();
        let second = serde_json::to_string_pretty(&second).unwrap();
        assert_eq!(first, second);
    }

    fn single_sense(word: &str, definition: &str) -> LexiconResult {
        let mut lexicon = LexiconResult::new();
        lexicon.insert(
            word.to_string(),
            WordRecord::new("n", vec![SenseEntry::new("n", [definition], [word])]),
        );
        lexicon
    }

    proptest! {
        #[test]
        fn tokens_are_clean_fragments(
            word in "[a-z]{1,6}",
            definition in "[a-zA-Z0-9 ,()]{0,60}",
        ) {
            let network = build_network(&single_sense(&word, &definition), &[word.clone()]);
            let fragments: Vec<&str> = definition.split([' ', ',', '(', ')']).collect();

            for node in &network.nodes {
                prop_assert!(fragments.contains(&node.value.as_str()));
                prop_assert!(!node.value.chars().any(|c| c.is_ascii_digit()));
                prop_assert_ne!(&node.value, &word);
            }
            for edge in &network.edges {
                prop_assert_eq!(&edge.source, &word);
                prop_assert_ne!(&edge.target, &word);
            }
        }

        #[test]
        fn nodes_pair_with_edges(
            word in "[a-z]{1,6}",
            definition in "[a-z0-9 ,()]{0,60}",
        ) {
            let network = build_network(&single_sense(&word, &definition), &[word.clone()]);

            prop_assert_eq!(network.nodes.len(), network.edges.len());
            for (node, edge) in network.nodes.iter().zip(&network.edges) {
                prop_assert_eq!(&node.value, &edge.target);
            }
            let unique: HashSet<_> = network.nodes.iter().map(|n| &n.value).collect();
            prop_assert_eq!(unique.len(), network.nodes.len());
        }
    }
}
