use std::collections::HashMap;

#[derive(Debug)]
struct Node {
    children: HashMap<u8, Node>,
    replacement: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            replacement: None,
        }
    }
}

/// Byte trie over substitution patterns.
#[derive(Debug)]
pub(crate) struct SubstitutionTrie {
    root: Node,
}

impl SubstitutionTrie {
    /// Build from (pattern, replacement) pairs. A repeated pattern keeps its
    /// first replacement.
    pub fn build<'a>(rules: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut trie = SubstitutionTrie { root: Node::new() };
        for (pattern, replacement) in rules {
            trie.insert(pattern, replacement);
        }
        trie
    }

    /// Longest pattern that is a prefix of `input`, as (byte length,
    /// replacement).
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, b) in input.iter().enumerate() {
            match node.children.get(b) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(r) = node.replacement.as_deref() {
                best = Some((i + 1, r));
            }
        }
        best
    }

    fn insert(&mut self, pattern: &str, replacement: &str) {
        let mut node = &mut self.root;
        for &b in pattern.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        if node.replacement.is_none() {
            node.replacement = Some(replacement.to_string());
        }
    }
}
