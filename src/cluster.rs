use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::catalog::TasteCatalog;

/// Union-find forest over taste tags.
///
/// Two tags end up in the same cluster when some profile lists both of
/// them, directly or through a chain of profiles sharing tags. Roots are an
/// implementation detail and carry no meaning outside this structure.
///
/// The index is never maintained incrementally: [`TasteClusters::rebuild`]
/// recomputes it from every profile after each taste-affecting mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TasteClusters {
    parent: HashMap<String, String>,
}

impl TasteClusters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from scratch.
    ///
    /// Every catalog tag is seeded as a singleton, then for each taste list
    /// with more than one tag the first tag is united with every following
    /// one.
    pub fn rebuild<'a, I>(catalog: &TasteCatalog, taste_lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut clusters = TasteClusters::new();
        for tag in catalog.tags() {
            clusters.find(tag);
        }

        for tastes in taste_lists {
            if let [first, rest @ ..] = tastes {
                for taste in rest {
                    clusters.union(first, taste);
                }
            }
        }

        clusters.flatten();
        log::trace!(
            "Taste clusters rebuilt: {} tags in {} clusters",
            clusters.len(),
            clusters.clusters().len()
        );
        clusters
    }

    /// Number of tags known to the index
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.parent.contains_key(tag)
    }

    /// Return the root of `tag`, compressing the path on the way.
    ///
    /// A tag that was never seen is inserted as its own singleton cluster.
    pub fn find(&mut self, tag: &str) -> String {
        let mut root = match self.parent.get(tag) {
            Some(parent) => parent.clone(),
            None => {
                self.parent.insert(tag.to_owned(), tag.to_owned());
                return tag.to_owned();
            }
        };
        while let Some(next) = self.parent.get(&root) {
            if *next == root {
                break;
            }
            root = next.clone();
        }

        let mut node = tag.to_owned();
        while node != root {
            let next = self
                .parent
                .insert(node, root.clone())
                .unwrap_or_else(|| root.clone());
            node = next;
        }

        root
    }

    /// Merge the clusters of `a` and `b`
    ///
    /// The root of `a` is attached under the root of `b`.
    pub fn union(&mut self, a: &str, b: &str) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent.insert(root_a, root_b);
        }
    }

    /// Root lookup without path compression, for shared (read-only) access.
    ///
    /// Returns `None` for tags the index has never seen.
    pub fn root(&self, tag: &str) -> Option<&str> {
        let mut current = self.parent.get_key_value(tag)?.0.as_str();
        loop {
            let parent = self.parent.get(current)?.as_str();
            if parent == current {
                return Some(current);
            }
            current = parent;
        }
    }

    pub fn same_cluster(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.root(a), self.root(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }

    /// Return every tag sharing a cluster with any tag of `tastes`.
    ///
    /// Tags unknown to the index form their own singleton cluster, so they
    /// are returned as they are.
    pub fn cluster_members(&self, tastes: &[String]) -> HashSet<String> {
        let mut members = HashSet::new();
        let mut roots = HashSet::new();
        for taste in tastes {
            match self.root(taste) {
                Some(root) => {
                    roots.insert(root);
                }
                None => {
                    members.insert(taste.clone());
                }
            }
        }

        members.extend(
            self.parent
                .keys()
                .filter(|tag| {
                    self.root(tag)
                        .map_or(false, |root| roots.contains(root))
                })
                .cloned(),
        );
        members
    }

    /// Export the partition as sorted sets, ordered by their smallest tag
    pub fn clusters(&self) -> Vec<BTreeSet<String>> {
        let mut by_root: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
        for tag in self.parent.keys() {
            if let Some(root) = self.root(tag) {
                by_root.entry(root).or_default().insert(tag.clone());
            }
        }

        let mut clusters: Vec<BTreeSet<String>> =
            by_root.into_values().collect();
        clusters.sort();
        clusters
    }

    /// Point every tag directly at its root
    fn flatten(&mut self) {
        let tags: Vec<String> = self.parent.keys().cloned().collect();
        for tag in tags {
            self.find(&tag);
        }
    }
}
