use std::collections::{BTreeMap, BTreeSet};

use crate::SocialGraph;

impl SocialGraph {
    /// Users that are friends with both `u` and `v`
    pub fn mutual_friends(&self, u: &str, v: &str) -> BTreeSet<String> {
        match (self.friends(u), self.friends(v)) {
            (Some(ours), Some(theirs)) => {
                ours.intersection(theirs).cloned().collect()
            }
            _ => BTreeSet::new(),
        }
    }

    /// Partition all users into maximal sets connected by friendships.
    ///
    /// Isolated users form singleton components. Components are listed in
    /// the order of their smallest member.
    pub fn connected_components(&self) -> Vec<BTreeSet<String>> {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut components = Vec::new();

        for start in self.users() {
            if !visited.insert(start) {
                continue;
            }

            let mut component = BTreeSet::new();
            let mut stack = vec![start];
            while let Some(node) = stack.pop() {
                component.insert(node.to_owned());
                let friends = match self.adjacency.get(node) {
                    Some(friends) => friends,
                    None => continue,
                };
                for friend in friends {
                    if visited.insert(friend.as_str()) {
                        stack.push(friend);
                    }
                }
            }
            components.push(component);
        }

        log::trace!("{} connected components", components.len());
        components
    }

    /// Number of friends of `name`
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.friends(name).map(BTreeSet::len)
    }

    /// Users with their number of friends, most connected first and ties
    /// broken by name
    pub fn popularity(&self) -> Vec<(String, usize)> {
        let mut ranking: Vec<(String, usize)> = self
            .adjacency
            .iter()
            .map(|(name, friends)| (name.clone(), friends.len()))
            .collect();
        ranking.sort_by(|(a, a_degree), (b, b_degree)| {
            b_degree.cmp(a_degree).then_with(|| a.cmp(b))
        });
        ranking
    }

    /// Snapshot of every user with their friends, both in ascending order
    pub fn adjacency_list(&self) -> BTreeMap<String, Vec<String>> {
        self.adjacency
            .iter()
            .map(|(name, friends)| {
                (name.clone(), friends.iter().cloned().collect())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// A - B - C, D alone
    fn scenario() -> SocialGraph {
        let mut graph = SocialGraph::default();
        graph.add_friendship("A", "B");
        graph.add_friendship("B", "C");
        graph.add_user("D", "", Vec::new());
        graph
    }

    #[rstest]
    #[case("A", "C", &["B"])]
    #[case("C", "A", &["B"])]
    #[case("A", "B", &[])]
    #[case("A", "D", &[])]
    #[case("A", "nobody", &[])]
    fn mutual_friends(
        #[case] u: &str,
        #[case] v: &str,
        #[case] expected: &[&str],
    ) {
        assert_eq!(scenario().mutual_friends(u, v), set(expected));
    }

    #[test]
    fn components_partition_all_users() {
        let graph = scenario();
        assert_eq!(
            graph.connected_components(),
            vec![set(&["A", "B", "C"]), set(&["D"])]
        );
    }

    #[test]
    fn components_are_ordered_by_smallest_member() {
        let mut graph = SocialGraph::default();
        graph.add_friendship("zed", "bob");
        graph.add_friendship("cid", "yan");
        graph.add_user("amy", "", Vec::new());

        let components = graph.connected_components();
        assert_eq!(
            components,
            vec![set(&["amy"]), set(&["bob", "zed"]), set(&["cid", "yan"])]
        );

        let total: usize = components.iter().map(BTreeSet::len).sum();
        assert_eq!(total, graph.len());
    }

    #[test]
    fn empty_graph_has_no_components() {
        assert!(SocialGraph::default().connected_components().is_empty());
    }

    #[test]
    fn popularity_ranks_by_degree_then_name() {
        let graph = scenario();
        assert_eq!(
            graph.popularity(),
            vec![
                ("B".to_string(), 2),
                ("A".to_string(), 1),
                ("C".to_string(), 1),
                ("D".to_string(), 0),
            ]
        );
        assert_eq!(graph.degree("B"), Some(2));
        assert_eq!(graph.degree("nobody"), None);
    }

    #[test]
    fn adjacency_list_is_sorted() {
        let graph = scenario();
        let adjacency = graph.adjacency_list();

        assert_eq!(
            adjacency.keys().collect::<Vec<_>>(),
            vec!["A", "B", "C", "D"]
        );
        assert_eq!(adjacency["B"], vec!["A".to_string(), "C".to_string()]);
        assert!(adjacency["D"].is_empty());
    }
}
