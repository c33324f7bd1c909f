use std::collections::{HashMap, VecDeque};

use crate::SocialGraph;

impl SocialGraph {
    /// Find a shortest chain of friendships leading from `src` to `dst`.
    ///
    /// Returns `None` if either user is unknown or `dst` cannot be reached
    /// from `src`, and `[src]` when both are the same user. Friends are
    /// explored in ascending name order, so among several shortest paths the
    /// one discovered first in that order is returned.
    pub fn shortest_path(&self, src: &str, dst: &str) -> Option<Vec<String>> {
        if !self.contains(src) || !self.contains(dst) {
            return None;
        }
        if src == dst {
            return Some(vec![src.to_owned()]);
        }

        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(src);
        parent.insert(src, src);

        while let Some(node) = queue.pop_front() {
            let friends = match self.adjacency.get(node) {
                Some(friends) => friends,
                None => continue,
            };
            for friend in friends {
                if parent.contains_key(friend.as_str()) {
                    continue;
                }
                parent.insert(friend, node);
                if friend == dst {
                    return Some(reconstruct(&parent, src, dst));
                }
                queue.push_back(friend);
            }
        }

        log::trace!("No path between {} and {}", src, dst);
        None
    }

    /// Number of friendships on a shortest path between `src` and `dst`
    pub fn degrees_of_separation(&self, src: &str, dst: &str) -> Option<usize> {
        self.shortest_path(src, dst).map(|path| path.len() - 1)
    }
}

/// Walk parent pointers back from `dst` to `src`
fn reconstruct<'a>(
    parent: &HashMap<&'a str, &'a str>,
    src: &str,
    dst: &'a str,
) -> Vec<String> {
    let mut path = vec![dst.to_owned()];
    let mut node = dst;
    while node != src {
        match parent.get(node) {
            Some(previous) => {
                node = *previous;
                path.push(node.to_owned());
            }
            None => break,
        }
    }
    path.reverse();
    path
}
