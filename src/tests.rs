use crate::storage::{GraphState, GraphStorage, MemoryStorage};
use crate::{Profile, SendOutcome, SocialGraph, TasteCatalog, Tier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const NAMES: [&str; 8] = ["ann", "bob", "cid", "dan", "eve", "fay", "gus", "hal"];

fn tastes(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

fn scenario_catalog() -> TasteCatalog {
    TasteCatalog::new(["Rock Music", "Jazz", "Coding", "Football"]).unwrap()
}

/// A[Rock Music, Jazz] - B[Jazz, Coding] - C[Coding], D[Football]
fn scenario() -> SocialGraph {
    let mut graph = SocialGraph::new(scenario_catalog());
    graph.add_user("A", "", tastes(&["Rock Music", "Jazz"]));
    graph.add_user("B", "", tastes(&["Jazz", "Coding"]));
    graph.add_user("C", "", tastes(&["Coding"]));
    graph.add_user("D", "", tastes(&["Football"]));
    graph.add_friendship("A", "B");
    graph.add_friendship("B", "C");
    graph
}

fn assert_symmetric(graph: &SocialGraph) {
    for user in graph.users() {
        let friends = graph.friends(user).unwrap();
        assert!(!friends.contains(user), "{} is its own friend", user);
        for friend in friends {
            assert!(
                graph.friends(friend).unwrap().contains(user),
                "{} -> {} is one-sided",
                user,
                friend
            );
        }
    }
    graph.check_consistency().unwrap();
}

// concrete scenario

#[test]
fn scenario_clusters_and_queries() {
    let graph = scenario();

    let clusters = graph.clusters();
    assert!(clusters.same_cluster("Rock Music", "Coding"));
    assert!(!clusters.same_cluster("Jazz", "Football"));

    let recs = graph.recommend_friends("A");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "C");
    assert_eq!(recs[0].tier.rank(), 2);
    assert_eq!(recs[0].shared_tastes, 0);

    let mutual: Vec<_> = graph.mutual_friends("A", "C").into_iter().collect();
    assert_eq!(mutual, vec!["B".to_string()]);

    let components = graph.connected_components();
    assert_eq!(components.len(), 2);
    assert_eq!(components[1], BTreeSet::from(["D".to_string()]));

    assert_eq!(graph.shortest_path("A", "D"), None);
    assert_eq!(graph.degrees_of_separation("A", "C"), Some(2));
}

// graph invariants

#[test]
fn random_operations_keep_graph_symmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = SocialGraph::default();

    for _ in 0..500 {
        let u = NAMES[rng.gen_range(0..NAMES.len())];
        let v = NAMES[rng.gen_range(0..NAMES.len())];
        match rng.gen_range(0..6) {
            0 => {
                graph.add_user(u, "", tastes(&["Jazz"]));
            }
            1 => {
                graph.remove_user(u);
            }
            2 | 3 => {
                graph.add_friendship(u, v);
            }
            4 => {
                graph.remove_friendship(u, v);
            }
            _ => {
                graph.send_friend_request(u, v);
            }
        }
        assert_symmetric(&graph);
    }
}

#[test]
fn self_friendship_is_ignored() {
    let mut graph = SocialGraph::default();
    graph.add_user("ann", "", Vec::new());

    assert!(!graph.add_friendship("ann", "ann"));
    assert!(!graph.add_friendship("  ann ", "ann"));
    assert!(graph.friends("ann").unwrap().is_empty());
}

#[test]
fn blank_names_are_ignored() {
    let mut graph = SocialGraph::default();
    assert!(!graph.add_user("   ", "", Vec::new()));
    assert!(!graph.add_friendship("", "bob"));
    assert!(graph.is_empty());
}

#[test]
fn implicit_users_get_empty_profiles() {
    let mut graph = SocialGraph::default();
    assert!(graph.add_friendship(" ann ", "bob"));
    assert!(!graph.add_friendship("bob", "ann"));

    assert_eq!(graph.users().collect::<Vec<_>>(), vec!["ann", "bob"]);
    assert_eq!(graph.profile("ann"), Some(&Profile::default()));
    assert_eq!(*graph.get_profile("nobody"), Profile::default());
}

#[test]
fn add_then_remove_leaves_no_trace() {
    let mut graph = scenario();
    let before = graph.to_state();
    let clusters_before = graph.clusters().clusters();

    graph.add_user("E", "", tastes(&["Football", "Coding"]));
    graph.add_friendship("E", "A");
    graph.add_friendship("E", "D");
    graph.send_friend_request("E", "C");
    assert!(graph.clusters().same_cluster("Football", "Jazz"));

    assert!(graph.remove_user("E"));
    assert!(!graph.remove_user("E"));

    assert_eq!(graph.to_state(), before);
    assert_eq!(graph.clusters().clusters(), clusters_before);
    assert!(!graph.clusters().same_cluster("Football", "Jazz"));
}

#[test]
fn editing_tastes_rebuilds_clusters() {
    let mut graph = scenario();
    assert!(graph.edit_profile("B", "new bio", tastes(&["Jazz"]), None));

    assert!(!graph.clusters().same_cluster("Jazz", "Coding"));
    assert_eq!(graph.profile("B").unwrap().bio, "new bio");
    let recs = graph.recommend_friends("A");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].tier, Tier::FriendsOfFriends);

    assert!(!graph.edit_profile("nobody", "", Vec::new(), None));
}

#[test]
fn unknown_tastes_are_accepted() {
    let mut graph = SocialGraph::new(scenario_catalog());
    graph.add_user("ann", "", tastes(&["Jazz", "Knitting"]));
    graph.add_user("bob", "", tastes(&["Knitting"]));

    assert!(graph.clusters().same_cluster("Knitting", "Jazz"));
    assert!(graph.cluster_mates("bob").contains("ann"));
    assert_eq!(
        graph.catalog().unknown_tastes(&tastes(&["Jazz", "Knitting"])),
        vec!["Knitting"]
    );
}

// persistence

#[test]
fn state_round_trip_preserves_graph() {
    let mut graph = scenario();
    graph.send_friend_request("D", "A");
    graph.edit_profile("A", "hi", tastes(&["Rock Music", "Jazz"]), Some("pw"));
    graph.set_avatar("C", Some(vec![0xff, 0xd8]));

    let mut storage = MemoryStorage::new();
    storage.persist_graph(&graph.to_state()).unwrap();
    let restored = SocialGraph::from_state(
        scenario_catalog(),
        storage.load_graph().unwrap(),
    )
    .unwrap();

    assert_eq!(restored.to_state(), graph.to_state());
    assert_eq!(restored.adjacency_list(), graph.adjacency_list());
    assert_eq!(restored.clusters(), graph.clusters());
    assert!(restored.has_pending_request("D", "A"));
    assert_eq!(
        restored.profile("C").unwrap().avatar,
        Some(vec![0xff, 0xd8])
    );
}

#[test]
fn duplicated_friendships_collapse_on_load() {
    let state: GraphState = serde_json::from_str(
        r#"{
            "profiles": [{"name": "A", "bio": "", "tastes": []}],
            "friendships": [
                {"userA": "A", "userB": "B"},
                {"userA": "B", "userB": "A"},
                {"userA": "A", "userB": "A"}
            ],
            "requests": [{"from": "A", "to": "B"}, {"from": "B", "to": "zed"}]
        }"#,
    )
    .unwrap();

    let graph = SocialGraph::from_state(TasteCatalog::default(), state).unwrap();
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.to_state().friendships.len(), 1);
    // already friends, and unknown recipient
    assert!(graph.friend_requests().is_empty());
}

#[test]
fn graph_serializes_through_state() {
    let graph = scenario();
    let json = serde_json::to_value(&graph).unwrap();

    assert_eq!(json["friendships"][0]["userA"], "A");
    assert_eq!(json["friendships"][0]["userB"], "B");
    assert_eq!(json["profiles"][3]["name"], "D");

    let restored: SocialGraph = serde_json::from_value(json).unwrap();
    assert_eq!(restored.adjacency_list(), graph.adjacency_list());
    assert_eq!(restored.catalog(), &TasteCatalog::default());
}

// requests and views

#[test]
fn requests_flow_into_friendships() {
    let mut graph = scenario();
    assert_eq!(graph.send_friend_request("D", "C"), SendOutcome::Sent);
    assert_eq!(graph.send_friend_request("C", "D"), SendOutcome::Sent);

    assert!(graph.accept_friend_request("D", "C"));
    assert!(!graph.has_pending_request("C", "D"));
    assert_eq!(graph.shortest_path("A", "D").map(|p| p.len()), Some(4));

    let network: BTreeSet<String> = graph.friends_of_friends("D");
    assert_eq!(network, BTreeSet::from(["B".to_string()]));
    assert_symmetric(&graph);
}
