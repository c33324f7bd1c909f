#[cfg(test)]
mod tests {
    use social_graph::{
        load_or_create, GraphConfig, GraphStorage, LoginOutcome, Profile,
        SendOutcome, SharedGraph, SocialGraph, Tier,
    };
    use std::thread;
    use tempdir::TempDir;

    fn tastes(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_graph_survives_file_round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();
        let temp_dir =
            TempDir::new("social").expect("Failed to create temporary directory");
        let root = temp_dir.path();

        let config = GraphConfig::default();
        config.store(root).expect("Failed to store configuration");
        let mut storage = config.storage(root);

        let mut graph =
            load_or_create(&storage, config.catalog.clone()).unwrap();
        assert!(graph.is_empty());

        graph.add_user_with(
            "ann",
            Profile::new("hi", tastes(&["Jazz", "Coding", "Travel"]))
                .with_password("secret"),
        );
        graph.add_user("bob", "", tastes(&["Coding", "Gaming", "Fantasy"]));
        graph.add_user("cid", "", tastes(&["Travel", "Cooking", "Mystery"]));
        graph.add_friendship("ann", "bob");
        assert_eq!(graph.send_friend_request("cid", "bob"), SendOutcome::Sent);
        storage
            .persist_graph(&graph.to_state())
            .expect("Failed to persist graph");

        let config = GraphConfig::load(root).unwrap();
        let storage = config.storage(root);
        assert!(storage.exists());
        let loaded = load_or_create(&storage, config.catalog.clone()).unwrap();

        assert_eq!(loaded.adjacency_list(), graph.adjacency_list());
        assert_eq!(loaded.login("ann", "secret"), LoginOutcome::Accepted);
        assert_eq!(loaded.login("ann", "guess"), LoginOutcome::WrongPassword);
        assert_eq!(loaded.incoming_requests("bob"), vec!["cid".to_string()]);

        let recs = loaded.recommend_friends("bob");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "cid");
        assert_eq!(recs[0].tier, Tier::Cluster);
    }

    #[test]
    fn test_shared_graph_across_threads() {
        let shared = SharedGraph::new(SocialGraph::default());

        let writers: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        let name = format!("user{}", i * 25 + j);
                        shared
                            .write(|graph| graph.add_friendship("root", &name))
                            .unwrap();
                    }
                })
            })
            .collect();
        let reader = {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    shared
                        .read(|graph| graph.check_consistency())
                        .unwrap()
                        .unwrap();
                }
            })
        };

        for writer in writers {
            writer.join().unwrap();
        }
        reader.join().unwrap();

        let graph = shared.snapshot().unwrap();
        assert_eq!(graph.degree("root"), Some(100));
        assert_eq!(graph.connected_components().len(), 1);
        assert_eq!(graph.popularity()[0], ("root".to_string(), 100));
    }
}
