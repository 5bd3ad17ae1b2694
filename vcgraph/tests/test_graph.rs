/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use std::io::Write;
use vcgraph::graphs::random::ErdosRenyi;
use vcgraph::prelude::*;
use vcgraph::thread_pool;

#[test]
fn test_adjacency_is_symmetric() -> Result<()> {
    let graph = ErdosRenyi::new(50, 0.1, 10, 0).graph();
    for v in graph.vertices() {
        for (k, w) in v.edges() {
            let u = graph.vertex(k).expect("Missing neighbor");
            assert_eq!(u.weight(v.id()), Some(w));
        }
    }
    Ok(())
}

#[test]
fn test_idempotent_loading() -> Result<()> {
    let edges = [(5, 1, 3), (1, 7, 2), (7, 5, 1)];
    let once = Graph::from_edges(edges);
    let twice = Graph::from_edges(edges.into_iter().chain(edges));
    assert_eq!(once.num_vertices(), twice.num_vertices());
    assert_eq!(once.num_edges(), twice.num_edges());
    assert!(once.edges().eq(twice.edges()));
    // Reversed duplicates are ignored too
    let reversed = edges.map(|(i, j, w)| (j, i, w + 1));
    let reversed = Graph::from_edges(edges.into_iter().chain(reversed));
    assert!(once.edges().eq(reversed.edges()));
    assert_eq!(reversed.max_edge_weight(), 4);
    Ok(())
}

#[test]
fn test_first_appearance_order() -> Result<()> {
    let graph = Graph::from_reader("3 1 1\n2 3 1\n9 2 1\n".as_bytes())?;
    assert_eq!(
        graph.vertices().iter().map(Vertex::id).collect::<Vec<_>>(),
        vec![3, 1, 2, 9]
    );
    assert_eq!(graph.position(2), Some(2));
    assert_eq!(graph.position(4), None);
    Ok(())
}

#[test]
fn test_from_path() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "1 2 4")?;
    writeln!(file, "2 3 1")?;
    writeln!(file, "3 1 2")?;
    writeln!(file, "# the edge list ends here")?;
    writeln!(file, "3 4 1")?;
    file.flush()?;

    let graph = Graph::from_path(file.path())?;
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 3);
    assert_eq!(graph.max_edge_weight(), 4);
    assert!(graph.vertex(4).is_none());
    Ok(())
}

#[test]
fn test_extra_tokens_end_input() -> Result<()> {
    let graph = Graph::from_reader("1 2 1\n2 3 1 9\n3 4 1\n".as_bytes())?;
    assert_eq!(graph.num_vertices(), 2);
    assert_eq!(graph.num_edges(), 1);
    Ok(())
}

#[test]
fn test_invalid_utf8_ends_input() -> Result<()> {
    let graph = Graph::from_reader(&b"1 2 1\n2 3 1\n\xff\xfe\n3 4 1\n"[..])?;
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 2);
    assert!(graph.vertex(4).is_none());
    Ok(())
}

#[test]
fn test_from_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Graph::from_path(dir.path().join("missing.txt")).is_err());
}

#[test]
fn test_empty_input() -> Result<()> {
    let graph = Graph::from_reader("".as_bytes())?;
    assert!(graph.is_empty());
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(graph.max_edge_weight(), 0);
    Ok(())
}

#[test]
fn test_one_superstep_by_hand() -> Result<()> {
    // Path 1 - 2 - 3 with weights 2 and 5
    let mut graph = Graph::from_edges([(1, 2, 2), (2, 3, 5)]);
    let thread_pool = thread_pool![2];
    graph.seed();

    let mut deliveries = Vec::new();
    let mut duplicate = false;
    for v in graph.vertices_mut() {
        duplicate |= v.send(u64::MAX, 1, |k, msg| deliveries.push((k, msg)));
    }
    assert!(!duplicate);
    assert_eq!(deliveries.len(), 4);
    graph.deliver_all(deliveries);
    graph.process_inboxes(&thread_pool);
    graph.next_round();

    let v2 = graph.vertex(2).unwrap();
    assert!(v2.inbox().is_empty());
    assert_eq!(
        v2.outbox().iter_sorted(),
        vec![Message::new(1, 1, 2, Some(1)), Message::new(1, 3, 5, Some(3))]
    );
    assert_eq!(v2.best(2), Some(&Message::seed(2)));
    assert_eq!(graph.round(), 1);

    graph.clear();
    assert!(graph.vertices().iter().all(|v| v.outbox().is_empty()
        && v.inbox().is_empty()
        && v.best_per_source().is_empty()));
    assert_eq!(graph.round(), 1);
    Ok(())
}

#[test]
fn test_threshold_drops_messages() -> Result<()> {
    let mut graph = Graph::from_edges([(1, 2, 2), (1, 3, 5)]);
    graph.seed();
    let mut targets = Vec::new();
    graph.vertices_mut()[0].send(4, 1, |k, _| targets.push(k));
    assert_eq!(targets, vec![2]);
    Ok(())
}

#[test]
fn test_duplicate_detection() -> Result<()> {
    // Two copies of the message from 1 reach 4 through 2 and 3
    let mut v = Vertex::new(4);
    v.add_neighbor(2, 1);
    v.add_neighbor(3, 1);
    v.deliver(Message::new(1, 1, 1, Some(2)));
    v.deliver(Message::new(1, 1, 1, Some(3)));
    v.process_inbox();
    assert!(!v.send(u64::MAX, 1, |_, _| {}));
    assert!(v.send(u64::MAX, 1, |_, _| {}));
    assert_eq!(v.best_per_source().len(), 1);
    assert_eq!(v.best(1).map(|m| m.distance), Some(2));
    Ok(())
}

#[test]
fn test_flood_retention() -> Result<()> {
    let mut first = Vertex::new(0);
    first.add_neighbor(1, 1);
    first.add_neighbor(2, 1);
    let mut shortest = first.clone();

    // The long message arrives in an earlier round
    for v in [&mut first, &mut shortest] {
        v.deliver(Message::new(2, 9, 10, Some(1)));
    }
    first.process_inbox();
    shortest.process_inbox();
    assert_eq!(first.flood(Retention::First, |_, _| {}), 1);
    assert_eq!(shortest.flood(Retention::Shortest, |_, _| {}), 1);

    for v in [&mut first, &mut shortest] {
        v.deliver(Message::new(1, 9, 3, Some(2)));
        v.process_inbox();
    }
    let mut forwarded = Vec::new();
    assert_eq!(first.flood(Retention::First, |k, m| forwarded.push((k, m))), 0);
    assert!(forwarded.is_empty());
    assert_eq!(first.best(9).map(|m| m.distance), Some(11));

    assert_eq!(
        shortest.flood(Retention::Shortest, |k, m| forwarded.push((k, m))),
        1
    );
    assert_eq!(forwarded, vec![(1, Message::new(2, 9, 4, Some(0)))]);
    assert_eq!(shortest.best(9).map(|m| m.distance), Some(4));
    Ok(())
}

#[test]
#[should_panic]
fn test_message_from_stranger() {
    let mut v = Vertex::new(0);
    v.add_neighbor(1, 1);
    v.deliver(Message::new(0, 5, 0, Some(5)));
    v.process_inbox();
}

#[test]
fn test_report_serde() -> Result<()> {
    let mut graph = Graph::from_edges([(1, 2, 1), (2, 3, 1), (3, 1, 1)]);
    graph.set_diameter(1);
    graph.set_girth(3);
    let report = Report::new(&graph).cycle_found(true);
    let json = serde_json::to_string(&report)?;
    assert_eq!(serde_json::from_str::<Report>(&json)?, report);
    assert!(json.contains("\"girth\":3"));
    Ok(())
}
