use petgraph::{
    algo::tarjan_scc,
    graph::NodeIndex,
    stable_graph::StableGraph,
    visit::{EdgeRef, IntoEdgeReferences},
    Undirected,
};

/// Rooms are nodes weighted by their index into the room list; an edge means a corridor was carved
/// between the two rooms.
pub type RoomGraph = StableGraph<usize, (), Undirected>;

/// Pairs of room indices joined by a corridor, each pair ordered low to high, sorted.
pub fn room_links(graph: &RoomGraph) -> Vec<(usize, usize)> {
    let mut links: Vec<_> = graph
        .edge_references()
        .map(|e| {
            let (a, b) = (graph[e.source()], graph[e.target()]);
            (a.min(b), a.max(b))
        })
        .collect();
    links.sort_unstable();

    links
}

/// True iff the rooms form a single path visiting them in placement order.
pub fn is_placement_chain(graph: &RoomGraph) -> bool {
    let links = room_links(graph);

    links.len() == graph.node_count().saturating_sub(1)
        && links.iter().enumerate().all(|(i, link)| *link == (i, i + 1))
}

pub fn num_components(graph: &RoomGraph) -> usize {
    tarjan_scc(graph).len()
}

pub fn room_node(graph: &RoomGraph, room: usize) -> Option<NodeIndex> {
    graph.node_indices().find(|n| graph[*n] == room)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> RoomGraph {
        let mut graph = RoomGraph::default();
        let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i)).collect();
        for w in nodes.windows(2) {
            graph.add_edge(w[0], w[1], ());
        }

        graph
    }

    #[test]
    fn chain_is_recognized() {
        for n in 0..6 {
            let graph = chain(n);
            assert!(is_placement_chain(&graph));
            assert_eq!(room_links(&graph).len(), n.saturating_sub(1));
        }
        assert_eq!(num_components(&chain(5)), 1);
    }

    #[test]
    fn skipping_link_is_not_a_chain() {
        let mut graph = chain(3);
        let (a, c) = (room_node(&graph, 0).unwrap(), room_node(&graph, 2).unwrap());
        graph.add_edge(a, c, ());

        assert!(!is_placement_chain(&graph));
    }

    #[test]
    fn disconnected_rooms() {
        let mut graph = chain(2);
        graph.add_node(2);

        assert!(!is_placement_chain(&graph));
        assert_eq!(num_components(&graph), 2);
    }
}
