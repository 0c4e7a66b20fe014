use crate::{
    store::Graph,
    types::{Distance, Edge},
};

pub(super) fn dijkstra<G: Graph>(
    graph: &G,
    source: usize,
    target: Option<usize>,
) -> Vec<Option<Distance>> {
    let num_vertices = graph.num_vertices();
    let mut dist: Vec<Option<Distance>> = vec![None; num_vertices];
    let mut settled = vec![false; num_vertices];
    dist[source] = Some(0);
    while let Some((u, distance)) = (0..num_vertices)
        .filter(|&u| !settled[u])
        .filter_map(|u| dist[u].map(|distance| (u, distance)))
        .min_by_key(|&(_, distance)| distance)
    {
        settled[u] = true;
        if Some(u) == target {
            break;
        }
        for Edge { to, weight } in graph.incident(u) {
            let v = to as usize;
            let candidate = distance.saturating_add(weight);
            if dist[v].map_or(true, |best| candidate < best) {
                dist[v] = Some(candidate);
            }
        }
    }
    dist
}
