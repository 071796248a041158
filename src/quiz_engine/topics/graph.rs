use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::Rng;
use crate::quiz_engine::{
    helpers::{pick, question},
    models::{Question, QuestionKind, Topic},
};

/// A small weighted digraph with the endpoints the question asks about.
#[derive(Debug, Clone, Copy)]
pub struct GraphInstance {
    pub vertices: &'static [char],
    pub edges: &'static [(char, char, u32)],
    pub source: char,
    pub target: char,
}

/// Fixed instance pool.
pub const GRAPHS: [GraphInstance; 3] = [
    GraphInstance {
        vertices: &['A', 'B', 'C', 'D'],
        edges: &[('A', 'B', 2), ('A', 'C', 4), ('B', 'C', 1), ('B', 'D', 7), ('C', 'D', 3)],
        source: 'A',
        target: 'D',
    },
    GraphInstance {
        vertices: &['A', 'B', 'C', 'D', 'E'],
        edges: &[('A', 'B', 1), ('A', 'C', 4), ('B', 'D', 2), ('C', 'D', 1), ('D', 'E', 3)],
        source: 'A',
        target: 'E',
    },
    GraphInstance {
        vertices: &['A', 'B', 'C', 'D'],
        edges: &[('A', 'B', 3), ('A', 'C', 5), ('B', 'D', 2), ('C', 'D', 4)],
        source: 'A',
        target: 'D',
    },
];

/// A shortest path: total weight and the traversed edges in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub cost: u32,
    pub hops: Vec<(char, char, u32)>,
}

impl ShortestPath {
    /// "A→B→C→D"
    pub fn route(&self) -> String {
        let mut out = String::new();
        if let Some(&(from, _, _)) = self.hops.first() {
            out.push(from);
        }
        for &(_, to, _) in &self.hops {
            out.push('→');
            out.push(to);
        }
        out
    }
}

impl GraphInstance {
    fn index_of(&self, v: char) -> Option<usize> {
        self.vertices.iter().position(|&x| x == v)
    }

    /// "A→B(2), A→C(4), ..."
    pub fn edge_list(&self) -> String {
        self.edges
            .iter()
            .map(|(a, b, w)| format!("{a}→{b}({w})"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Dijkstra from `source` to `target`. `None` if the target is unreachable.
    pub fn shortest_path(&self) -> Option<ShortestPath> {
        let n = self.vertices.len();
        let src = self.index_of(self.source)?;
        let dst = self.index_of(self.target)?;

        let mut adj: Vec<Vec<(usize, u32)>> = vec![Vec::new(); n];
        for &(a, b, w) in self.edges {
            if let (Some(i), Some(j)) = (self.index_of(a), self.index_of(b)) {
                adj[i].push((j, w));
            }
        }

        let mut dist: Vec<Option<u32>> = vec![None; n];
        let mut prev: Vec<Option<(usize, u32)>> = vec![None; n];
        let mut heap = BinaryHeap::new();
        dist[src] = Some(0);
        heap.push(Reverse((0u32, src)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if dist[u].is_some_and(|best| d > best) {
                continue;
            }
            if u == dst {
                break;
            }
            for &(v, w) in &adj[u] {
                let cand = d + w;
                if dist[v].map_or(true, |cur| cand < cur) {
                    dist[v] = Some(cand);
                    prev[v] = Some((u, w));
                    heap.push(Reverse((cand, v)));
                }
            }
        }

        let cost = dist[dst]?;
        let mut hops = Vec::new();
        let mut at = dst;
        while let Some((from, w)) = prev[at] {
            hops.push((self.vertices[from], self.vertices[at], w));
            at = from;
        }
        hops.reverse();
        Some(ShortestPath { cost, hops })
    }
}

pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    let graph = pick(rng, &GRAPHS);
    build(graph, question_id)
}

/// Build the question for one graph instance.
pub fn build(graph: &GraphInstance, question_id: String) -> Question {
    let (src, dst) = (graph.source, graph.target);
    let prompt = format!(
        "En un grafo con {} vértices donde {}, ¿cuál es la distancia del camino más corto de {src} a {dst}?",
        graph.vertices.len(),
        graph.edge_list(),
    );

    let (answer, explanation) = match graph.shortest_path() {
        Some(path) => {
            let sum = path
                .hops
                .iter()
                .map(|(a, b, w)| format!("{a}→{b}({w})"))
                .collect::<Vec<_>>()
                .join(" + ");
            (
                path.cost.to_string(),
                format!(
                    "El camino más corto es {} con peso {sum} = {}. Usamos el algoritmo de Dijkstra \
                     para encontrar el camino de costo mínimo.",
                    path.route(),
                    path.cost
                ),
            )
        }
        None => (
            "∞".to_string(),
            format!("No existe ningún camino de {src} a {dst}, así que la distancia es infinita."),
        ),
    };

    question(
        question_id,
        Topic::Graph,
        format!("Dijkstra:{src}-{dst}"),
        "Camino Más Corto",
        prompt,
        answer,
        QuestionKind::FreeText,
        Some("Suma los pesos de las aristas en diferentes caminos y elige el menor".to_string()),
        explanation,
        "Algoritmo de Dijkstra",
    )
}
