use super::*;
use crate::graph::{Edge, Vertex};

#[test]
fn test_empty_graph_json() {
    let out = JsonRenderer::new(1.0).render(&Graph::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "rect");
    assert_eq!(items[0]["fill"]["red"], 100);
    assert_eq!(items[0]["stroke"]["alpha"], 1.0);
}

#[test]
fn test_json_preserves_order_and_fields() {
    let g = Graph {
        vertices: vec![Vertex::bare(1), Vertex::bare(2)],
        edges: vec![Edge::new(1, 2), Edge::new(2, 3)],
    };
    let out = JsonRenderer::new(1.0).render(&g).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let kinds: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["line", "circle", "circle", "rect"]);
    assert_eq!(value[0]["stroke_width"], 2.5);
    assert!(value[1]["r"].as_f64().unwrap() > 0.0);
}
