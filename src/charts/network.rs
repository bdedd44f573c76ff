//! Neural network diagram layout

use serde::Serialize;

use super::{Point, ViewBox};

const MARGIN_X: f64 = 50.0;
const MARGIN_Y: f64 = 30.0;
const LAYER_SPACING: f64 = 75.0;
const NODE_SPACING: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetworkNode {
    pub layer: usize,
    pub index: usize,
    pub position: Point,
    pub active: bool,
}

/// Connection between two nodes in adjacent layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Synapse {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkLayout {
    pub nodes: Vec<NetworkNode>,
    pub synapses: Vec<Synapse>,
    pub view_box: ViewBox,
}

/// Fully connected feed-forward diagram.
///
/// `active[i]` highlights node row `i` in every layer; rows beyond the slice
/// are inactive.
pub fn network_layout(layers: usize, nodes_per_layer: usize, active: &[bool]) -> NetworkLayout {
    let position = |layer: usize, index: usize| {
        Point::new(
            MARGIN_X + layer as f64 * LAYER_SPACING,
            MARGIN_Y + index as f64 * NODE_SPACING,
        )
    };

    let mut nodes = Vec::with_capacity(layers * nodes_per_layer);
    for layer in 0..layers {
        for index in 0..nodes_per_layer {
            nodes.push(NetworkNode {
                layer,
                index,
                position: position(layer, index),
                active: active.get(index).copied().unwrap_or(false),
            });
        }
    }

    let mut synapses = Vec::new();
    for layer in 1..layers {
        for from in 0..nodes_per_layer {
            for to in 0..nodes_per_layer {
                synapses.push(Synapse {
                    from: position(layer - 1, from),
                    to: position(layer, to),
                });
            }
        }
    }

    let width = if layers == 0 {
        0.0
    } else {
        2.0 * MARGIN_X + (layers - 1) as f64 * LAYER_SPACING
    };
    let height = if nodes_per_layer == 0 {
        0.0
    } else {
        2.0 * MARGIN_Y + (nodes_per_layer - 1) as f64 * NODE_SPACING
    };

    NetworkLayout {
        nodes,
        synapses,
        view_box: ViewBox { width, height },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let layout = network_layout(5, 8, &[]);
        assert_eq!(layout.nodes.len(), 40);
        assert_eq!(layout.synapses.len(), 4 * 64);
        assert_eq!(layout.view_box.width, 400.0);
        assert_eq!(layout.view_box.height, 200.0);
    }

    #[test]
    fn test_synapses_join_node_centres() {
        let layout = network_layout(2, 2, &[]);
        assert_eq!(layout.synapses[0].from, layout.nodes[0].position);
        assert_eq!(layout.synapses[3].to, layout.nodes[3].position);
    }

    #[test]
    fn test_active_rows_highlight_every_layer() {
        let layout = network_layout(3, 4, &[false, true]);
        let active: Vec<_> = layout.nodes.iter().filter(|n| n.active).collect();
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|n| n.index == 1));
    }
}
