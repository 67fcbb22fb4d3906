use super::map::Map;

macro_rules! id_wrapper {
    ($struct:ident) => {
        /// A numeric id newtype
        #[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[repr(transparent)]
        pub struct $struct(pub u32);

        impl From<u32> for $struct {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for u32 {
            fn from(value: $struct) -> u32 {
                value.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_wrapper!(NodeId);
id_wrapper!(EdgeId);
id_wrapper!(CommodityId);

impl EdgeId {
    /// Edge ids double as dense indices into the per-edge vectors of a
    /// [`Flow`](super::Flow).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node with its layout position and optional display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// The node id
    pub id: NodeId,
    /// Horizontal layout coordinate
    pub x: f64,
    /// Vertical layout coordinate
    pub y: f64,
    /// Optional display label
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

/// A directed edge with its physical parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// The edge id
    pub id: EdgeId,
    /// The tail node
    pub from: NodeId,
    /// The head node
    pub to: NodeId,
    /// Throughput capacity (flow per unit time), positive
    pub capacity: f64,
    /// Fixed travel delay across the edge, non-negative
    #[cfg_attr(feature = "serde", serde(rename = "transitTime"))]
    pub transit_time: f64,
}

/// A commodity with its display attribute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Commodity {
    /// The commodity id
    pub id: CommodityId,
    /// Display color, handed through to flow steps as the commodity label
    pub color: String,
}

/// The static network description: nodes, edges and commodities keyed by id.
///
/// Constructed once from input data and read-only afterwards; the
/// decomposition only ever looks up edge parameters and commodity colors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "NetworkDto", into = "NetworkDto")
)]
pub struct Network {
    /// Nodes keyed by id
    pub nodes: Map<NodeId, Node>,
    /// Edges keyed by id
    pub edges: Map<EdgeId, Edge>,
    /// Commodities keyed by id
    pub commodities: Map<CommodityId, Commodity>,
}

impl Network {
    /// Builds the id-keyed maps from flat entity lists, preserving input order.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, commodities: Vec<Commodity>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|node| (node.id, node)).collect(),
            edges: edges.into_iter().map(|edge| (edge.id, edge)).collect(),
            commodities: commodities
                .into_iter()
                .map(|commodity| (commodity.id, commodity))
                .collect(),
        }
    }
}

/// DTO matching the flat serialized form: entity lists rather than id-keyed maps
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct NetworkDto {
    /// The node list
    pub nodes: Vec<Node>,
    /// The edge list
    pub edges: Vec<Edge>,
    /// The commodity list
    pub commodities: Vec<Commodity>,
}

impl From<NetworkDto> for Network {
    fn from(value: NetworkDto) -> Self {
        Self::new(value.nodes, value.edges, value.commodities)
    }
}

impl From<Network> for NetworkDto {
    fn from(value: Network) -> Self {
        NetworkDto {
            nodes: value.nodes.into_iter().map(|(_, node)| node).collect(),
            edges: value.edges.into_iter().map(|(_, edge)| edge).collect(),
            commodities: value
                .commodities
                .into_iter()
                .map(|(_, commodity)| commodity)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_keyed_by_id() {
        let network = Network::new(
            vec![
                Node {
                    id: NodeId(0),
                    x: 0.0,
                    y: 0.0,
                    label: Some("s".into()),
                },
                Node {
                    id: NodeId(1),
                    x: 1.0,
                    y: 0.0,
                    label: None,
                },
            ],
            vec![Edge {
                id: EdgeId(0),
                from: NodeId(0),
                to: NodeId(1),
                capacity: 2.0,
                transit_time: 3.0,
            }],
            vec![Commodity {
                id: CommodityId(7),
                color: "#ff0000".into(),
            }],
        );
        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.edges[&EdgeId(0)].capacity, 2.0);
        assert_eq!(network.commodities[&CommodityId(7)].color, "#ff0000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_flat_lists() {
        let raw = r##"{
            "nodes": [
                { "id": 0, "x": 0.0, "y": 0.0, "label": "s" },
                { "id": 1, "x": 100.0, "y": 0.0 }
            ],
            "edges": [
                { "id": 0, "from": 0, "to": 1, "capacity": 2.0, "transitTime": 3.0 }
            ],
            "commodities": [
                { "id": 0, "color": "#a52a2a" }
            ]
        }"##;

        let network = serde_json::from_str::<Network>(raw).unwrap();
        assert_eq!(network.edges[&EdgeId(0)].transit_time, 3.0);
        assert_eq!(network.nodes[&NodeId(1)].label, None);
    }
}
