use dynflow_core::models::{
    Commodity, CommodityId, Edge, EdgeId, Flow, Network, Node, NodeId, PwlFunction, Rates,
    StepFunction,
};
use dynflow_steps::decompose_edge;

fn sample_network() -> Network {
    Network::new(
        vec![
            Node {
                id: NodeId(0),
                x: 0.0,
                y: 0.0,
                label: Some("s".into()),
            },
            Node {
                id: NodeId(1),
                x: 100.0,
                y: 0.0,
                label: Some("t".into()),
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
            id: CommodityId(0),
            color: "#a52a2a".into(),
        }],
    )
}

fn sample_flow() -> Flow {
    let rates: Rates = [(
        CommodityId(0),
        StepFunction::new(vec![0.0, 5.0, 10.0], vec![2.0, 4.0, 0.0]).unwrap(),
    )]
    .into_iter()
    .collect();
    Flow::new(
        vec![rates.clone()],
        vec![rates],
        vec![PwlFunction::new(vec![0.0], vec![0.0], 0.0, 0.0).unwrap()],
    )
    .unwrap()
}

#[test]
fn snapshot_uses_edge_parameters_and_colors() {
    let split = decompose_edge(&sample_network(), &sample_flow(), EdgeId(0), 6.0).unwrap();

    assert_eq!(split.in_edge_steps.len(), 1);
    assert_eq!(split.in_edge_steps[0].values[0].label, "#a52a2a");
    // Queue length is identically zero in this flow.
    assert!(split.queue_steps.is_empty());
}

#[test]
fn unknown_edge_yields_none() {
    assert!(decompose_edge(&sample_network(), &sample_flow(), EdgeId(9), 6.0).is_none());
}
