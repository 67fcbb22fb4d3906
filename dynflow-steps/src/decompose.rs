use crate::{FlowStep, SplitSteps, StepValue};
use dynflow_core::models::{
    CommodityId, EdgeId, Flow, Map, Network, PwlFunction, StepFunction, merge_breakpoints,
};
use std::hash::Hash;

/// Builds the per-commodity flow steps for one edge's outflow history.
///
/// The breakpoints of all commodities' outflow functions are merged into one
/// ordered sequence; every two subsequent breakpoints delimit one step, whose
/// values are each commodity's rate sampled at the step start, paired with
/// that commodity's display attribute. The result covers the merged range
/// with no gaps or overlaps and is independent of any query time, so callers
/// may compute it once per edge and reuse it across frames.
///
/// Commodities missing from `attrs` are skipped.
pub fn calc_outflow_steps<K: Eq + Hash, A: Clone>(
    outflow: &Map<K, StepFunction>,
    attrs: &Map<K, A>,
) -> Vec<FlowStep<A>> {
    let times = merge_breakpoints(outflow.values().map(|rate| rate.times()));

    times
        .windows(2)
        .map(|window| {
            let (start, end) = (window[0], window[1]);
            let values = outflow
                .iter()
                .filter_map(|(commodity, rate)| {
                    attrs.get(commodity).map(|label| StepValue {
                        label: label.clone(),
                        value: rate.eval(start),
                    })
                })
                .collect();
            FlowStep { start, end, values }
        })
        .collect()
}

/// Splits an edge's outflow steps, at query time `t`, into the flow
/// currently in transit on the edge and the flow still waiting in its queue.
///
/// Flow released from the queue at time `s` occupies the edge over
/// `[s, s + transit_time]`, so a step is visible on the edge for the part of
/// its window inside `[t - transit_time, t]`; surviving steps are emitted
/// with offsets relative to `t`, clipped to `[0, transit_time]`. Queue steps
/// cover the flow whose release lies beyond `t + transit_time`, normalized
/// by `capacity` to queue positions and negated, ordered outward from the
/// edge entry at position 0.
///
/// `outflow_steps` must be time-ordered and non-overlapping, as produced by
/// [`calc_outflow_steps`]; behavior on overlapping steps is unspecified.
pub fn split_outflow_steps<A: Clone>(
    outflow_steps: &[FlowStep<A>],
    queue: &PwlFunction,
    transit_time: f64,
    capacity: f64,
    t: f64,
) -> SplitSteps<A> {
    let release = t + transit_time;

    let mut in_edge_steps = Vec::new();
    for step in outflow_steps {
        // Steps are time-ordered, so nothing past this point is in transit yet.
        if step.start > release {
            break;
        }
        let start = (step.start - t).max(0.0);
        let end = (step.end - t).min(transit_time);
        if start < end {
            in_edge_steps.push(FlowStep {
                start,
                end,
                values: step.values.clone(),
            });
        }
    }

    let queue_size = queue.eval(t);
    let queue_steps = if queue_size > 0.0 {
        match outflow_steps.iter().position(|step| step.end >= release) {
            Some(first) => queue_steps_of(&outflow_steps[first..], release, capacity, queue_size),
            // The queued flow predates all known history; report it absent
            // rather than extrapolate.
            None => Vec::new(),
        }
    } else {
        Vec::new()
    };

    SplitSteps {
        in_edge_steps,
        queue_steps,
    }
}

/// The queue walk, as an explicit fold over the not-yet-released steps.
///
/// The accumulator is the physical size of queued flow covered so far; each
/// step contributes the portion of its window past the release horizon,
/// weighted by its combined rate. Emission stops once the accumulated size
/// covers the measured queue, and the final (possibly partial) window is
/// clamped to it. Values are rescaled so each step's commodity mix sums to
/// the edge capacity, which is the width the queue is drawn at.
fn queue_steps_of<A: Clone>(
    steps: &[FlowStep<A>],
    release: f64,
    capacity: f64,
    queue_size: f64,
) -> Vec<FlowStep<A>> {
    let (emitted, _) = steps
        .iter()
        .fold((Vec::new(), 0.0), |(mut emitted, acc_size), step| {
            if acc_size >= queue_size {
                return (emitted, acc_size);
            }

            let step_capacity = step.total_rate();
            if step_capacity <= 0.0 {
                return (emitted, acc_size);
            }
            let step_size = step_capacity * (step.end - release.max(step.start));

            let window_start = acc_size / capacity;
            let window_end = (acc_size + step_size).min(queue_size) / capacity;
            emitted.push(FlowStep {
                start: -window_end,
                end: -window_start,
                values: step
                    .values
                    .iter()
                    .map(|entry| StepValue {
                        label: entry.label.clone(),
                        value: entry.value / step_capacity * capacity,
                    })
                    .collect(),
            });

            (emitted, acc_size + step_size)
        });
    emitted
}

/// Decomposes one edge of a computed flow at query time `t`.
///
/// Thin composition of [`calc_outflow_steps`] and [`split_outflow_steps`]
/// using the edge's parameters and the commodity colors from the network.
/// Returns `None` when the edge is unknown to the network or the flow.
pub fn decompose_edge(
    network: &Network,
    flow: &Flow,
    edge: EdgeId,
    t: f64,
) -> Option<SplitSteps<String>> {
    let edge = network.edges.get(&edge)?;
    let outflow = flow.outflow(edge.id)?;
    let queue = flow.queue(edge.id)?;

    let colors = network
        .commodities
        .iter()
        .map(|(id, commodity)| (*id, commodity.color.clone()))
        .collect::<Map<CommodityId, String>>();

    let steps = calc_outflow_steps(outflow, &colors);
    tracing::trace!(edge = %edge.id, steps = steps.len(), t, "splitting edge outflow steps");
    Some(split_outflow_steps(
        &steps,
        queue,
        edge.transit_time,
        edge.capacity,
        t,
    ))
}
