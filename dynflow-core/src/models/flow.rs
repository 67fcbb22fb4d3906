use super::map::Map;
use super::network::{CommodityId, EdgeId};
use super::pwl::PwlFunction;
use super::step::StepFunction;

/// Per-commodity rate functions, keyed by commodity id.
pub type Rates = Map<CommodityId, StepFunction>;

/// A computed dynamic flow, indexed by edge id.
///
/// Each edge carries one inflow and one outflow rate function per commodity,
/// plus a single queue-length function shared by all commodities on that
/// edge. The flow is produced by an upstream computation this crate does not
/// own; it is constructed once and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FlowDto", into = "FlowDto")
)]
pub struct Flow {
    inflow: Vec<Rates>,
    outflow: Vec<Rates>,
    queues: Vec<PwlFunction>,
}

impl Flow {
    /// Creates a new flow, checking that the per-edge vectors agree in length
    pub fn new(
        inflow: Vec<Rates>,
        outflow: Vec<Rates>,
        queues: Vec<PwlFunction>,
    ) -> Result<Self, FlowError> {
        Self::try_from(FlowDto {
            inflow,
            outflow,
            queues,
        })
    }

    /// The number of edges this flow covers.
    pub fn num_edges(&self) -> usize {
        self.queues.len()
    }

    /// The inflow rate functions for an edge, keyed by commodity.
    pub fn inflow(&self, edge: EdgeId) -> Option<&Rates> {
        self.inflow.get(edge.index())
    }

    /// The outflow rate functions for an edge, keyed by commodity.
    pub fn outflow(&self, edge: EdgeId) -> Option<&Rates> {
        self.outflow.get(edge.index())
    }

    /// The queue-length function for an edge.
    pub fn queue(&self, edge: EdgeId) -> Option<&PwlFunction> {
        self.queues.get(edge.index())
    }
}

/// DTO matching the serialized form; validation happens in the TryFrom
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct FlowDto {
    /// Per-edge inflow rates by commodity
    pub inflow: Vec<Rates>,
    /// Per-edge outflow rates by commodity
    pub outflow: Vec<Rates>,
    /// Per-edge queue-length functions
    pub queues: Vec<PwlFunction>,
}

impl Into<FlowDto> for Flow {
    fn into(self) -> FlowDto {
        FlowDto {
            inflow: self.inflow,
            outflow: self.outflow,
            queues: self.queues,
        }
    }
}

impl TryFrom<FlowDto> for Flow {
    type Error = FlowError;

    fn try_from(value: FlowDto) -> Result<Self, Self::Error> {
        if value.inflow.len() != value.queues.len() || value.outflow.len() != value.queues.len() {
            return Err(FlowError::EdgeCountMismatch);
        }
        Ok(Self {
            inflow: value.inflow,
            outflow: value.outflow,
            queues: value.queues,
        })
    }
}

/// Errors that can occur when assembling a Flow
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FlowError {
    /// Error when the per-edge vectors disagree in length
    #[error("Inflow, outflow and queues must cover the same edges")]
    EdgeCountMismatch,
}
