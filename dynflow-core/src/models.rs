mod flow;
mod map;
mod merge;
mod network;
mod pwl;
mod rank;
mod step;

pub use flow::{Flow, FlowDto, FlowError, Rates};
pub use map::Map;
pub use merge::merge_breakpoints;
pub use network::{Commodity, CommodityId, Edge, EdgeId, Network, NetworkDto, Node, NodeId};
pub use pwl::{PwlFunction, PwlFunctionDto, PwlFunctionError};
pub use rank::{rank_left, rank_strict};
pub use step::{StepFunction, StepFunctionDto, StepFunctionError};
