//! Library side of the `restaurant-mart` binary: logging setup and the
//! Extract → Transform → Load orchestrator.

pub mod logging;
pub mod pipeline;
