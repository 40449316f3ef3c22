// Discovery runs: in-memory record of each graph request, its step log and result.

pub mod handlers;
pub mod store;
