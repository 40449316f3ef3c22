// Graph construction: institution-based linking of discovered entities and
// mock graph synthesis. Both are pure; randomness is injected through `Sampler`.

pub mod handlers;
pub mod linker;
pub mod sampler;
pub mod synthesizer;

pub use linker::assemble_graph;
pub use sampler::Sampler;
pub use synthesizer::generate_mock_graph;
